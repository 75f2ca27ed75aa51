use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ConvertError, ConvertResult};

/// OSIS 2.1 book codes and their display names.
const CANON: &[(&str, &str)] = &[
    // Old Testament
    ("Gen", "Genesis"),
    ("Exod", "Exodus"),
    ("Lev", "Leviticus"),
    ("Num", "Numbers"),
    ("Deut", "Deuteronomy"),
    ("Josh", "Joshua"),
    ("Judg", "Judges"),
    ("Ruth", "Ruth"),
    ("1Sam", "1 Samuel"),
    ("2Sam", "2 Samuel"),
    ("1Kgs", "1 Kings"),
    ("2Kgs", "2 Kings"),
    ("1Chr", "1 Chronicles"),
    ("2Chr", "2 Chronicles"),
    ("Ezra", "Ezra"),
    ("Neh", "Nehemiah"),
    ("Esth", "Esther"),
    ("Job", "Job"),
    ("Ps", "Psalms"),
    ("Prov", "Proverbs"),
    ("Eccl", "Ecclesiastes"),
    ("Song", "Song of Solomon"),
    ("Isa", "Isaiah"),
    ("Jer", "Jeremiah"),
    ("Lam", "Lamentations"),
    ("Ezek", "Ezekiel"),
    ("Dan", "Daniel"),
    ("Hos", "Hosea"),
    ("Joel", "Joel"),
    ("Amos", "Amos"),
    ("Obad", "Obadiah"),
    ("Jonah", "Jonah"),
    ("Mic", "Micah"),
    ("Nah", "Nahum"),
    ("Hab", "Habakkuk"),
    ("Zeph", "Zephaniah"),
    ("Hag", "Haggai"),
    ("Zech", "Zechariah"),
    ("Mal", "Malachi"),
    // New Testament
    ("Matt", "Matthew"),
    ("Mark", "Mark"),
    ("Luke", "Luke"),
    ("John", "John"),
    ("Acts", "Acts"),
    ("Rom", "Romans"),
    ("1Cor", "1 Corinthians"),
    ("2Cor", "2 Corinthians"),
    ("Gal", "Galatians"),
    ("Eph", "Ephesians"),
    ("Phil", "Philippians"),
    ("Col", "Colossians"),
    ("1Thess", "1 Thessalonians"),
    ("2Thess", "2 Thessalonians"),
    ("1Tim", "1 Timothy"),
    ("2Tim", "2 Timothy"),
    ("Titus", "Titus"),
    ("Phlm", "Philemon"),
    ("Heb", "Hebrews"),
    ("Jas", "James"),
    ("1Pet", "1 Peter"),
    ("2Pet", "2 Peter"),
    ("1John", "1 John"),
    ("2John", "2 John"),
    ("3John", "3 John"),
    ("Jude", "Jude"),
    ("Rev", "Revelation"),
    // Deuterocanon
    ("Tob", "Tobit"),
    ("Jdt", "Judith"),
    ("AddEsth", "Additions to Esther"),
    ("Wis", "Wisdom"),
    ("Sir", "Sirach"),
    ("Bar", "Baruch"),
    ("EpJer", "Letter of Jeremiah"),
    ("PrAzar", "Prayer of Azariah"),
    ("Sus", "Susanna"),
    ("Bel", "Bel and the Dragon"),
    ("1Macc", "1 Maccabees"),
    ("2Macc", "2 Maccabees"),
    ("3Macc", "3 Maccabees"),
    ("4Macc", "4 Maccabees"),
    ("1Esd", "1 Esdras"),
    ("2Esd", "2 Esdras"),
    ("PrMan", "Prayer of Manasseh"),
];

/// Maps OSIS book codes to display names. Unknown codes map to themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookNames {
    names: HashMap<String, String>,
}

impl Default for BookNames {
    fn default() -> Self {
        CANON.iter().copied().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BookNames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(code, name)| (code.into(), name.into()))
                .collect(),
        }
    }
}

impl BookNames {
    /// A table with no entries; every code passes through unchanged.
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    pub fn display_name<'a>(
        &'a self,
        code: &'a str,
    ) -> &'a str {
        self.names.get(code).map(String::as_str).unwrap_or(code)
    }

    pub fn insert(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Option<String> {
        self.names.insert(code.into(), name.into())
    }

    /// Adds or replaces entries from `overrides`.
    pub fn extend<K: Into<String>, V: Into<String>>(
        &mut self,
        overrides: impl IntoIterator<Item = (K, V)>,
    ) {
        for (code, name) in overrides {
            self.insert(code, name);
        }
    }

    /// Merges a JSON object of `{"code": "name"}` pairs from `path` over the
    /// current table.
    pub fn merge_json_file(
        &mut self,
        path: &Path,
    ) -> ConvertResult<()> {
        let raw = fs::read_to_string(path).map_err(|e| ConvertError::BookTable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let overrides: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|e| ConvertError::BookTable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        tracing::debug!("loaded {} book names from {}", overrides.len(), path.display());
        self.extend(overrides);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_covers_protestant_canon() {
        let books = BookNames::default();
        assert!(books.len() >= 66);
        assert_eq!(books.display_name("Gen"), "Genesis");
        assert_eq!(books.display_name("Deut"), "Deuteronomy");
        assert_eq!(books.display_name("1Sam"), "1 Samuel");
        assert_eq!(books.display_name("Ps"), "Psalms");
        assert_eq!(books.display_name("Rev"), "Revelation");
    }

    #[test]
    fn unknown_code_passes_through() {
        let books = BookNames::default();
        assert_eq!(books.display_name("Enoch"), "Enoch");
        assert_eq!(BookNames::empty().display_name("Gen"), "Gen");
    }

    #[test]
    fn extend_overrides_defaults() {
        let mut books = BookNames::default();
        books.extend([("Gen", "Genèse"), ("Enoch", "1 Enoch")]);
        assert_eq!(books.display_name("Gen"), "Genèse");
        assert_eq!(books.display_name("Enoch"), "1 Enoch");
        assert_eq!(books.display_name("Exod"), "Exodus");
    }
}
