use std::path::Path;

use serde::Serialize;

use crate::constants::VERSE_NOT_FOUND;
use crate::error::ConvertResult;
use crate::io::json;
use crate::osis::BibleDocument;

/// Loads a file written by [`crate::convert_all`].
pub fn load_bible(path: &Path) -> ConvertResult<BibleDocument> {
    let bible: BibleDocument = json::read(path)?;
    tracing::debug!("{}: loaded {} verses", path.display(), bible.verse_count());
    Ok(bible)
}

/// Answer to a single verse lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseText {
    pub text: String,
}

/// Text of `book chapter:verse`, or `"Verse not found"` when any level is
/// missing. `book` is the display name used as key in the document.
pub fn lookup_verse(
    bible: &BibleDocument,
    book: &str,
    chapter: &str,
    verse: &str,
) -> VerseText {
    let text = bible
        .verse(book, chapter, verse)
        .unwrap_or(VERSE_NOT_FOUND)
        .to_string();
    VerseText { text }
}
