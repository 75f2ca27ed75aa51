use std::path::PathBuf;

use crate::constants::{MODULE_SUFFIX, OUTPUT_EXTENSION};
use crate::error::{ConvertError, ConvertResult};

/// Language and translation codes encoded in a module file name,
/// e.g. `en_kjv.xml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleName {
    pub language: String,
    pub translation: String,
}

impl ModuleName {
    /// Parses `<language>_<translation>.xml`. The base name must contain
    /// exactly one underscore.
    pub fn from_file_name(file_name: &str) -> ConvertResult<Self> {
        let base = file_name.strip_suffix(MODULE_SUFFIX).unwrap_or(file_name);
        let parts: Vec<&str> = base.split('_').collect();
        match parts.as_slice() {
            [language, translation] => Ok(Self {
                language: language.to_string(),
                translation: translation.to_string(),
            }),
            _ => Err(ConvertError::FileName {
                file_name: file_name.to_string(),
            }),
        }
    }

    pub fn output_file_name(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}_{}.{OUTPUT_EXTENSION}",
            self.language, self.translation
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_language_and_translation() {
        let name = ModuleName::from_file_name("en_kjv.xml").unwrap();
        assert_eq!(name.language, "en");
        assert_eq!(name.translation, "kjv");
        assert_eq!(name.output_file_name(), PathBuf::from("en_kjv.json"));
    }

    #[test]
    fn rejects_zero_or_many_underscores() {
        for bad in ["kjv.xml", "en_kjv_1611.xml", "en__kjv.xml"] {
            let err = ModuleName::from_file_name(bad).unwrap_err();
            assert!(matches!(err, ConvertError::FileName { .. }), "{bad}");
        }
    }

    #[test]
    fn empty_sides_are_accepted() {
        let name = ModuleName::from_file_name("_kjv.xml").unwrap();
        assert_eq!(name.language, "");
        assert_eq!(name.output_file_name(), PathBuf::from("_kjv.json"));
    }
}
