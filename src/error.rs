use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting OSIS modules.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The module file name is not `<language>_<translation>.xml`.
    #[error("module file name {file_name:?} must have the form <language>_<translation>.xml")]
    FileName { file_name: String },

    /// The XML reader rejected the document.
    #[error("failed to parse {}: {source}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    /// The document is not well-formed in a way the reader does not report itself.
    #[error("{} is not well-formed XML: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error on {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A book name table could not be loaded.
    #[error("invalid book name table {}: {reason}", path.display())]
    BookTable { path: PathBuf, reason: String },
}

impl ConvertError {
    pub(crate) fn io(
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` when the error came from the input document itself
    /// rather than the filesystem.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Xml { .. } | Self::Malformed { .. })
    }
}

/// Convenience alias for conversion results.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
