pub mod books;
pub mod dtd;
pub mod parse;
pub mod types;

pub use books::BookNames;
pub use parse::{ParseOptions, parse_module, parse_module_with, parse_str, parse_str_with};
pub use types::{BibleDocument, VerseId};
