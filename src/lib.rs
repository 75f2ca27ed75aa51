pub mod cli;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod io;
pub mod lookup;
pub mod module_name;
pub mod osis;
pub mod output;

pub use config::Config;
pub use convert::{ConversionReport, convert_all};
pub use error::{ConvertError, ConvertResult};
pub use lookup::{VerseText, load_bible, lookup_verse};
pub use osis::{
    BibleDocument, BookNames, ParseOptions, VerseId, parse_module, parse_module_with, parse_str,
    parse_str_with,
};
