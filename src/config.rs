use crate::cli::Cli;
use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT_DIR};
use crate::error::ConvertResult;
use crate::osis::{BookNames, ParseOptions};
use std::path::PathBuf;

/// Resolved settings for a conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub books: BookNames,
    pub parse: ParseOptions,
    /// Isolate failures per module instead of stopping at the first one.
    pub keep_going: bool,
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR)
    }
}

impl Config {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Config {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            books: BookNames::default(),
            parse: ParseOptions::default(),
            keep_going: false,
            verbose: 0,
        }
    }

    /// Resolve parsed CLI arguments into a Config, loading the book table.
    pub fn from_args(cli: Cli) -> ConvertResult<Self> {
        let mut books = BookNames::default();
        if let Some(path) = &cli.books {
            books.merge_json_file(path)?;
        }
        Ok(Config {
            input_dir: cli.input_dir,
            output_dir: cli.output_dir,
            books,
            parse: ParseOptions {
                milestones: cli.milestones,
            },
            keep_going: cli.keep_going,
            verbose: cli.verbose,
        })
    }

    pub fn with_books(
        mut self,
        books: BookNames,
    ) -> Self {
        self.books = books;
        self
    }

    pub fn with_keep_going(
        mut self,
        keep_going: bool,
    ) -> Self {
        self.keep_going = keep_going;
        self
    }

    pub fn with_milestones(
        mut self,
        milestones: bool,
    ) -> Self {
        self.parse.milestones = milestones;
        self
    }

    pub fn log_level(&self) -> &'static str {
        log_level(self.verbose)
    }
}

/// Log filter directive for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_LOG_LEVEL,
        1 => "info",
        _ => "debug",
    }
}
