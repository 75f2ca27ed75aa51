use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

#[derive(Parser, Debug)]
#[command(name = "osis2json")]
#[command(
    about = "Convert OSIS XML scripture modules (<lang>_<translation>.xml) into \
             Book -> Chapter -> Verse JSON files."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the OSIS modules.
    #[arg(short = 'i', long = "input-dir", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: PathBuf,

    /// Directory the JSON files are written to; created if missing.
    #[arg(short = 'o', long = "output-dir", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// JSON object of {"code": "name"} pairs added to or replacing the built-in book names.
    #[arg(short = 'b', long = "books")]
    pub books: Option<PathBuf>,

    /// Keep converting the remaining modules when one fails, then report all failures.
    #[arg(short = 'k', long = "keep-going")]
    pub keep_going: bool,

    /// Give empty sID/eID verse markers the text between them instead of "".
    #[arg(short = 'm', long = "milestones")]
    pub milestones: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print one verse from a converted JSON file.
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Converted file, e.g. bibles/en_kjv.json.
    pub bible: PathBuf,
    /// Book display name as stored in the file, e.g. Genesis.
    pub book: String,
    pub chapter: String,
    pub verse: String,
}
