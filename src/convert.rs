use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::constants::MODULE_SUFFIX;
use crate::error::{ConvertError, ConvertResult};
use crate::io::json;
use crate::module_name::ModuleName;
use crate::osis::parse_module_with;
use crate::output;

/// A module that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verses: usize,
}

/// Outcome of a [`convert_all`] run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    pub converted: Vec<Converted>,
    /// Only populated when `keep_going` is set; otherwise the first failure
    /// is returned as the error.
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl ConversionReport {
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts every `*.xml` module in the input directory into a JSON file in
/// the output directory.
pub fn convert_all(config: &Config) -> ConvertResult<ConversionReport> {
    fs::create_dir_all(&config.output_dir).map_err(|e| ConvertError::io(&config.output_dir, e))?;

    let modules = list_modules(&config.input_dir)?;
    info!(
        "found {} modules in {}",
        modules.len(),
        config.input_dir.display()
    );

    let mut report = ConversionReport::default();
    for (file_name, path) in modules {
        match convert_file(&path, &file_name, config) {
            Ok(converted) => {
                println!("{}", output::format_converted(&file_name, &converted.output));
                report.converted.push(converted);
            }
            Err(e) if config.keep_going => {
                warn!("skipping {file_name}: {e}");
                report.failed.push((path, e));
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}

/// Converts a single module and writes `<output_dir>/<lang>_<translation>.json`.
pub fn convert_file(
    path: &Path,
    file_name: &str,
    config: &Config,
) -> ConvertResult<Converted> {
    let name = ModuleName::from_file_name(file_name)?;
    let document = parse_module_with(path, &config.books, config.parse)?;
    let output = config.output_dir.join(name.output_file_name());
    json::write_pretty(&output, &document)?;

    let verses = document.verse_count();
    info!("{file_name}: {verses} verses in {} books", document.book_names().count());
    Ok(Converted {
        input: path.to_path_buf(),
        output,
        verses,
    })
}

/// Lists entries of `dir` whose name ends with `.xml`, sorted by name.
/// Subdirectories are not searched.
fn list_modules(dir: &Path) -> ConvertResult<Vec<(String, PathBuf)>> {
    let entries = fs::read_dir(dir).map_err(|e| ConvertError::io(dir, e))?;
    let mut modules = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ConvertError::io(dir, e))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.ends_with(MODULE_SUFFIX) {
            modules.push((file_name, entry.path()));
        }
    }
    modules.sort();
    Ok(modules)
}
