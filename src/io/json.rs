use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ConvertError, ConvertResult};

/// Writes `value` as two-space indented UTF-8 JSON, replacing any existing
/// file. Non-ASCII text is written literally.
pub fn write_pretty<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> ConvertResult<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, bytes).map_err(|e| ConvertError::io(path, e))
}

/// Reads a JSON file into `T`.
pub fn read<T: DeserializeOwned>(path: &Path) -> ConvertResult<T> {
    let bytes = fs::read(path).map_err(|e| ConvertError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|source| ConvertError::Json {
        path: path.to_path_buf(),
        source,
    })
}
