use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Result, RollcallError};

/// Load a JSON document, failing with `InputNotFound` when the file is absent.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(RollcallError::InputNotFound(path.display().to_string()));
    }
    let contents = fs::read_to_string(path)?;
    let value: T = serde_json::from_str(&contents)?;
    Ok(value)
}

/// Load an optional JSON document; a missing file yields `T::default()`.
pub fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    load_json(path)
}

/// Write `value` as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
