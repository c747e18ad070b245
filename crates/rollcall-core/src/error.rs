use thiserror::Error;

/// All errors that can occur in rollcall-core.
///
/// Only the collaborator layer (config, JSON files, CLI arguments) produces
/// these; reconciliation itself is total and reports through diagnostics.
#[derive(Debug, Error)]
pub enum RollcallError {
    #[error("Input file not found: {0}")]
    InputNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, RollcallError>;
