pub mod config;
pub mod error;
pub mod models;
pub mod storage;

pub use config::{RollcallConfig, parse_cutoff_date};
pub use error::{Result, RollcallError};
pub use models::*;

pub use storage::json_files::{load_json, load_json_or_default, save_json};
