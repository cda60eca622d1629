//! Parsing and validation of `zolang.toml` front-end configuration.
//!
//! The file is optional. It tunes the scanner (whether comments are
//! returned as tokens) and how collected diagnostics are reported.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
