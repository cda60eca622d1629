//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::FrontendConfig;
use std::path::Path;

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "zolang.toml";

/// Loads and validates `<project_dir>/zolang.toml`.
///
/// A missing file is not an error; the defaults are returned instead.
pub fn load_config(project_dir: &Path) -> Result<FrontendConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no configuration file, using defaults");
        return Ok(FrontendConfig::default());
    }
    let content = std::fs::read_to_string(&config_path)?;
    let config = load_config_from_str(&content)?;
    tracing::debug!(path = %config_path.display(), ?config, "loaded configuration");
    Ok(config)
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<FrontendConfig, ConfigError> {
    let config: FrontendConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &FrontendConfig) -> Result<(), ConfigError> {
    if config.diagnostics.max_displayed == 0 {
        return Err(ConfigError::ValidationError(
            "diagnostics.max_displayed must be at least 1".to_string(),
        ));
    }
    Ok(())
}
