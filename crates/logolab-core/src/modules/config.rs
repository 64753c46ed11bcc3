//! Gateway configuration loading.
//!
//! Layering, lowest to highest: built-in defaults, optional JSON file,
//! environment. CLI flags are applied by the binary on top of the result.

use std::fs;
use std::path::Path;

use logolab_types::{ConfigError, GatewayConfig};
use validator::{Validate, ValidationErrors};

pub const ENV_CONFIG_PATH: &str = "LOGOLAB_CONFIG";
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_PORT: &str = "LOGOLAB_PORT";
pub const ENV_GEMINI_BASE_URL: &str = "LOGOLAB_GEMINI_BASE_URL";
pub const ENV_POLLINATIONS_BASE_URL: &str = "LOGOLAB_POLLINATIONS_BASE_URL";

/// Load configuration from `path` (if given) and the process environment.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let config = match path {
        Some(path) => read_config_file(path)?,
        None => GatewayConfig::default(),
    };
    let config = apply_env_overrides(config, |name| std::env::var(name).ok())?;
    validate_config(&config)?;
    Ok(config)
}

pub fn read_config_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.display().to_string() });
    }
    let content = fs::read_to_string(path).map_err(|e| ConfigError::from_io_error(&e))?;
    serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))
}

/// Apply environment overrides through `lookup`, so callers and tests can
/// supply their own environment. Blank values are ignored.
pub fn apply_env_overrides<F>(mut config: GatewayConfig, lookup: F) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(key) = var(ENV_API_KEY) {
        config.api_key = Some(key);
    }
    if let Some(port) = var(ENV_PORT) {
        config.port = port.parse().map_err(|_| ConfigError::ValidationError {
            field: "port".to_string(),
            message: format!("{} is not a valid port: {}", ENV_PORT, port),
        })?;
    }
    if let Some(url) = var(ENV_GEMINI_BASE_URL) {
        config.gemini_base_url = url;
    }
    if let Some(url) = var(ENV_POLLINATIONS_BASE_URL) {
        config.pollinations_base_url = url;
    }
    Ok(config)
}

pub fn validate_config(config: &GatewayConfig) -> Result<(), ConfigError> {
    config.validate().map_err(|e| first_validation_error(&e))
}

fn first_validation_error(errors: &ValidationErrors) -> ConfigError {
    let field = errors
        .errors()
        .keys()
        .next()
        .map(|k| k.to_string())
        .unwrap_or_else(|| "config".to_string());
    ConfigError::ValidationError { field, message: errors.to_string() }
}
