//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable holding the upstream bearer token.
pub const ENV_API_KEY: &str = "KALSHI_API_KEY";
/// Environment variable holding the (unused) upstream secret.
pub const ENV_API_SECRET: &str = "KALSHI_API_SECRET";
/// Environment variable overriding the upstream base URL.
pub const ENV_API_URL: &str = "KALSHI_API_URL";
/// Environment variable overriding the listener address.
pub const ENV_BIND_ADDRESS: &str = "GATEWAY_BIND_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration: optional TOML file, then `.env` and process
/// environment overrides, then the command-line bind address, then
/// validation.
pub fn load_config(
    path: Option<&Path>,
    bind_override: Option<&str>,
) -> Result<GatewayConfig, ConfigError> {
    // A missing .env is normal outside development.
    dotenvy::dotenv().ok();

    let config = match path {
        Some(path) => parse_config(&fs::read_to_string(path)?)?,
        None => GatewayConfig::default(),
    };

    let mut config = apply_env_overrides(config, |key| std::env::var(key).ok());
    if let Some(bind) = bind_override {
        config.listener.bind_address = bind.to_string();
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<GatewayConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Overlay environment values on top of a file-derived configuration.
///
/// `lookup` abstracts the environment so callers and tests can supply
/// their own source.
pub fn apply_env_overrides<F>(mut config: GatewayConfig, lookup: F) -> GatewayConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_API_KEY) {
        config.upstream.api_key = key;
    }
    if let Some(secret) = lookup(ENV_API_SECRET) {
        config.upstream.api_secret = secret;
    }
    if let Some(url) = lookup(ENV_API_URL) {
        config.upstream.base_url = url;
    }
    if let Some(addr) = lookup(ENV_BIND_ADDRESS) {
        config.listener.bind_address = addr;
    }
    config
}
