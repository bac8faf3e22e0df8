//! TOML config file loading and creation.

use kchat_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Application configuration. All fields default so partial configs work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub webhook: WebhookSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSection {
    /// Conversational webhook endpoint URL.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Tracing filter directive.
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "kchat=info".into(),
        }
    }
}

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: AppConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// If the file does not exist, creates a commented default and
/// returns defaults.
pub fn load_default() -> Result<AppConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(AppConfig::default());
    }

    load_from_path(&path)
}

/// Platform default config file path, e.g. `~/.config/kchat/config.toml`.
pub fn default_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("kchat").join("config.toml"))
}

/// Write a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

fn default_config_toml() -> String {
    r##"# kchat configuration
# Only override what you want to change -- missing fields use defaults.

[webhook]
# url = "https://example.com/webhook/<workflow-id>/chat"

[logging]
# level = "kchat=info"    # tracing filter directive
"##
    .to_string()
}
