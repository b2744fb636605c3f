//! Configuration management for tmpl-helpers
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DEFAULT_LOG_LEVEL, HELPER_NAMES};
use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub helpers: HelpersConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Maximum level: "off", "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Also write log lines to a file in the data directory
    pub file: bool,
}

/// Helper registration configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpersConfig {
    /// Helper names to leave out of the function map
    pub disabled: Vec<String>,
    /// Register the legacy names `duration` and `uppercasefirst`
    pub aliases: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: false,
        }
    }
}

impl Default for HelpersConfig {
    fn default() -> Self {
        Self {
            disabled: Vec::new(),
            aliases: true,
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

impl HelpersConfig {
    /// Check whether a helper is enabled by this configuration
    pub fn is_enabled(&self, name: &str) -> bool {
        !self.disabled.iter().any(|disabled| disabled == name)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        Self::load_from_dir(Path::new("."))
    }

    /// Load configuration found from `dir`, falling back to the XDG file and then defaults
    ///
    /// `dir/tmpl-helpers.toml` takes precedence over `<config_dir>/tmpl-helpers/config.toml`.
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        match Self::find_config_file(dir.as_ref()) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file(dir: &Path) -> Option<PathBuf> {
        let local = dir.join(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        Self::default_config_path().ok().filter(|path| path.exists())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        self.logging.level_filter()?;

        for name in &self.helpers.disabled {
            if !HELPER_NAMES.contains(&name.as_str()) {
                anyhow::bail!(
                    "Unknown helper '{}' in helpers.disabled. Known helpers: {}",
                    name,
                    HELPER_NAMES.join(", ")
                );
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# tmpl-helpers Configuration File\n# Generated on {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Per-user config file under the XDG config directory
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }
}
