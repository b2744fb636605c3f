//! Logging setup
//!
//! The crate logs through the `log` facade. Embedding applications that
//! already install a logger can skip this module; otherwise [`init`] wires up
//! a `fern` dispatcher from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::constants::{CONFIG_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Utc;
use std::fmt;
use std::path::{Path, PathBuf};

/// Install the global logger described by `config`
///
/// Does nothing when logging is disabled. Fails if a global logger has
/// already been installed or the log file cannot be opened.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let file = if config.file { Some(log_file_path()?) } else { None };
    install(config, file.as_deref())
}

/// Like [`init`], but log lines also go to `path` whatever `config.file` says
pub fn init_with_file(config: &LoggingConfig, path: &Path) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    install(config, Some(path))
}

fn install(config: &LoggingConfig, file: Option<&Path>) -> Result<()> {
    let mut dispatch = fern::Dispatch::new()
        .format(format_record)
        .level(config.level_filter()?)
        .chain(std::io::stderr());

    if let Some(path) = file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    dispatch.apply().context("A global logger is already installed")?;
    log::debug!("Logging initialised at level {}", config.level);
    Ok(())
}

/// Location of the log file written when `logging.file` is enabled
pub fn log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(LOG_FILE_NAME))
}

fn format_record(out: fern::FormatCallback, message: &fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "[{} {} {}] {}",
        Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        message
    ))
}
