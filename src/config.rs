// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Layers, lowest priority first: built-in defaults, `stockroom.toml` next to
//! the executable (or the file given with `--config`), then `STOCKROOM_*`
//! environment variables.

use crate::store::DATA_FILE_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up beside the executable
pub const CONFIG_FILE_NAME: &str = "stockroom.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot file holding all inventory state
    pub data_file: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Items with stock below this are counted as low on the dashboard
    pub low_stock_threshold: i64,
    /// Currency symbol printed before prices
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: app_dir().join(DATA_FILE_NAME),
            log_level: "info".to_string(),
            low_stock_threshold: 10,
            currency: "Rp".to_string(),
        }
    }
}

impl Config {
    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Directory the data file lives in by default: the one holding the executable
#[must_use]
pub fn app_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| {
            directories::ProjectDirs::from("org", "hyperpolymath", "stockroom")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load configuration.
///
/// `explicit` must exist when given; the default config file is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let defaults = Config::default();

    let file = match explicit {
        Some(path) => ::config::File::from(path).required(true),
        None => ::config::File::from(app_dir().join(CONFIG_FILE_NAME)).required(false),
    };

    let settings = ::config::Config::builder()
        .set_default("data_file", defaults.data_file.to_string_lossy().into_owned())?
        .set_default("log_level", defaults.log_level)?
        .set_default("low_stock_threshold", defaults.low_stock_threshold)?
        .set_default("currency", defaults.currency)?
        .add_source(file)
        .add_source(::config::Environment::with_prefix("STOCKROOM"))
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize()
        .context("Invalid configuration")
}
