// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::LeaveStatus;
use crate::render::RenderOptions;
use crate::storage::LeaveStore;
use anyhow::{Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

fn default_hidden_statuses() -> Vec<LeaveStatus> {
    vec![LeaveStatus::Rejected, LeaveStatus::Cancelled]
}
fn default_max_lanes() -> usize {
    3
}
fn default_cell_width() -> usize {
    12
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Leave export used when no file is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaves_file: Option<PathBuf>,
    /// Statuses dropped before layout.
    #[serde(default = "default_hidden_statuses")]
    pub hidden_statuses: Vec<LeaveStatus>,
    #[serde(default = "default_max_lanes")]
    pub max_lanes: usize,
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String, // "off" | "error" | "warn" | "info" | "debug" | "trace"
}

impl Default for Config {
    fn default() -> Self {
        Self {
            leaves_file: None,
            hidden_statuses: default_hidden_statuses(),
            max_lanes: default_max_lanes(),
            cell_width: default_cell_width(),
            color: default_true(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => {
                log::debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Whether `err` means the config file simply does not exist.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        LeaveStore::with_lock(&path, || {
            let toml_str = toml::to_string_pretty(self)?;
            LeaveStore::atomic_write(&path, toml_str)?;
            Ok(())
        })?;
        Ok(())
    }

    /// Parsed `log_level`; unknown values fall back to `Warn`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Warn)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            cell_width: self.cell_width,
            max_lanes: self.max_lanes,
            color: self.color,
        }
    }
}
