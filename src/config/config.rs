use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_WORK_END, DEFAULT_WORK_START, STORE_ENV_VAR, STORE_FILE};
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Override for the member snapshot location.
    pub store_path: Option<PathBuf>,
    /// Defaults applied when `add` is called without explicit hours.
    pub default_start: Option<String>,
    pub default_end: Option<String>,
}

impl Config {
    pub fn default_start(&self) -> &str {
        self.default_start.as_deref().unwrap_or(DEFAULT_WORK_START)
    }

    pub fn default_end(&self) -> &str {
        self.default_end.as_deref().unwrap_or(DEFAULT_WORK_END)
    }
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE)
}

pub fn load_config() -> Config {
    let path = config_path();

    if path.exists() {
        let raw = fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&raw).unwrap_or_default()
    } else {
        Config::default()
    }
}

pub fn save_config(config: &Config) -> DashboardResult<()> {
    let raw = serde_json::to_string_pretty(config)?;
    fs::write(config_path(), raw)
        .map_err(|e| DashboardError::Config(format!("failed to write config: {}", e)))
}

/// Where the member snapshot lives. Environment variable wins, then the
/// config file, then `~/.teamzone.json`.
pub fn resolve_store_path(config: &Config) -> PathBuf {
    if let Ok(path) = env::var(STORE_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(path) = &config.store_path {
        return path.clone();
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORE_FILE)
}
