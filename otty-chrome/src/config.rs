use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_PATH_ENV: &str = "OTTY_CHROME_CONFIG";
const DEFAULT_TITLE: &str = "OTTY";

/// Errors emitted while reading the chrome configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("config IO failed")]
    Io(#[from] std::io::Error),
}

/// User configuration for the window chrome. Window and zoom state are
/// never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct ChromeConfig {
    pub(crate) title: String,
    pub(crate) icon_path: Option<PathBuf>,
    pub(crate) command_launcher: Option<String>,
    pub(crate) explorer_root: Option<PathBuf>,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_TITLE),
            icon_path: None,
            command_launcher: None,
            explorer_root: None,
        }
    }
}

impl ChromeConfig {
    /// Directory a new explorer window opens at.
    pub(crate) fn explorer_root(&self) -> PathBuf {
        if let Some(root) = &self.explorer_root {
            return root.clone();
        }

        match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home),
            Err(_) => PathBuf::from("/"),
        }
    }
}

/// Status describing how the config was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the config from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: ChromeConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: ChromeConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (ChromeConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the config, falling back to defaults on any failure.
pub(crate) fn load_config() -> ChromeConfig {
    let path = config_path();
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("chrome config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!("no chrome config at {}", path.display());
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "chrome config {} is invalid, using defaults: {message}",
                        path.display()
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("chrome config {} unreadable: {err}", path.display());
            ChromeConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                ChromeConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<ChromeConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            ChromeConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("otty")
            .join("chrome.json");
    }

    std::env::temp_dir().join("otty").join("chrome.json")
}
