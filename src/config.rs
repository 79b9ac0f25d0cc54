//! Configuration loaded from TOML
//!
//! Lookup order: explicit path, the user config dir, the system-wide
//! default, then built-in defaults.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use dirs::config_dir;
use tracing::{debug, info};

use crate::benchmark::DEFAULT_ITERATIONS;
use crate::error::{Result, SyscontrolError};
use crate::provider::ThermalNamespace;

/// Bundled default configuration
pub const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

const SYSTEM_CONFIG_PATH: &str = "/usr/share/syscontrol/config.toml";

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub benchmark: BenchmarkConfig,
    pub thermal: ThermalConfig,
    pub monitor: MonitorConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Root of the /proc and /sys tree, `~` is expanded
    pub root: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub iterations: u64,
    /// 0 means one worker per logical processor
    pub workers: usize,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ThermalConfig {
    pub namespace: ThermalNamespace,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    pub interval_ms: u64,
    pub samples: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub separator: String,
    pub key_color: String,
    pub value_color: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            root: "/".to_string(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            workers: 0,
        }
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            samples: 10,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: ": ".to_string(),
            key_color: "cyan".to_string(),
            value_color: "reset".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.root).as_ref())
    }
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("syscontrol/config.toml"))
}

/// Parse configuration from a TOML string
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::de::from_str(content)?)
}

/// Load configuration, falling back to defaults when no file exists
///
/// An explicit path must exist; the implicit locations are optional.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
            if !expanded.exists() {
                return Err(SyscontrolError::Config(format!(
                    "Config file not found: {}",
                    expanded.display()
                )));
            }
            Some(expanded)
        }
        None => user_config_path()
            .filter(|p| p.exists())
            .or_else(|| Some(PathBuf::from(SYSTEM_CONFIG_PATH)).filter(|p| p.exists())),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading config");
            let content = fs::read_to_string(&path)?;
            parse_config(&content).map_err(|e| {
                SyscontrolError::Config(format!("{}: {}", path.display(), e))
            })
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Write the bundled config to the user config dir unless one exists
///
/// Returns the path written, or `None` when a config was already present.
pub fn ensure_user_config_exists() -> Result<Option<PathBuf>> {
    let path = user_config_path()
        .ok_or_else(|| SyscontrolError::Config("Could not determine config dir".to_string()))?;
    write_default_config(&path)
}

pub(crate) fn write_default_config(path: &Path) -> Result<Option<PathBuf>> {
    if path.exists() {
        return Ok(None);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG)?;
    info!(path = %path.display(), "Created default config");
    Ok(Some(path.to_path_buf()))
}
