use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::hotkey;
use crate::search::MAX_RESULTS;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub hotkey: String,
    pub max_results: usize,
    pub extra_roots: Vec<PathBuf>,
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: "Ctrl+Alt+Space".to_string(),
            max_results: MAX_RESULTS,
            extra_roots: Vec::new(),
            config_path: default_config_path(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Format(toml::ser::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "config io error: {error}"),
            Self::Parse(error) => write!(f, "config parse error: {error}"),
            Self::Format(error) => write!(f, "config format error: {error}"),
            Self::Invalid(error) => write!(f, "invalid config: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        Self::Format(value)
    }
}

/// Per-user data directory for config and logs. Falls back to the temp dir
/// when no per-user location is resolvable.
pub fn stable_app_data_dir() -> PathBuf {
    std::env::var_os("LOCALAPPDATA")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("XDG_DATA_HOME").map(PathBuf::from))
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .unwrap_or_else(std::env::temp_dir)
        .join("quickbar")
}

pub fn default_config_path() -> PathBuf {
    stable_app_data_dir().join("config.toml")
}

/// Loads the TOML config at `path` (or the default location). A missing
/// file yields the defaults; a malformed or out-of-range file is an error.
pub fn load(path: Option<PathBuf>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(default_config_path);

    let mut config = match std::fs::read_to_string(&path) {
        Ok(raw) => toml::from_str::<Config>(&raw)?,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(error) => return Err(ConfigError::Io(error)),
    };

    config.config_path = path;
    validate(&config).map_err(ConfigError::Invalid)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = config.config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(config)?;
    std::fs::write(&config.config_path, raw)?;
    Ok(())
}

pub fn validate(config: &Config) -> Result<(), String> {
    if config.max_results == 0 || config.max_results > MAX_RESULTS {
        return Err(format!("max_results must be between 1 and {MAX_RESULTS}"));
    }

    hotkey::parse_hotkey(&config.hotkey)?;

    if config.config_path.as_os_str().is_empty() {
        return Err("config_path is required".to_string());
    }

    Ok(())
}
