use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

pub const DEFAULT_BREAKPOINT: u16 = 100;
pub const CONFIG_ENV: &str = "WALLETDASH_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Path of the wallet JSON source
    pub wallets: Option<String>,

    /// Terminal width at which the tab layout goes side by side
    pub breakpoint: Option<u16>,

    /// log level, can be "error", "warn", "info", "debug", "trace"
    pub log_level: Option<String>,

    /// Path of the session database
    pub store: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config field `{0}`: {1}")]
    InvalidField(&'static str, String),
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    pub fn breakpoint(&self) -> u16 {
        self.breakpoint.unwrap_or(DEFAULT_BREAKPOINT)
    }

    pub fn log_level(&self) -> Result<Option<LevelFilter>, ConfigError> {
        let Some(level) = self.log_level.as_deref() else {
            return Ok(None);
        };
        match level.to_lowercase().as_str() {
            "error" => Ok(Some(LevelFilter::ERROR)),
            "warn" => Ok(Some(LevelFilter::WARN)),
            "info" => Ok(Some(LevelFilter::INFO)),
            "debug" => Ok(Some(LevelFilter::DEBUG)),
            "trace" => Ok(Some(LevelFilter::TRACE)),
            _ => Err(ConfigError::InvalidField(
                "log_level",
                format!("Unknown value '{}'", level),
            )),
        }
    }

    pub fn wallets_path(&self) -> Option<PathBuf> {
        self.wallets.as_deref().and_then(expand_path)
    }

    pub fn store_path(&self) -> Option<PathBuf> {
        self.store
            .as_deref()
            .and_then(expand_path)
            .or_else(store_db_path)
    }
}

/// Load the config file, defaults when there is none.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    Config::from_toml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("walletdash").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("walletdash").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "walletdash", "walletdash")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("walletdash"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("walletdash"));
    }
    directories::ProjectDirs::from("io", "walletdash", "walletdash")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn store_db_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("session.sqlite3"))
}

pub fn log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("walletdash.log"))
}

fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        let home = std::env::var_os("HOME").map(PathBuf::from)?;
        return Some(home.join(rest));
    }
    Some(PathBuf::from(trimmed))
}
