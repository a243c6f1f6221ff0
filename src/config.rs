//! Server configuration loaded from the environment (and `.env`).

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_COUNTER_FILE: &str = "counter.txt";
const DEFAULT_TYPST_BIN: &str = "typst";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
    #[error("invalid COUNTER_BACKEND value '{0}' (expected 'file' or 'memory')")]
    InvalidBackend(String),
}

/// Where issued contract numbers are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterBackend {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub counter: CounterBackend,
    pub static_dir: PathBuf,
    pub typst_bin: String,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            counter: CounterBackend::File(PathBuf::from(DEFAULT_COUNTER_FILE)),
            static_dir: default_static_dir(),
            typst_bin: DEFAULT_TYPST_BIN.to_string(),
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let counter_file = get("COUNTER_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COUNTER_FILE));
        let counter = match get("COUNTER_BACKEND").as_deref() {
            None | Some("file") => CounterBackend::File(counter_file),
            Some("memory") => CounterBackend::Memory,
            Some(other) => return Err(ConfigError::InvalidBackend(other.to_string())),
        };

        let cors_allowed_origins = get("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            counter,
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            typst_bin: get("TYPST_BIN").unwrap_or(defaults.typst_bin),
            cors_allowed_origins,
        })
    }
}

/// Static assets (template, logo) shipped with the crate.
pub fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}
