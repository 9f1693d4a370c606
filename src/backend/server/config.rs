/**
 * Server Configuration
 *
 * This module loads the server configuration from an optional TOML file and
 * environment variables.
 *
 * # Configuration Sources
 *
 * Lowest precedence first:
 * 1. Built-in defaults (port 8080, bcrypt `DEFAULT_COST`)
 * 2. TOML file named by `TODOGATE_CONFIG`
 * 3. Environment: `SERVER_PORT`, `JWT_SECRET`, `BCRYPT_COST`
 *
 * There is no default signing secret: startup fails without `JWT_SECRET`.
 */

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the optional TOML config file
pub const CONFIG_PATH_VAR: &str = "TODOGATE_CONFIG";

pub const PORT_VAR: &str = "SERVER_PORT";
pub const SECRET_VAR: &str = "JWT_SECRET";
pub const BCRYPT_COST_VAR: &str = "BCRYPT_COST";

pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Values that may appear in the TOML file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub port: Option<u16>,
    pub jwt_secret: Option<String>,
    pub bcrypt_cost: Option<u32>,
}

impl FileConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Resolved server configuration
#[derive(Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub bcrypt_cost: u32,
}

impl ServerConfig {
    /// Load from `TODOGATE_CONFIG` (if set) and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => {
                tracing::info!("Loading configuration from {}", path);
                FileConfig::read(Path::new(&path))?
            }
            Err(_) => FileConfig::default(),
        };

        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge file values with variables from `lookup`, which take precedence
    pub fn resolve<F>(file: FileConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(PORT_VAR) {
            Some(raw) => parse_var(PORT_VAR, &raw)?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let jwt_secret = lookup(SECRET_VAR)
            .or(file.jwt_secret)
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigError::MissingValue(SECRET_VAR))?;

        let bcrypt_cost = match lookup(BCRYPT_COST_VAR) {
            Some(raw) => parse_var(BCRYPT_COST_VAR, &raw)?,
            None => file.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST),
        };
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: BCRYPT_COST_VAR,
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(Self {
            port,
            jwt_secret,
            bcrypt_cost,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}
