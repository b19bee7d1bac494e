//! Server settings.
//!
//! `load()` reads a `.env` file if one exists, then the process environment:
//!   DB_USERNAME, DB_PASSWORD, DB_HOST, DB_NAME  required
//!   DB_PORT          default 5432
//!   DB_DRIVER        default `postgres`; only postgres is supported
//!   DB_POOL_SIZE     default 10
//!   STAND_BIND_ADDR  listen address (default: 0.0.0.0:8000)

use stand_postgres::PoolConfig;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_POOL_SIZE: u32 = 10;
const SUPPORTED_DRIVERS: &[&str] = &["postgres", "postgresql"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },

    #[error("unsupported database driver {0:?}")]
    UnsupportedDriver(String),
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub db_username: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_name: String,
    pub db_driver: String,
    pub db_pool_size: u32,
    pub bind_addr: String,
}

impl Settings {
    /// Load settings from `.env` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!("loaded settings file {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let db_driver = lookup("DB_DRIVER").unwrap_or_else(|| "postgres".into());
        if !SUPPORTED_DRIVERS.contains(&db_driver.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::UnsupportedDriver(db_driver));
        }

        Ok(Self {
            db_username: required("DB_USERNAME")?,
            db_password: required("DB_PASSWORD")?,
            db_host: required("DB_HOST")?,
            db_port: parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
            db_name: required("DB_NAME")?,
            db_driver,
            db_pool_size: parse_or(&lookup, "DB_POOL_SIZE", DEFAULT_POOL_SIZE)?,
            bind_addr: lookup("STAND_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        })
    }

    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new(
            &self.db_host,
            self.db_port,
            &self.db_username,
            &self.db_password,
            &self.db_name,
        )
        .with_max_connections(self.db_pool_size)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
