use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub common: core_config::Config,
    pub database: DatabaseConfig,
}

/// Document store settings. Both `url` and `name` must be present for the
/// service to attempt a connection.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<Secret<String>>,
    pub name: Option<String>,
    pub server_selection_timeout: Duration,
}

impl BundleConfig {
    pub fn load() -> Result<Self, AppError> {
        // Load common config (handles .env, APP__ prefix and PORT)
        let common = core_config::Config::load()?;

        Ok(BundleConfig {
            common,
            database: DatabaseConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout_secs = match get("DATABASE_SERVER_SELECTION_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "DATABASE_SERVER_SELECTION_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            })?,
            None => DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        };

        Ok(Self {
            url: get("DATABASE_URL").map(Secret::new),
            name: get("DATABASE_NAME"),
            server_selection_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn url_is_set(&self) -> bool {
        self.url.is_some()
    }
}
