use std::time::Duration;

use thiserror::Error;

use crate::constants::PROBE_USER_AGENT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Timeout applied to each liveness probe.
    pub probe_timeout: Duration,
    /// Maximum number of probes in flight at once.
    pub probe_concurrency: usize,
    /// User agent sent with every probe.
    pub user_agent: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            probe_timeout: Duration::from_secs(parse_env_u64("PROBE_TIMEOUT_SECS", 30)?),
            probe_concurrency: parse_env_usize("PROBE_CONCURRENCY", 8)?,
            user_agent: env_or_default("USER_AGENT", PROBE_USER_AGENT),
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PROBE_CONCURRENCY".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.probe_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "PROBE_TIMEOUT_SECS".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Configuration for tests: short timeout, small probe pool.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            probe_timeout: Duration::from_secs(5),
            probe_concurrency: 4,
            user_agent: PROBE_USER_AGENT.to_string(),
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|source| ConfigError::ParseInt {
            name: name.to_string(),
            source,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|source| ConfigError::ParseInt {
            name: name.to_string(),
            source,
        }),
        Err(_) => Ok(default),
    }
}
