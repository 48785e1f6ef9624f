//! services/web/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub static_dir: PathBuf,
    pub session_ttl: chrono::Duration,
    pub session_purge_interval: Duration,
    pub cookie_secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_level: Level::INFO,
            static_dir: PathBuf::from("./services/web/static"),
            session_ttl: chrono::Duration::minutes(1440),
            session_purge_interval: Duration::from_secs(300),
            cookie_secure: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // --- Server Settings ---
        let mut bind_address = match lookup("BIND_ADDRESS") {
            Some(raw) => raw.parse::<SocketAddr>().map_err(|e| {
                ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
            })?,
            None => defaults.bind_address,
        };
        if let Some(port) = lookup("PORT") {
            let port = port.parse::<u16>().map_err(|e| {
                ConfigError::InvalidValue("PORT".to_string(), e.to_string())
            })?;
            bind_address.set_port(port);
        }

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        // --- Session Settings ---
        let session_ttl = match lookup("SESSION_TTL_MINUTES") {
            Some(raw) => chrono::Duration::minutes(parse_positive("SESSION_TTL_MINUTES", &raw)?),
            None => defaults.session_ttl,
        };
        let session_purge_interval = match lookup("SESSION_PURGE_INTERVAL_SECS") {
            Some(raw) => Duration::from_secs(
                parse_positive("SESSION_PURGE_INTERVAL_SECS", &raw)? as u64,
            ),
            None => defaults.session_purge_interval,
        };
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => raw.trim().parse::<bool>().map_err(|_| {
                ConfigError::InvalidValue(
                    "COOKIE_SECURE".to_string(),
                    format!("'{}' is not true or false", raw),
                )
            })?,
            None => defaults.cookie_secure,
        };

        Ok(Self {
            bind_address,
            log_level,
            static_dir,
            session_ttl,
            session_purge_interval,
            cookie_secure,
        })
    }
}

fn parse_positive(var: &str, raw: &str) -> Result<i64, ConfigError> {
    match raw.trim().parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidValue(
            var.to_string(),
            format!("'{}' is not a positive integer", raw),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.session_ttl, chrono::Duration::minutes(1440));
        assert!(!config.cookie_secure);
    }

    #[test]
    fn port_overrides_bind_address_port() {
        let config = Config::from_lookup(lookup(&[
            ("BIND_ADDRESS", "127.0.0.1:8000"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn reads_session_settings() {
        let config = Config::from_lookup(lookup(&[
            ("SESSION_TTL_MINUTES", "30"),
            ("SESSION_PURGE_INTERVAL_SECS", "15"),
            ("COOKIE_SECURE", "true"),
            ("RUST_LOG", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.session_ttl, chrono::Duration::minutes(30));
        assert_eq!(config.session_purge_interval, Duration::from_secs(15));
        assert!(config.cookie_secure);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_invalid_values() {
        for vars in [
            [("BIND_ADDRESS", "not an address")],
            [("PORT", "70000")],
            [("RUST_LOG", "chatty")],
            [("SESSION_TTL_MINUTES", "0")],
            [("COOKIE_SECURE", "maybe")],
        ] {
            assert!(matches!(
                Config::from_lookup(lookup(&vars)),
                Err(ConfigError::InvalidValue(..))
            ));
        }
    }
}
