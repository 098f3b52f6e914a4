use std::{env, fmt::Display, str::FromStr};

use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Likes are kept in memory when unset.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    /// Events are not published when unset.
    pub nats_url: Option<String>,
    /// Upper bound on sessions the in-memory sign-up registry records.
    pub session_capacity: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid { key: &'static str, value: String, reason: String },
}

impl Config {
    /// Reads the process environment. `main` loads `.env` beforehand.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: try_load(&lookup, "HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "8083")?,
            database_url: optional(&lookup, "DATABASE_URL"),
            database_max_connections: try_load(&lookup, "DATABASE_MAX_CONNECTIONS", "10")?,
            nats_url: optional(&lookup, "NATS_URL"),
            session_capacity: try_load(&lookup, "SESSION_CAPACITY", "100000")?,
        })
    }

    pub fn bind_addr(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = optional(lookup, key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid { key, reason: e.to_string(), value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8083");
        assert_eq!(config.database_max_connections, 10);
        assert!(config.database_url.is_none());
        assert!(config.nats_url.is_none());
        assert_eq!(config.session_capacity, crate::session::DEFAULT_SESSION_CAPACITY);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[("PORT", "9000"), ("DATABASE_URL", "postgres://db/store"), ("NATS_URL", " "), ("SESSION_CAPACITY", "50")])).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.session_capacity, 50);
        assert_eq!(config.database_url.as_deref(), Some("postgres://db/store"));
        assert!(config.nats_url.is_none());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
