//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Where products are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Only required by the postgres backend, see [`AppConfig::database_url`].
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub db_max_connections: u32,
    /// Value of `APP_ENV`. Swagger UI is only mounted in `development`.
    pub environment: String,
    pub storage_backend: StorageBackend,
}

impl AppConfig {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| ConfigError::Invalid {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
            reason: e.to_string(),
        })?;

        let db_max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .map_err(|e| ConfigError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    value: v.clone(),
                    reason: e.to_string(),
                })?
                .max(1),
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let environment = lookup("APP_ENV")
            .map(|v| v.trim().to_lowercase())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "development".to_string());

        let storage_backend = match lookup("STORAGE_BACKEND") {
            None => StorageBackend::Postgres,
            Some(v) => match v.trim().to_lowercase().as_str() {
                "postgres" => StorageBackend::Postgres,
                "memory" => StorageBackend::Memory,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "STORAGE_BACKEND",
                        value: v,
                        reason: "expected `postgres` or `memory`".to_string(),
                    })
                }
            },
        };

        Ok(Self {
            database_url,
            bind_addr,
            db_max_connections,
            environment,
            storage_backend,
        })
    }

    /// Database URL must be provided (no default) for safety.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(cfg.storage_backend, StorageBackend::Postgres);
        assert!(cfg.is_development());
        assert_eq!(cfg.database_url(), Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn reads_explicit_values() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://localhost/products"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DB_MAX_CONNECTIONS", "12"),
            ("APP_ENV", "Production"),
            ("STORAGE_BACKEND", "memory"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url(), Ok("postgres://localhost/products"));
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.db_max_connections, 12);
        assert!(!cfg.is_development());
        assert_eq!(cfg.storage_backend, StorageBackend::Memory);
    }

    #[test]
    fn pool_size_is_at_least_one() {
        let cfg = config(&[("DB_MAX_CONNECTIONS", "0")]).unwrap();
        assert_eq!(cfg.db_max_connections, 1);
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(
            config(&[("BIND_ADDR", "not-an-addr")]),
            Err(ConfigError::Invalid { name: "BIND_ADDR", .. })
        ));
        assert!(matches!(
            config(&[("DB_MAX_CONNECTIONS", "many")]),
            Err(ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config(&[("STORAGE_BACKEND", "sqlite")]),
            Err(ConfigError::Invalid { name: "STORAGE_BACKEND", .. })
        ));
    }
}
