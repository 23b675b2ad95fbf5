//! Database configuration loaded from the environment.
//!
//! Unparsable values never abort startup: the default is used and a warning
//! is returned for the caller to log once tracing is up.

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone)]
pub struct DatabaseConfig {
    /// Full connection URL; when present it overrides the individual fields
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_idle_time: Duration,
    /// How long a caller waits for a pooled connection before giving up
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            name: "postgres".to_string(),
            ssl_mode: PgSslMode::Disable,
            max_connections: 10,
            min_connections: 2,
            max_idle_time: Duration::from_secs(30 * 60),
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("max_idle_time", &self.max_idle_time)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// Load from the process environment, reading a `.env` file first if one exists
    pub fn from_env() -> (Self, Vec<String>) {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let defaults = Self::default();
        let mut warnings = Vec::new();

        let port = parse_or_warn(&get, "DB_PORT", defaults.port, &mut warnings, |v| v.parse().ok());
        let ssl_mode = parse_or_warn(&get, "DB_SSLMODE", defaults.ssl_mode, &mut warnings, |v| {
            PgSslMode::from_str(v).ok()
        });
        let max_connections = parse_or_warn(
            &get,
            "DB_MAX_CONNS",
            defaults.max_connections,
            &mut warnings,
            |v| v.parse().ok().filter(|n: &u32| *n > 0),
        );
        let mut min_connections = parse_or_warn(
            &get,
            "DB_MIN_CONNS",
            defaults.min_connections,
            &mut warnings,
            |v| v.parse().ok(),
        );
        if min_connections > max_connections {
            warnings.push(format!(
                "DB_MIN_CONNS={min_connections} exceeds DB_MAX_CONNS={max_connections}; using {max_connections}"
            ));
            min_connections = max_connections;
        }
        let max_idle_time = parse_or_warn(
            &get,
            "DB_MAX_IDLE_TIME",
            defaults.max_idle_time,
            &mut warnings,
            |v| humantime::parse_duration(v).ok(),
        );
        let acquire_timeout = parse_or_warn(
            &get,
            "DB_ACQUIRE_TIMEOUT",
            defaults.acquire_timeout,
            &mut warnings,
            |v| humantime::parse_duration(v).ok(),
        );

        let config = Self {
            database_url: get("DATABASE_URL"),
            host: get("DB_HOST").unwrap_or(defaults.host),
            port,
            user: get("DB_USER").unwrap_or(defaults.user),
            password: get("DB_PASSWORD").unwrap_or(defaults.password),
            name: get("DB_NAME").unwrap_or(defaults.name),
            ssl_mode,
            max_connections,
            min_connections,
            max_idle_time,
            acquire_timeout,
        };
        (config, warnings)
    }

    /// Connection options for the pool
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.database_url {
            return PgConnectOptions::from_str(url);
        }
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode))
    }
}

fn parse_or_warn<T, G, P>(get: &G, key: &str, default: T, warnings: &mut Vec<String>, parse: P) -> T
where
    T: std::fmt::Debug,
    G: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let Some(raw) = get(key) else {
        return default;
    };
    match parse(raw.trim()) {
        Some(value) => value,
        None => {
            warnings.push(format!("invalid {key}={raw:?}; using default {default:?}"));
            default
        }
    }
}
