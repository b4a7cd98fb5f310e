use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use catalog_core::pagination::DEFAULT_MAX_PER_PAGE;
use catalog_db::PoolSettings;

/// Errors raised while reading configuration at startup.
///
/// Any of these aborts the process before the listener is bound.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// Everything except `DATABASE_URL` has a default suitable for local
/// development.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Postgres connection string. Required.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted `per_page` (default: `100`).
    pub max_per_page: i64,
    /// Connection pool sizing.
    pub pool: PoolSettings,
    /// Apply bundled migrations on startup (default: `false`).
    pub run_migrations: bool,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &"<redacted>")
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_per_page", &self.max_per_page)
            .field("pool", &self.pool)
            .field("run_migrations", &self.run_migrations)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                   | Default   |
    /// |---------------------------|-----------|
    /// | `DATABASE_URL`            | required  |
    /// | `HOST`                    | `0.0.0.0` |
    /// | `PORT`                    | `8080`    |
    /// | `CORS_ORIGINS`            | (none)    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`      |
    /// | `MAX_PER_PAGE`            | `100`     |
    /// | `DB_MAX_CONNECTIONS`      | `25`      |
    /// | `DB_MIN_CONNECTIONS`      | `5`       |
    /// | `DB_MAX_LIFETIME_SECS`    | `300`     |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`       |
    /// | `RUN_MIGRATIONS`          | `false`   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host: IpAddr =
            parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]), "an IP address")?;
        let port: u16 = parse_or(&lookup, "PORT", 8080, "a valid port")?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    expected: "a list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs: u64 =
            parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a number of seconds")?;

        let max_per_page: i64 =
            parse_or(&lookup, "MAX_PER_PAGE", DEFAULT_MAX_PER_PAGE, "a positive integer")?;
        if max_per_page < 1 {
            return Err(ConfigError::Invalid {
                name: "MAX_PER_PAGE",
                expected: "a positive integer",
                value: max_per_page.to_string(),
            });
        }

        let defaults = PoolSettings::default();
        let pool = PoolSettings {
            max_connections: parse_or(
                &lookup,
                "DB_MAX_CONNECTIONS",
                defaults.max_connections,
                "a connection count",
            )?,
            min_connections: parse_or(
                &lookup,
                "DB_MIN_CONNECTIONS",
                defaults.min_connections,
                "a connection count",
            )?,
            max_lifetime: Duration::from_secs(parse_or(
                &lookup,
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime.as_secs(),
                "a number of seconds",
            )?),
            acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
                "a number of seconds",
            )?),
        };
        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid {
                name: "DB_MIN_CONNECTIONS",
                expected: "at most DB_MAX_CONNECTIONS",
                value: pool.min_connections.to_string(),
            });
        }

        let run_migrations: bool = parse_or(&lookup, "RUN_MIGRATIONS", false, "true or false")?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            max_per_page,
            pool,
            run_migrations,
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset or empty.
fn parse_or<F, T>(
    lookup: &F,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name,
                expected,
                value: raw,
            })
        }
        _ => Ok(default),
    }
}
