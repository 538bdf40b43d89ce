//! Environment-driven server configuration.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::domain::ports::DEFAULT_SESSION_TTL;
use crate::outbound::summarizer::DEFAULT_REQUEST_TIMEOUT;

/// Default bind address for local development.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
/// Default SQLite database file.
pub const DEFAULT_DATABASE_URL: &str = "docket.sqlite3";

/// Errors reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidBind { name: &'static str, value: String },
    #[error("{name} is not a positive integer: {value}")]
    InvalidSeconds { name: &'static str, value: String },
}

/// Which summarisation strategy to wire at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizerConfig {
    /// Local deterministic heuristic; no network calls.
    Heuristic,
    /// Remote HTTP service with the heuristic as fallback.
    Remote { endpoint: String, timeout: Duration },
}

/// Runtime configuration assembled from `DOCKET_*` environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub database_url: String,
    pub session_ttl: Duration,
    pub cookie_secure: bool,
    pub summarizer: SummarizerConfig,
}

fn seconds_var(name: &'static str, default: Duration) -> Result<Duration, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidSeconds { name, value }),
        Err(_) => Ok(default),
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to development
    /// defaults for anything unset.
    ///
    /// Variables:
    /// - `DOCKET_BIND` (default `127.0.0.1:8080`)
    /// - `DOCKET_DATABASE_URL` (default `docket.sqlite3`)
    /// - `DOCKET_SESSION_TTL_SECS` (default 7200)
    /// - `DOCKET_COOKIE_SECURE` (default off; set `1` behind TLS)
    /// - `DOCKET_SUMMARISER_URL` (unset means the local heuristic)
    /// - `DOCKET_SUMMARISER_TIMEOUT_SECS` (default 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_raw = env::var("DOCKET_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind {
                name: "DOCKET_BIND",
                value: bind_raw,
            })?;

        let database_url =
            env::var("DOCKET_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let session_ttl = seconds_var("DOCKET_SESSION_TTL_SECS", DEFAULT_SESSION_TTL)?;
        let cookie_secure = env::var("DOCKET_COOKIE_SECURE")
            .map(|value| value != "0")
            .unwrap_or(false);

        let summarizer = match env::var("DOCKET_SUMMARISER_URL") {
            Ok(endpoint) if !endpoint.trim().is_empty() => SummarizerConfig::Remote {
                endpoint,
                timeout: seconds_var("DOCKET_SUMMARISER_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT)?,
            },
            _ => SummarizerConfig::Heuristic,
        };

        Ok(Self {
            bind,
            database_url,
            session_ttl,
            cookie_secure,
            summarizer,
        })
    }
}
