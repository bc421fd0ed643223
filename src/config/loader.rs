//! Load `AppConfig` from the process environment (or any key lookup, for tests).

use crate::config::types::*;
use crate::error::ConfigError;
use std::str::FromStr;
use std::time::Duration;

pub const ENV_PG_HOST: &str = "PGHOST";
pub const ENV_PG_PORT: &str = "PGPORT";
pub const ENV_PG_USER: &str = "PGUSER";
pub const ENV_PG_PASSWORD: &str = "PGPASSWORD";
pub const ENV_PG_DB: &str = "PGDB";
pub const ENV_PG_MAX_CONNECTIONS: &str = "PG_MAX_CONNECTIONS";
pub const ENV_ADDR: &str = "ADDR";
pub const ENV_AUTH_TOKEN: &str = "AUTH_TOKEN";
pub const ENV_QUERY_TIMEOUT_SECS: &str = "QUERY_TIMEOUT_SECS";
pub const ENV_BODY_LIMIT_BYTES: &str = "BODY_LIMIT_BYTES";

impl AppConfig {
    /// Read configuration from the process environment. Call `dotenvy::dotenv()` first
    /// if a `.env` file should be honored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let host = required(ENV_PG_HOST)?;
        let port_raw = required(ENV_PG_PORT)?;
        let port = parse_port(&port_raw)?;
        let user = required(ENV_PG_USER)?;
        let password = lookup(ENV_PG_PASSWORD).unwrap_or_default();
        let database = required(ENV_PG_DB)?;
        let listen_addr = required(ENV_ADDR)?;

        let max_connections = optional(get(ENV_PG_MAX_CONNECTIONS), ENV_PG_MAX_CONNECTIONS)?
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: ENV_PG_MAX_CONNECTIONS,
                reason: "must be at least 1".into(),
            });
        }
        let query_timeout = match optional::<u64>(get(ENV_QUERY_TIMEOUT_SECS), ENV_QUERY_TIMEOUT_SECS)? {
            Some(0) => {
                return Err(ConfigError::Invalid {
                    key: ENV_QUERY_TIMEOUT_SECS,
                    reason: "must be at least 1".into(),
                })
            }
            Some(secs) => Duration::from_secs(secs),
            None => DEFAULT_QUERY_TIMEOUT,
        };
        let body_limit = optional(get(ENV_BODY_LIMIT_BYTES), ENV_BODY_LIMIT_BYTES)?.unwrap_or(DEFAULT_BODY_LIMIT);
        let auth_token = get(ENV_AUTH_TOKEN).unwrap_or_else(|| DEFAULT_AUTH_TOKEN.to_string());

        Ok(AppConfig {
            db: DbConfig {
                host,
                port,
                user,
                password,
                database,
                max_connections,
            },
            listen_addr,
            auth_token,
            query_timeout,
            body_limit,
        })
    }
}

/// Port with a single optional leading `:` (e.g. `:5432`).
fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let digits = raw.strip_prefix(':').unwrap_or(raw);
    digits.parse().map_err(|e| ConfigError::Invalid {
        key: ENV_PG_PORT,
        reason: format!("'{}': {}", raw, e),
    })
}

fn optional<T>(value: Option<String>, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .map(|v| {
            v.parse().map_err(|e: T::Err| ConfigError::Invalid {
                key,
                reason: format!("'{}': {}", v, e),
            })
        })
        .transpose()
}
