use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_COUNTRY: &str = "Nigeria";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("REVDB_ENV", "development"))?;

    let bind_addr = or_default("REVDB_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("REVDB_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("REVDB_LOG_LEVEL", "info");

    let default_country = or_default("REVDB_DEFAULT_COUNTRY", DEFAULT_COUNTRY)
        .trim()
        .to_string();
    if default_country.is_empty() {
        return Err(invalid(
            "REVDB_DEFAULT_COUNTRY",
            "must not be blank".to_string(),
        ));
    }

    let db_max_connections = or_default("REVDB_DB_MAX_CONNECTIONS", "10")
        .parse::<u32>()
        .map_err(|e| invalid("REVDB_DB_MAX_CONNECTIONS", e.to_string()))?;
    let db_min_connections = or_default("REVDB_DB_MIN_CONNECTIONS", "1")
        .parse::<u32>()
        .map_err(|e| invalid("REVDB_DB_MIN_CONNECTIONS", e.to_string()))?;
    let db_acquire_timeout_secs = or_default("REVDB_DB_ACQUIRE_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("REVDB_DB_ACQUIRE_TIMEOUT_SECS", e.to_string()))?;

    if db_min_connections > db_max_connections {
        return Err(invalid(
            "REVDB_DB_MIN_CONNECTIONS",
            format!("{db_min_connections} exceeds REVDB_DB_MAX_CONNECTIONS ({db_max_connections})"),
        ));
    }

    let rate_limit_per_minute = or_default("REVDB_RATE_LIMIT_PER_MINUTE", "120")
        .parse::<usize>()
        .map_err(|e| invalid("REVDB_RATE_LIMIT_PER_MINUTE", e.to_string()))?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        default_country,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        rate_limit_per_minute,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "REVDB_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
