use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// development config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("DWELL_ENV", "development"))?;
    let bind_addr = parse_addr("DWELL_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("DWELL_LOG_LEVEL", "info");

    let geocoder_url = or_default(
        "DWELL_GEOCODER_URL",
        "https://nominatim.openstreetmap.org",
    );
    if !(geocoder_url.starts_with("http://") || geocoder_url.starts_with("https://")) {
        return Err(invalid(
            "DWELL_GEOCODER_URL",
            format!("expected an http(s) URL, got \"{geocoder_url}\""),
        ));
    }
    let geocoder_timeout_secs = parse_u64("DWELL_GEOCODER_TIMEOUT_SECS", "10")?;
    let geocoder_user_agent = or_default("DWELL_GEOCODER_USER_AGENT", "dwell/0.1 (lead-capture)");

    let submit_delay_ms = parse_u64("DWELL_SUBMIT_DELAY_MS", "1500")?;
    let session_ttl_secs = parse_u64("DWELL_SESSION_TTL_SECS", "1800")?;
    let max_sessions = parse_usize("DWELL_MAX_SESSIONS", "1000")?;
    if max_sessions == 0 {
        return Err(invalid("DWELL_MAX_SESSIONS", "must be at least 1".to_string()));
    }
    let rate_limit_per_minute = parse_usize("DWELL_RATE_LIMIT_PER_MINUTE", "120")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        geocoder_url,
        geocoder_timeout_secs,
        geocoder_user_agent,
        submit_delay_ms,
        session_ttl_secs,
        max_sessions,
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
            var: "DWELL_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
