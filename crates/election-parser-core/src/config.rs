use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Backend path used when `ELECTION_PARSER_API_PATH` is unset or empty.
pub const DEFAULT_API_PATH: &str = "/parse-and-format";

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
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use url::Url;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("ELECTION_PARSER_ENV", "development"))?;

    let raw_api_url = or_default("ELECTION_PARSER_API_URL", "http://localhost:8080");
    let api_url = Url::parse(raw_api_url.trim())
        .map_err(|e| invalid("ELECTION_PARSER_API_URL", e.to_string()))?;
    if !matches!(api_url.scheme(), "http" | "https") || api_url.cannot_be_a_base() {
        return Err(invalid(
            "ELECTION_PARSER_API_URL",
            format!("expected an absolute http(s) URL, got \"{raw_api_url}\""),
        ));
    }

    let api_path = normalize_api_path(&or_default("ELECTION_PARSER_API_PATH", DEFAULT_API_PATH));

    let bind_addr = or_default("ELECTION_PARSER_BIND_ADDR", "127.0.0.1:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("ELECTION_PARSER_BIND_ADDR", e.to_string()))?;

    let log_level = or_default("ELECTION_PARSER_LOG_LEVEL", "info");

    let request_timeout_secs = or_default("ELECTION_PARSER_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("ELECTION_PARSER_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "ELECTION_PARSER_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("ELECTION_PARSER_USER_AGENT", "election-parser/0.1");

    Ok(AppConfig {
        env,
        api_url,
        api_path,
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ELECTION_PARSER_ENV".to_string(),
            reason: format!("expected development, test, or production; got \"{other}\""),
        }),
    }
}

/// Ensures exactly one leading slash and no trailing slash. A blank path
/// (including a bare `/`) becomes [`DEFAULT_API_PATH`].
#[must_use]
pub fn normalize_api_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_PATH.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
