use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default path for the record file, shared by the sink default and the
/// `report` command's input default.
pub const DEFAULT_OUTPUT_PATH: &str = "page_records.json";

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
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let access_token = require("PAGESCOPE_ACCESS_TOKEN")?;

    let graph_base_url = or_default("PAGESCOPE_GRAPH_BASE_URL", "https://graph.facebook.com");
    let graph_version = or_default("PAGESCOPE_GRAPH_VERSION", "v19.0");
    let request_timeout_secs = parse_u64("PAGESCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PAGESCOPE_USER_AGENT", "pagescope/0.1 (page-contact-audit)");

    let post_limit = parse_u32("PAGESCOPE_POST_LIMIT", "10")?;
    let max_retries = parse_u32("PAGESCOPE_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms = parse_u64("PAGESCOPE_RETRY_BACKOFF_BASE_MS", "1000")?;

    let output_path = PathBuf::from(or_default("PAGESCOPE_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let log_level = or_default("PAGESCOPE_LOG_LEVEL", "info");

    Ok(AppConfig {
        access_token,
        graph_base_url,
        graph_version,
        request_timeout_secs,
        user_agent,
        post_limit,
        max_retries,
        retry_backoff_base_ms,
        output_path,
        log_level,
    })
}
