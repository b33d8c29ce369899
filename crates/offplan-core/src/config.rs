use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Listings per page in the web catalog grid.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Price slider ceiling in the web catalog, in AED.
pub const DEFAULT_MAX_PRICE: u64 = 50_000_000;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
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
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup indirection keeps the parsing
/// testable with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("OFFPLAN_ENV", "development"))?;
    let log_level = or_default("OFFPLAN_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default("OFFPLAN_CATALOG_PATH", "./data.json"));

    let page_size = parse_usize("OFFPLAN_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())?;
    if page_size == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "OFFPLAN_PAGE_SIZE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }

    let default_max_price =
        parse_u64("OFFPLAN_DEFAULT_MAX_PRICE", &DEFAULT_MAX_PRICE.to_string())?;
    let top_developers = parse_usize("OFFPLAN_TOP_DEVELOPERS", "8")?;
    let featured_count = parse_usize("OFFPLAN_FEATURED_COUNT", "3")?;

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        page_size,
        default_max_price,
        top_developers,
        featured_count,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "OFFPLAN_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
