use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "OFFPLAN_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.catalog_path.to_string_lossy(), "./data.json");
    assert_eq!(cfg.page_size, 12);
    assert_eq!(cfg.default_max_price, 50_000_000);
    assert_eq!(cfg.top_developers, 8);
    assert_eq!(cfg.featured_count, 3);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("OFFPLAN_ENV", "production");
    map.insert("OFFPLAN_LOG_LEVEL", "debug");
    map.insert("OFFPLAN_CATALOG_PATH", "/srv/listings/data.json");
    map.insert("OFFPLAN_PAGE_SIZE", "24");
    map.insert("OFFPLAN_DEFAULT_MAX_PRICE", "10000000");
    map.insert("OFFPLAN_TOP_DEVELOPERS", "4");
    map.insert("OFFPLAN_FEATURED_COUNT", "6");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(
        cfg.catalog_path.to_string_lossy(),
        "/srv/listings/data.json"
    );
    assert_eq!(cfg.page_size, 24);
    assert_eq!(cfg.default_max_price, 10_000_000);
    assert_eq!(cfg.top_developers, 4);
    assert_eq!(cfg.featured_count, 6);
}

#[test]
fn build_app_config_rejects_zero_page_size() {
    let mut map = HashMap::new();
    map.insert("OFFPLAN_PAGE_SIZE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OFFPLAN_PAGE_SIZE"
        ),
        "expected InvalidEnvVar(OFFPLAN_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_page_size() {
    let mut map = HashMap::new();
    map.insert("OFFPLAN_PAGE_SIZE", "twelve");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OFFPLAN_PAGE_SIZE"
        ),
        "expected InvalidEnvVar(OFFPLAN_PAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_negative_max_price() {
    let mut map = HashMap::new();
    map.insert("OFFPLAN_DEFAULT_MAX_PRICE", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OFFPLAN_DEFAULT_MAX_PRICE"
        ),
        "expected InvalidEnvVar(OFFPLAN_DEFAULT_MAX_PRICE), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_unknown_environment() {
    let mut map = HashMap::new();
    map.insert("OFFPLAN_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OFFPLAN_ENV"
        ),
        "expected InvalidEnvVar(OFFPLAN_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_invalid_featured_count() {
    let mut map = HashMap::new();
    map.insert("OFFPLAN_FEATURED_COUNT", "many");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "OFFPLAN_FEATURED_COUNT"
        ),
        "expected InvalidEnvVar(OFFPLAN_FEATURED_COUNT), got: {result:?}"
    );
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Production.to_string(), "production");
}
