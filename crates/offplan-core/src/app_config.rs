use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the catalog tools, read from `OFFPLAN_*` variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// JSON catalog file loaded once at startup.
    pub catalog_path: PathBuf,
    /// Listings per page; always at least 1.
    pub page_size: usize,
    /// Upper price bound applied when the caller sets none.
    pub default_max_price: u64,
    pub top_developers: usize,
    pub featured_count: usize,
}
