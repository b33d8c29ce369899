use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Normalize(#[from] offplan_core::NormalizeError),

    #[error("catalog validation failed: {0}")]
    Validation(String),

    #[error("catalog is empty")]
    EmptyCatalog,
}
