use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A catalog entry that cannot be represented as a [`crate::PropertyRecord`].
#[derive(Debug, Error)]
#[error("invalid listing {id}: {reason}")]
pub struct NormalizeError {
    pub id: String,
    pub reason: String,
}
