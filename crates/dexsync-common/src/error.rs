//! Error types shared across dexsync crates

use thiserror::Error;

/// Result type alias for common operations
pub type Result<T> = std::result::Result<T, CommonError>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid value for {name}: '{value}' ({reason})")]
    InvalidEnv {
        name: String,
        value: String,
        reason: String,
    },

    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },
}

impl CommonError {
    pub(crate) fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }
}
