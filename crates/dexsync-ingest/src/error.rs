//! Error types for dexsync ingestion

use thiserror::Error;

/// Result type alias for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Pokemon #{id} has no English {field} entry")]
    MissingEnglishEntry { id: u32, field: &'static str },

    #[error("Pokemon #{id} lists {found} base stats, expected 6")]
    MissingStats { id: u32, found: usize },

    #[error("Notion rejected the page (status {status}): {message}")]
    Notion { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Common(#[from] dexsync_common::CommonError),
}

impl IngestError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for a 404 from an upstream endpoint (an id PokeAPI does not know).
    pub fn is_not_found(&self) -> bool {
        match self {
            IngestError::Status { status, .. } => *status == 404,
            IngestError::Http(e) => e.status().map(|s| s.as_u16()) == Some(404),
            _ => false,
        }
    }
}
