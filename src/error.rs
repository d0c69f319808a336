//! Error types for Podbotnik.

use thiserror::Error;

/// Library-level error type for Podbotnik operations.
#[derive(Error, Debug)]
pub enum PodbotnikError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("Answer generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Podbotnik operations.
pub type Result<T> = std::result::Result<T, PodbotnikError>;
