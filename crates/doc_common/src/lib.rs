//! Common types and errors for DocDeck
//!
//! This crate provides the error type and logging setup shared by all DocDeck components.

pub mod telemetry;

use thiserror::Error;

/// Core error types for DocDeck operations
#[derive(Error, Debug)]
pub enum DocError {
    #[error("Document {id} not found")]
    NotFound { id: String },

    #[error("Duplicate document id: {0}")]
    DuplicateDocument(String),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown prompt: {0}")]
    UnknownPrompt(String),

    #[error("Unknown resource URI: {0}")]
    InvalidUri(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DocError {
    /// Shorthand for the error every id-taking operation can return
    pub fn not_found(id: impl Into<String>) -> Self {
        DocError::NotFound { id: id.into() }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, DocError>;

/// Process exit codes
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 101;
