//! Error types for the finext-core library.

use thiserror::Error;

/// Main error type for the finext library.
///
/// Page extraction itself is total and never fails; the fallible surface is
/// limited to configuration handling and serialization at the edges.
#[derive(Error, Debug)]
pub enum FinextError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the finext library.
pub type Result<T> = std::result::Result<T, FinextError>;
