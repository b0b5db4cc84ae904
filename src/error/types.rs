//! Error type definitions
//!
//! Defines the main error types used throughout the BOTR client.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for the BOTR client
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors (missing credentials, bad settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upload target could not be opened or inspected
    #[error("File access error for {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Non-200 answer from the remote service
    #[error("HTTP Error {status}: {body}")]
    Protocol { status: u16, body: String },

    /// Malformed percent-encoded input
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A well-formed envelope that lacks the expected payload
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Network/HTTP client errors
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a file access error for the given path
    pub fn file_access(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a protocol error from a raw status and body
    pub fn protocol(status: u16, body: impl Into<String>) -> Self {
        Self::Protocol {
            status,
            body: body.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    /// Create an unexpected response error
    pub fn unexpected_response(msg: impl Into<String>) -> Self {
        Self::UnexpectedResponse(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status of a protocol error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }
}
