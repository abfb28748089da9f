//! Client error types.
//!
//! Provides error types for HTTP client operations.

use std::fmt;

use super::config::KeyKind;
use crate::error::PostGridError;

/// Client errors.
#[derive(Debug)]
pub enum ClientError {
    /// HTTP request failed.
    Request(reqwest::Error),

    /// Failed to serialize a request body.
    Serialization(String),

    /// Failed to deserialize response.
    Deserialization(String),

    /// PostGrid returned an error payload.
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Error object from the response.
        error: PostGridError,
    },

    /// The API key required by the call is not configured.
    MissingApiKey(KeyKind),

    /// Invalid configuration.
    InvalidConfig(String),

    /// A local upload could not be read.
    File(String),

    /// Request timeout.
    Timeout,
}

impl ClientError {
    /// Returns the PostGrid-shaped error object for this failure.
    ///
    /// API errors carry PostGrid's own payload; everything else is reported
    /// as a `client` error.
    #[must_use]
    pub fn to_postgrid_error(&self) -> PostGridError {
        match self {
            Self::Api { error, .. } => error.clone(),
            Self::MissingApiKey(kind) => PostGridError::client(kind.missing_message()),
            other => PostGridError::client(other.to_string()),
        }
    }

    /// Returns the HTTP status if the error came from a PostGrid response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(e) => write!(f, "HTTP request failed: {}", e),
            Self::Serialization(msg) => write!(f, "serialization failed: {}", msg),
            Self::Deserialization(msg) => write!(f, "deserialization failed: {}", msg),
            Self::Api { status, error } => {
                write!(f, "API error [{}] {}: {}", status, error.kind, error.message)
            }
            Self::MissingApiKey(kind) => f.write_str(kind.missing_message()),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Self::File(msg) => write!(f, "file error: {}", msg),
            Self::Timeout => write!(f, "request timeout"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}
