//! PostGrid error payloads and the uniform result envelope.
//!
//! PostGrid reports failures as `{"error": {"type": ..., "message": ...}}`.
//! [`Envelope`] is the `{success, data | error}` shape every call can be
//! flattened into.

use serde::{Deserialize, Serialize};

use crate::client::ClientError;

/// Error type used for failures raised by this client rather than PostGrid.
pub const CLIENT_ERROR_TYPE: &str = "client";

/// Error object returned by PostGrid (or synthesized by the client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct PostGridError {
    /// Error type, e.g. `invalid_api_key_error` or `client`.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Human readable message.
    #[serde(default)]
    pub message: String,
}

impl PostGridError {
    /// Creates a new error object.
    #[must_use]
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Creates a client-side error object.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::new(CLIENT_ERROR_TYPE, message)
    }

    /// Returns true if the error was raised by the client.
    #[must_use]
    pub fn is_client(&self) -> bool {
        self.kind == CLIENT_ERROR_TYPE
    }
}

/// Uniform `{success, data | error}` result shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// True when the call produced data.
    pub success: bool,

    /// Response data on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Error object on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<PostGridError>,
}

impl<T> Envelope<T> {
    /// Creates a successful envelope.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failed envelope.
    #[must_use]
    pub fn err(error: PostGridError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }

    /// Converts the envelope back into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the carried error, or a client error if the envelope holds
    /// neither data nor an error.
    pub fn into_result(self) -> Result<T, PostGridError> {
        match (self.data, self.error) {
            (Some(data), None) if self.success => Ok(data),
            (_, Some(error)) => Err(error),
            _ => Err(PostGridError::client("empty envelope")),
        }
    }
}

impl<T> From<Result<T, ClientError>> for Envelope<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => Self::err(err.to_postgrid_error()),
        }
    }
}
