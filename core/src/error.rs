//! Error types for the todo API client.
//!
//! # Design
//! The user only ever sees one fixed message per operation, so the variants
//! here exist for logging. A 404 is not singled out: every non-2xx response
//! lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors produced while building, executing or parsing an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside the 2xx range.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport failed: {0}")]
    TransportError(String),
}
