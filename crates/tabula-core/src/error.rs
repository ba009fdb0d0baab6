//! Error types for tabula.
//!
//! This module provides a unified error type with explicit variants for
//! transport, API, codec, schema and input validation errors.

use std::fmt;
use thiserror::Error;

/// The unified error type for tabula operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (connection, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a non-success status.
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    /// JSON encoding or decoding failed.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// The record type does not have the expected shape.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The delete call succeeded but the server did not delete the record.
    #[error("did not delete {id}: {response}")]
    NotDeleted { id: String, response: String },

    /// Input validation errors (table name, base id, API URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Any other failure reported by a transport implementation.
    #[error("{message}")]
    Other { message: String },
}

/// A non-success response from the API.
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Error type reported by the server (e.g. `NOT_FOUND`), if any.
    pub kind: Option<String>,
    /// Error message from the server.
    pub message: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref kind) = self.kind {
            write!(f, " [{}]", kind)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error.
    pub fn new(status: u16, kind: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            kind,
            message,
        }
    }

    /// Check if the server rejected the credentials.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401
            || self.status == 403
            || self.kind.as_deref() == Some("AUTHENTICATION_REQUIRED")
            || self.kind.as_deref() == Some("INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND")
    }

    /// Check if the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Check if the request was throttled.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

/// A record type whose members do not have the shape the API needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required member is absent (or, for identifiers, empty).
    #[error("cannot find field {record}.{member}")]
    MissingMember { record: String, member: String },

    /// A member exists but holds the wrong kind of value.
    #[error("type error setting {record}.{member}: {expected} != {found}")]
    TypeMismatch {
        record: String,
        member: String,
        expected: String,
        found: String,
    },
}

impl SchemaError {
    pub(crate) fn missing(record: &str, member: impl Into<String>) -> Self {
        SchemaError::MissingMember {
            record: record.to_string(),
            member: member.into(),
        }
    }

    pub(crate) fn mismatch(
        record: &str,
        member: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        SchemaError::TypeMismatch {
            record: record.to_string(),
            member: member.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid table name.
    #[error("invalid table name '{value}': {reason}")]
    TableName { value: String, reason: String },

    /// Invalid record identifier.
    #[error("invalid record id '{value}': {reason}")]
    RecordId { value: String, reason: String },

    /// Invalid base identifier.
    #[error("invalid base id '{value}': {reason}")]
    BaseId { value: String, reason: String },

    /// Invalid API URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
