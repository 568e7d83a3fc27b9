//! Error types for the ghpin library.
//!
//! This module provides a unified error type with explicit variants for
//! authorization, transport, and API-reported failures, so callers can
//! branch on the failure cause without matching message text.

use thiserror::Error;

/// The unified error type for ghpin operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Authorization errors (bad or missing token, unauthenticated
    /// identity check, any HTTP 401).
    #[error("authorization error: {message}")]
    Auth { message: String },

    /// Network transport errors (connection, timeout, undecodable body).
    #[error("request error: {0}")]
    Transport(#[from] TransportError),

    /// API-reported errors (a non-401 response carrying a structured
    /// error list or message).
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors (invalid endpoint URL).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

impl Error {
    /// Create an authorization error with the given message.
    pub fn auth(message: impl Into<String>) -> Self {
        Error::Auth {
            message: message.into(),
        }
    }

    /// Create an API-reported error with the given message.
    pub fn api(message: impl Into<String>) -> Self {
        Error::Api {
            message: message.into(),
        }
    }

    /// Convert any failure into an authorization error, preserving the
    /// underlying message. Session bootstrap uses this: a client that
    /// cannot resolve its own identity is unusable regardless of which
    /// layer failed.
    pub fn into_auth(self) -> Self {
        match self {
            Error::Auth { .. } => self,
            other => Error::Auth {
                message: other.to_string(),
            },
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Response body could not be decoded as JSON.
    #[error("undecodable response body: {message}")]
    Decode { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API endpoint URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },
}
