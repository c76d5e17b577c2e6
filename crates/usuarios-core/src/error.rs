//! Error types for usuarios.
//!
//! Store operations fail with a single kind, [`RequestFailed`]. The crate-wide
//! [`Error`] adds input validation on top of it.

use std::fmt;
use thiserror::Error;

use crate::types::FieldErrors;

/// The unified error type for usuarios operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A request to the user store did not succeed.
    #[error("request failed: {0}")]
    RequestFailed(#[from] RequestFailed),

    /// Input validation errors (bad URL, bad id, invalid form).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Any unsuccessful store operation.
///
/// Network failures, non-success statuses and undecodable bodies all land
/// here. The status and message are diagnostic only; callers are not
/// expected to branch on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailed {
    /// HTTP status code, when a response was received.
    pub status: Option<u16>,
    /// Human-readable reason.
    pub message: String,
}

impl RequestFailed {
    /// Create a failure without a status (transport or decode errors).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Create a failure for a non-success HTTP status.
    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(status) = self.status {
            write!(f, "HTTP {}", status)?;
            if !self.message.is_empty() {
                write!(f, ": {}", self.message)?;
            }
            Ok(())
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for RequestFailed {}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid user id.
    #[error("invalid user id '{value}': {reason}")]
    UserId { value: String, reason: String },

    /// Form values rejected by validation.
    #[error("{0}")]
    Form(FieldErrors),
}
