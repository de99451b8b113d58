/******************************************************************************
   Author: Skrybe SDK Contributors
   Date: 14/10/26
******************************************************************************/

//! Error types returned by the client
//!
//! Two kinds reach callers of the API operations: [`ValidationError`] when the
//! request options fail local checks (nothing was sent) and [`TransportError`]
//! when the HTTP round trip failed. A response body that is not JSON is not an
//! error; see [`crate::model::responses::ApiResponse::Raw`].

use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the library
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request options failed local checks before dispatch
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The HTTP round trip failed
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Request options could not be encoded
    #[error("serialization error: {0}")]
    Serialization(String),
    /// A parsed response did not match the requested type
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Returns the validation error, if this is one
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::Validation(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the transport error, if this is one
    #[must_use]
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            AppError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Transport(TransportError::from(error))
    }
}

/// A single failed check on one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Option name the message refers to, e.g. `fromEmail`
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    /// Creates a field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error for a required field that is missing or blank
    pub fn required(field: &str) -> Self {
        Self::new(field, format!("Field '{field}' is required"))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Request options failed one or more local checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates a validation error from the collected field errors
    #[must_use]
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Validation error holding a single field error
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(vec![FieldError::new(field, message)])
    }

    /// All field errors, in the order they were found
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Message recorded for `field`, if any
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Names of the fields that failed
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// The HTTP round trip failed: connection error or non-2xx status
#[derive(Debug, thiserror::Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    status: Option<StatusCode>,
    #[source]
    source: reqwest::Error,
}

impl TransportError {
    /// Message of the underlying transport failure
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status, when the server answered
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Numeric status code, `0` when there was no response
    #[must_use]
    pub fn code(&self) -> u16 {
        self.status.map_or(0, |s| s.as_u16())
    }

    /// The originating reqwest error
    #[must_use]
    pub fn cause(&self) -> &reqwest::Error {
        &self.source
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(source: reqwest::Error) -> Self {
        Self {
            message: source.to_string(),
            status: source.status(),
            source,
        }
    }
}
