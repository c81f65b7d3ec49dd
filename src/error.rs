//! Error types shared by the client and the mapping engine.

use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by [`Client`](crate::Client) operations and by the
/// model serialization engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure while talking to the service.
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to parse JSON response")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Raw response body, usually a JSON error description.
        message: String,
    },

    /// A model field failed validation against its mapper description.
    #[error("validation failed for field `{field}`: {reason}")]
    Validation {
        /// Local name of the offending field.
        field: String,
        /// What went wrong with it.
        reason: String,
    },

    /// A composite field referenced a model type missing from the registry.
    #[error("unknown model type `{0}`")]
    UnknownType(String),

    /// No message matching the search criteria arrived before the
    /// configured timeout lapsed.
    #[error("no matching message received within {0:?}")]
    SearchTimeout(Duration),
}

impl Error {
    pub(crate) fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        Error::validation(field, "required field is missing")
    }
}
