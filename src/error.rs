//! Error types for the OneAuth console

use serde::Serialize;
use thiserror::Error;

use crate::forms::FieldErrors;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Please correct the highlighted fields.")]
    Validation(FieldErrors),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Prompt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Prompt(err.to_string())
    }
}

impl From<RequestFailure> for Error {
    fn from(failure: RequestFailure) -> Self {
        Error::Api(ApiError::Request(failure))
    }
}

/// Message used when a failed response carries no readable message.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Structured failure of a single API request.
///
/// Serializes as `{"error": "..."}`. The HTTP status is kept for logging and
/// is absent when the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{error}")]
pub struct RequestFailure {
    #[serde(skip)]
    pub status: Option<u16>,
    pub error: String,
}

impl RequestFailure {
    pub fn new(status: Option<u16>, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    /// Build a failure from a non-success response body.
    ///
    /// Looks for a `message` field, then an `error` field, and falls back to
    /// [`GENERIC_FAILURE`] when the body is empty, not JSON, or has neither.
    pub fn from_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error"].iter().find_map(|field| {
                    value
                        .get(field)
                        .and_then(|v| v.as_str())
                        .filter(|s| !s.is_empty())
                        .map(str::to_string)
                })
            })
            .unwrap_or_else(|| GENERIC_FAILURE.to_string());

        Self::new(Some(status), message)
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Request(#[from] RequestFailure),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for RequestFailure {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        if err.is_timeout() {
            RequestFailure::new(status, "Request timed out")
        } else if err.is_connect() {
            RequestFailure::new(status, "Failed to connect to API")
        } else {
            RequestFailure::new(status, err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `oneauth init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
