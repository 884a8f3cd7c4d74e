//! Error handling module
//!
//! Defines the client error types and the classification of remote error bodies

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Remote API answered with a non-success status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Transport failure before a response was obtained
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON encoding of a request or decoding of a success response failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Response that decoded but carried an unexpected payload
    #[error("Unexpected response: {0}")]
    Unexpected(String),

    /// Caller-side validation, raised before any network call
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Credential storage failure
    #[error("Credential storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),
}

/// Non-2xx response from the remote API
#[derive(Error, Debug, Clone, PartialEq)]
#[error("API Error: {status}")]
pub struct ApiError {
    /// HTTP status code of the response
    pub status: u16,
    /// Classified response body
    pub body: ErrorBody,
}

/// Remote error body, classified once at parse time
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    /// `{"detail": [{loc, msg, type}, ...]}`
    Validation(Vec<ValidationIssue>),
    /// `{"detail": "..."}`
    Message(String),
    /// Any other JSON document
    Unknown(Value),
    /// Missing body, `null`, or a body that is not JSON
    Empty,
}

/// Single entry of a validation error list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Location of the offending value, e.g. `["body", "email"]`
    #[serde(default)]
    pub loc: Vec<LocSegment>,
    /// Human readable message
    pub msg: String,
    /// Error kind reported by the server
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Path segment inside a validation location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Index(u64),
    Field(String),
}

impl ErrorBody {
    /// Parse raw response bytes, falling back to `Empty` when they are not JSON
    pub fn parse(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(value) => Self::classify(value),
            Err(_) => ErrorBody::Empty,
        }
    }

    /// Classify an already parsed JSON body
    pub fn classify(value: Value) -> Self {
        let detail = match value.get("detail") {
            Some(detail) => detail.clone(),
            None if value.is_null() => return ErrorBody::Empty,
            None => return ErrorBody::Unknown(value),
        };

        match detail {
            Value::String(message) => ErrorBody::Message(message),
            Value::Array(_) => match serde_json::from_value::<Vec<ValidationIssue>>(detail) {
                Ok(issues) => ErrorBody::Validation(issues),
                Err(_) => ErrorBody::Unknown(value),
            },
            _ => ErrorBody::Unknown(value),
        }
    }

    /// Human readable text carried by the body, if any
    pub fn message(&self) -> Option<String> {
        match self {
            ErrorBody::Validation(issues) if !issues.is_empty() => Some(
                issues
                    .iter()
                    .map(|issue| issue.msg.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            ErrorBody::Message(message) => Some(message.clone()),
            _ => None,
        }
    }
}

impl ApiError {
    pub fn new(status: u16, body: ErrorBody) -> Self {
        Self { status, body }
    }

    /// Human readable text extracted from the body
    pub fn message(&self) -> Option<String> {
        self.body.message()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401 || self.status == 403
    }
}

impl AppError {
    /// HTTP status of the remote failure, if this error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api(api) => Some(api.status),
            AppError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Api(api) if api.is_unauthorized() => "authentication_error",
            AppError::Api(_) => "api_error",
            AppError::Transport(_) => "transport_error",
            AppError::Serialization(_) | AppError::Unexpected(_) => "serialization_error",
            AppError::Validation(_) => "invalid_request_error",
            AppError::Storage(_) => "storage_error",
            AppError::Config(_) => "config_error",
        }
    }

    /// Whether detailed error information should be logged
    pub fn should_log_details(&self) -> bool {
        !matches!(self, AppError::Api(api) if api.is_unauthorized())
    }

    /// Message suitable for showing to a user.
    ///
    /// Validation lists become their joined `msg` fields, plain details are
    /// shown as-is, caller-side validation shows its own text; everything
    /// else falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Api(api) => api.message().unwrap_or_else(|| fallback.to_string()),
            AppError::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> AppError {
        AppError::Validation(message.into())
    }

    /// Create unexpected response error
    pub fn unexpected_error(message: impl Into<String>) -> AppError {
        AppError::Unexpected(message.into())
    }
}

/// Error context extension trait
pub trait ErrorContext<T> {
    /// Add storage error context
    fn storage_context(self, message: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn storage_context(self, message: &str) -> AppResult<T> {
        self.map_err(|e| AppError::Storage(format!("{}: {}", message, e)))
    }
}
