use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Error document returned by the API alongside a failing status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// Per-field validation detail inside an [`ErrorResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RateLimited,
    Unauthorized,
    Forbidden,
    NotFound,
    Validation,
    Server,
    Other,
}

impl ErrorKind {
    /// Classify an error document by the status it arrived with.
    pub fn classify(status: u16, message: &str) -> Self {
        match status {
            401 => ErrorKind::Unauthorized,
            403 | 429 if message.to_ascii_lowercase().contains("rate limit") => {
                ErrorKind::RateLimited
            }
            429 => ErrorKind::RateLimited,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            422 => ErrorKind::Validation,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Forbidden => "forbidden",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::Server => "server",
            ErrorKind::Other => "other",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error decoded from a failing response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({status}): {message}")]
pub struct DomainError {
    pub kind: ErrorKind,
    pub status: u16,
    pub message: String,
    pub documentation_url: Option<String>,
    pub details: Vec<FieldError>,
}

impl DomainError {
    pub fn from_response(status: u16, response: ErrorResponse) -> Self {
        Self {
            kind: ErrorKind::classify(status, &response.message),
            status,
            message: response.message,
            documentation_url: response.documentation_url,
            details: response.errors,
        }
    }
}
