//! Network-related error types.
//!
//! Covers both transport failures and non-2xx responses from the data
//! endpoint. Neither is retried; both send the data store to its fallback.

use std::fmt;

use crate::traits::HttpError;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed { url: String, message: String },

    /// The transport gave up waiting.
    Timeout { url: String, message: String },

    /// HTTP status error (non-2xx response).
    HttpStatus { status: u16, message: String },

    /// The configured endpoint is not a usable URL.
    InvalidUrl { url: String },

    /// Generic network error.
    Other { message: String },
}

impl NetworkError {
    /// Build a status error from a non-2xx response.
    ///
    /// The body is kept (truncated) because upstream services tend to explain
    /// themselves there.
    pub fn from_status(status: u16, body: &str) -> Self {
        const MAX_BODY: usize = 200;
        let message = if body.trim().is_empty() {
            format!("HTTP error! status: {}", status)
        } else {
            body.trim().chars().take(MAX_BODY).collect()
        };
        NetworkError::HttpStatus { status, message }
    }

    /// Classify a transport error raised while requesting `url`.
    pub fn from_http_error(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(message) => NetworkError::Timeout {
                url: url.to_string(),
                message,
            },
            HttpError::InvalidUrl(_) => NetworkError::InvalidUrl {
                url: url.to_string(),
            },
            HttpError::Io(message) | HttpError::Other(message) => NetworkError::Other { message },
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the data service. Please check your internet connection."
                    .to_string()
            }
            NetworkError::Timeout { .. } => {
                "The data service took too long to respond.".to_string()
            }
            NetworkError::HttpStatus { status, .. } => match *status {
                401 | 403 => "The data service refused access to the dashboard record.".to_string(),
                404 => "The dashboard record was not found on the data service.".to_string(),
                429 => "The data service is rate limiting requests.".to_string(),
                500..=599 => "The data service is experiencing issues.".to_string(),
                _ => format!("The data service returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidUrl { url } => {
                format!("The configured data endpoint '{}' is not a valid URL.", url)
            }
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { url, message } => {
                write!(f, "Request to '{}' timed out: {}", url, message)
            }
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}
