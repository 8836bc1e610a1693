//! Errors raised while loading the dashboard record.

use thiserror::Error;

use super::network::NetworkError;
use crate::traits::FallbackReadError;

/// Why a data source could not produce a dashboard record.
///
/// These never reach the view layer directly. The data store catches them,
/// tries the fallback, and only the final outcome is published.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// Transport failure or non-2xx response.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Body was not valid JSON or lacked an expected envelope field.
    #[error("Malformed dashboard data from {origin}: {message}")]
    Parse { origin: String, message: String },

    /// The bundled snapshot is missing or malformed.
    #[error("Bundled snapshot unavailable ({location}): {message}")]
    FallbackUnavailable { location: String, message: String },
}

impl LoadError {
    pub fn parse(origin: impl Into<String>, err: &serde_json::Error) -> Self {
        LoadError::Parse {
            origin: origin.into(),
            message: err.to_string(),
        }
    }

    /// Promote any error hit while reading the fallback to
    /// [`LoadError::FallbackUnavailable`].
    pub fn into_fallback_unavailable(self, location: &str) -> Self {
        match self {
            LoadError::FallbackUnavailable { .. } => self,
            other => LoadError::FallbackUnavailable {
                location: location.to_string(),
                message: other.to_string(),
            },
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Network(err) => err.user_message(),
            LoadError::Parse { .. } => {
                "The dashboard data could not be understood.".to_string()
            }
            LoadError::FallbackUnavailable { .. } => {
                "The bundled dashboard snapshot could not be loaded.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            LoadError::Network(err) => err.error_code(),
            LoadError::Parse { .. } => "E_DATA_PARSE",
            LoadError::FallbackUnavailable { .. } => "E_DATA_FALLBACK",
        }
    }
}

impl From<FallbackReadError> for LoadError {
    fn from(err: FallbackReadError) -> Self {
        LoadError::FallbackUnavailable {
            location: err.location,
            message: err.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::parse("remote endpoint", &json_err);
        assert!(err.to_string().starts_with("Malformed dashboard data from remote endpoint"));
        assert_eq!(err.error_code(), "E_DATA_PARSE");
    }

    #[test]
    fn test_network_error_is_transparent() {
        let err: LoadError = NetworkError::from_status(500, "boom").into();
        assert_eq!(err.to_string(), "HTTP 500 error: boom");
        assert_eq!(err.error_code(), "E_NET_HTTP");
    }

    #[test]
    fn test_into_fallback_unavailable() {
        let json_err = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = LoadError::parse("embedded snapshot", &json_err)
            .into_fallback_unavailable("embedded snapshot");
        match &err {
            LoadError::FallbackUnavailable { location, message } => {
                assert_eq!(location, "embedded snapshot");
                assert!(message.contains("Malformed"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(err.error_code(), "E_DATA_FALLBACK");
    }

    #[test]
    fn test_from_fallback_read_error() {
        let err: LoadError = FallbackReadError {
            location: "/tmp/data.json".to_string(),
            message: "No such file or directory".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Bundled snapshot unavailable (/tmp/data.json): No such file or directory"
        );
    }
}
