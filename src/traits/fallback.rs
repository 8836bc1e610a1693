//! Local fallback source abstraction.

use async_trait::async_trait;
use bytes::Bytes;

/// Error returned when the bundled snapshot cannot be produced.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{location}: {message}")]
pub struct FallbackReadError {
    /// Where the snapshot was expected (path or "embedded snapshot")
    pub location: String,
    /// Underlying reason
    pub message: String,
}

/// Provides the raw bytes of the local snapshot envelope.
///
/// Parsing is left to the data store so the remote and local paths share
/// exactly one decoder.
#[async_trait]
pub trait FallbackSource: Send + Sync {
    /// Read the snapshot bytes.
    async fn read(&self) -> Result<Bytes, FallbackReadError>;

    /// Human-readable description used in logs.
    fn describe(&self) -> String;
}
