//! Local snapshot sources used when the remote endpoint fails.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;

use crate::traits::{FallbackReadError, FallbackSource};

/// Snapshot compiled into the binary.
pub const BUNDLED_SNAPSHOT: &str = include_str!("../../data/fallback.json");

/// Fallback backed by a string held in memory, by default the bundled snapshot.
#[derive(Debug, Clone)]
pub struct EmbeddedFallback {
    contents: &'static str,
}

impl EmbeddedFallback {
    /// Use the snapshot bundled at build time.
    pub fn bundled() -> Self {
        Self {
            contents: BUNDLED_SNAPSHOT,
        }
    }

    /// Use arbitrary static contents (tests, alternative builds).
    pub fn from_static(contents: &'static str) -> Self {
        Self { contents }
    }
}

impl Default for EmbeddedFallback {
    fn default() -> Self {
        Self::bundled()
    }
}

#[async_trait]
impl FallbackSource for EmbeddedFallback {
    async fn read(&self) -> Result<Bytes, FallbackReadError> {
        if self.contents.trim().is_empty() {
            return Err(FallbackReadError {
                location: self.describe(),
                message: "snapshot is empty".to_string(),
            });
        }
        Ok(Bytes::from_static(self.contents.as_bytes()))
    }

    fn describe(&self) -> String {
        "embedded snapshot".to_string()
    }
}

/// Fallback read from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileFallback {
    path: PathBuf,
}

impl FileFallback {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[async_trait]
impl FallbackSource for FileFallback {
    async fn read(&self) -> Result<Bytes, FallbackReadError> {
        tokio::fs::read(&self.path)
            .await
            .map(Bytes::from)
            .map_err(|e| FallbackReadError {
                location: self.describe(),
                message: e.to_string(),
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
