//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<data_local_dir>/chemdash/chemdash.log`. The filter directive comes from
//! `CHEMDASH_LOG` (default `info`).

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_DIR_NAME: &str = "chemdash";
const LOG_FILE_NAME: &str = "chemdash.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// No platform data directory could be resolved.
    #[error("No suitable data directory available for logs")]
    NoDataDir,
    #[error("Failed to prepare log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid log filter '{directive}': {message}")]
    Filter { directive: String, message: String },
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(String),
}

/// Default log file location.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR_NAME).join(LOG_FILE_NAME))
}

/// Install the global subscriber writing to the default log file.
///
/// Returns the path in use. Callers are expected to carry on without logging
/// when this fails.
pub fn init(filter: &str) -> Result<PathBuf, LoggingError> {
    let path = default_log_path().ok_or(LoggingError::NoDataDir)?;
    init_at(&path, filter)?;
    Ok(path)
}

/// Install the global subscriber writing to `path`.
pub fn init_at(path: &Path, filter: &str) -> Result<(), LoggingError> {
    let env_filter = build_filter(filter)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| LoggingError::SetGlobal(e.to_string()))?;

    tracing::info!(
        "chemdash {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        path.display()
    );
    Ok(())
}

fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::Filter {
        directive: directive.to_string(),
        message: e.to_string(),
    })
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_path_shape() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("chemdash/chemdash.log"));
        }
    }

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("chemdash=debug,reqwest=warn").is_ok());
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        let err = build_filter("chemdash=notalevel").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("chemdash.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
