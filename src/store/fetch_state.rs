//! Lifecycle of the one-shot dashboard load.

use std::fmt;
use std::sync::Arc;

use crate::models::DashboardRecord;

/// Which source produced the dashboard record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataOrigin {
    Remote,
    LocalFallback,
}

impl DataOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataOrigin::Remote => "remote",
            DataOrigin::LocalFallback => "local-fallback",
        }
    }

    /// Short label for the header notice.
    pub fn label(&self) -> &'static str {
        match self {
            DataOrigin::Remote => "Live data",
            DataOrigin::LocalFallback => "Offline snapshot",
        }
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status discriminant of a [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// State of the dashboard load.
///
/// Only `Succeeded` carries a payload, so a record can never be observed
/// alongside a failure.
#[derive(Debug, Clone, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Succeeded {
        payload: Arc<DashboardRecord>,
        origin: DataOrigin,
    },
    Failed {
        error_message: String,
    },
}

impl FetchState {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Succeeded { .. } => FetchStatus::Succeeded,
            FetchState::Failed { .. } => FetchStatus::Failed,
        }
    }

    pub fn payload(&self) -> Option<&Arc<DashboardRecord>> {
        match self {
            FetchState::Succeeded { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn origin(&self) -> Option<DataOrigin> {
        match self {
            FetchState::Succeeded { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Failed { error_message } => Some(error_message),
            _ => None,
        }
    }

    /// True until the load has resolved either way.
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Idle | FetchState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }
}

/// Read model handed to views: `{data, loading, error, data_source}`.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    pub data: Option<Arc<DashboardRecord>>,
    pub loading: bool,
    pub error: Option<String>,
    pub data_source: Option<DataOrigin>,
}

impl From<&FetchState> for DashboardSnapshot {
    fn from(state: &FetchState) -> Self {
        Self {
            data: state.payload().cloned(),
            loading: state.is_pending(),
            error: state.error_message().map(str::to_string),
            data_source: state.origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_snapshot_is_loading() {
        let snapshot = DashboardSnapshot::from(&FetchState::Idle);
        assert!(snapshot.loading);
        assert!(snapshot.data.is_none());
        assert!(snapshot.error.is_none());
        assert!(snapshot.data_source.is_none());
    }

    #[test]
    fn test_failed_snapshot_has_no_data() {
        let state = FetchState::Failed {
            error_message: "HTTP 500 error: boom".to_string(),
        };
        let snapshot = DashboardSnapshot::from(&state);
        assert_eq!(state.status(), FetchStatus::Failed);
        assert!(!snapshot.loading);
        assert!(snapshot.data.is_none());
        assert_eq!(snapshot.error.as_deref(), Some("HTTP 500 error: boom"));
    }

    #[test]
    fn test_origin_strings() {
        assert_eq!(DataOrigin::Remote.to_string(), "remote");
        assert_eq!(DataOrigin::LocalFallback.to_string(), "local-fallback");
    }
}
