//! Data store: fetch the dashboard record once, falling back to a local
//! snapshot when the remote endpoint fails.
//!
//! ```text
//!  Idle ──load()──▶ Loading ──remote ok──────────────▶ Succeeded(remote)
//!                      │
//!                      └──remote err──▶ fallback ok ──▶ Succeeded(local-fallback)
//!                                          │
//!                                          └─ err ─────▶ Failed
//! ```
//!
//! The first `load()` drives the fetch; every other caller, concurrent or
//! later, awaits the same memoized outcome.

mod fetch_state;

pub use fetch_state::{DashboardSnapshot, DataOrigin, FetchState, FetchStatus};

use std::sync::Arc;

use tokio::sync::{mpsc, watch, OnceCell};
use tokio::task::JoinHandle;

use crate::adapters::{EmbeddedFallback, FileFallback, ReqwestHttpClient};
use crate::app::AppMessage;
use crate::error::{LoadError, LoadResult, NetworkError};
use crate::models::{DashboardRecord, Envelope};
use crate::startup::DashboardConfig;
use crate::traits::{FallbackSource, Headers, HttpClient};

/// Holds the single dashboard load for a session.
pub struct DataStore {
    endpoint: String,
    http: Arc<dyn HttpClient>,
    fallback: Arc<dyn FallbackSource>,
    outcome: OnceCell<FetchState>,
    state_tx: watch::Sender<FetchState>,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("endpoint", &self.endpoint)
            .field("fallback", &self.fallback.describe())
            .field("state", &*self.state_tx.borrow())
            .finish()
    }
}

impl DataStore {
    pub fn new(
        endpoint: impl Into<String>,
        http: Arc<dyn HttpClient>,
        fallback: Arc<dyn FallbackSource>,
    ) -> Self {
        let (state_tx, _) = watch::channel(FetchState::Idle);
        Self {
            endpoint: endpoint.into(),
            http,
            fallback,
            outcome: OnceCell::new(),
            state_tx,
        }
    }

    /// Production wiring: reqwest transport plus the configured fallback.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let fallback: Arc<dyn FallbackSource> = match &config.fallback_path {
            Some(path) => Arc::new(FileFallback::new(path)),
            None => Arc::new(EmbeddedFallback::bundled()),
        };
        Self::new(
            config.api_endpoint.clone(),
            Arc::new(ReqwestHttpClient::new()),
            fallback,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Load the dashboard record, at most once per store.
    ///
    /// Never returns an error: failures are folded into
    /// [`FetchState::Failed`].
    pub async fn load(&self) -> FetchState {
        self.outcome
            .get_or_init(|| self.run_load())
            .await
            .clone()
    }

    /// Current state without waiting.
    pub fn snapshot(&self) -> FetchState {
        self.state_tx.borrow().clone()
    }

    /// Current state in the shape views consume.
    pub fn read_model(&self) -> DashboardSnapshot {
        DashboardSnapshot::from(&*self.state_tx.borrow())
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state_tx.subscribe()
    }

    async fn run_load(&self) -> FetchState {
        self.publish(FetchState::Loading);
        tracing::debug!("Loading dashboard data from {}", self.endpoint);

        let state = match self.fetch_remote().await {
            Ok(record) => {
                tracing::info!(
                    "Loaded dashboard data from remote ({} chemicals)",
                    record.chemicals.len()
                );
                FetchState::Succeeded {
                    payload: Arc::new(record),
                    origin: DataOrigin::Remote,
                }
            }
            Err(remote_err) => {
                tracing::warn!(
                    code = remote_err.error_code(),
                    "Remote fetch failed, using {}: {}",
                    self.fallback.describe(),
                    remote_err
                );
                self.recover(remote_err).await
            }
        };

        self.publish(state.clone());
        state
    }

    async fn recover(&self, remote_err: LoadError) -> FetchState {
        match self.fetch_fallback().await {
            Ok(record) => {
                tracing::info!(
                    "Loaded dashboard data from {} ({} chemicals)",
                    self.fallback.describe(),
                    record.chemicals.len()
                );
                FetchState::Succeeded {
                    payload: Arc::new(record),
                    origin: DataOrigin::LocalFallback,
                }
            }
            Err(fallback_err) => {
                tracing::error!(
                    code = fallback_err.error_code(),
                    "Both data sources failed: {}; {}",
                    remote_err,
                    fallback_err
                );
                FetchState::Failed {
                    error_message: format!(
                        "{} {}",
                        remote_err.user_message(),
                        fallback_err.user_message()
                    ),
                }
            }
        }
    }

    async fn fetch_remote(&self) -> LoadResult<DashboardRecord> {
        let response = self
            .http
            .get(&self.endpoint, &Headers::new())
            .await
            .map_err(|e| NetworkError::from_http_error(e, &self.endpoint))?;

        if !response.is_success() {
            let body = String::from_utf8_lossy(&response.body);
            return Err(NetworkError::from_status(response.status, &body).into());
        }

        parse_envelope(&response.body, "remote endpoint")
    }

    async fn fetch_fallback(&self) -> LoadResult<DashboardRecord> {
        let location = self.fallback.describe();
        let bytes = self.fallback.read().await?;
        parse_envelope(&bytes, &location).map_err(|e| e.into_fallback_unavailable(&location))
    }

    fn publish(&self, state: FetchState) {
        tracing::trace!("Fetch state -> {:?}", state.status());
        self.state_tx.send_replace(state);
    }
}

/// Decode a `{"record": {...}}` envelope.
pub fn parse_envelope(bytes: &[u8], origin: &str) -> LoadResult<DashboardRecord> {
    serde_json::from_slice::<Envelope>(bytes)
        .map(|envelope| envelope.record)
        .map_err(|e| LoadError::parse(origin, &e))
}

/// Run the load on the runtime and report the outcome to the app.
///
/// If the app has gone away the send fails and the outcome is dropped.
pub fn spawn_load(
    store: Arc<DataStore>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let state = store.load().await;
        if message_tx.send(AppMessage::DataLoaded(state)).is_err() {
            tracing::debug!("App closed before data arrived; discarding load result");
        }
    })
}
