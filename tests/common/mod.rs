//! Common fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{TestAppBuilder, TEST_ENDPOINT};
//!
//! let (app, clock) = TestAppBuilder::new().width(140).build();
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use chemdash::adapters::{EmbeddedFallback, BUNDLED_SNAPSHOT};
use chemdash::app::App;
use chemdash::models::DashboardRecord;
use chemdash::resize::ResizeCoordinator;
use chemdash::startup::DashboardConfig;
use chemdash::store::{parse_envelope, DataStore};
use chemdash::traits::FallbackSource;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_ENDPOINT: &str = "https://data.example.test/v3/b/chemicals";

pub const DEBOUNCE: Duration = Duration::from_millis(100);

/// The bundled snapshot as a raw envelope string.
pub fn sample_envelope() -> &'static str {
    BUNDLED_SNAPSHOT
}

pub fn sample_record() -> DashboardRecord {
    parse_envelope(BUNDLED_SNAPSHOT.as_bytes(), "test fixture").expect("fixture parses")
}

/// A store answering `TEST_ENDPOINT` from `http`, with the bundled fallback.
pub fn store_with(http: MockHttpClient) -> Arc<DataStore> {
    store_with_fallback(http, EmbeddedFallback::bundled())
}

pub fn store_with_fallback<F: FallbackSource + 'static>(
    http: MockHttpClient,
    fallback: F,
) -> Arc<DataStore> {
    Arc::new(DataStore::new(TEST_ENDPOINT, Arc::new(http), Arc::new(fallback)))
}

/// Builder for an [`App`] driven by a [`ManualClock`].
pub struct TestAppBuilder {
    width: u16,
    height: u16,
    http: Option<MockHttpClient>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            width: 140,
            height: 50,
            http: None,
        }
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn http(mut self, http: MockHttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the app and hand back the clock that drives its coordinator.
    pub fn build(self) -> (App<ManualClock>, ManualClock) {
        let http = self.http.unwrap_or_else(|| {
            MockHttpConfig::new()
                .with_json_response(TEST_ENDPOINT, 200, sample_envelope())
                .build()
        });
        let clock = ManualClock::new();
        let coordinator = ResizeCoordinator::with_clock(clock.clone(), DEBOUNCE, DEBOUNCE);
        let app = App::with_coordinator(
            DashboardConfig::default(),
            store_with(http),
            coordinator,
            self.width,
            self.height,
        );
        (app, clock)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
