//! Integration tests for the data store: single-flight loading, the local
//! fallback, and the reqwest transport against a real HTTP server.

mod common;

use chemdash::adapters::{EmbeddedFallback, FileFallback, ReqwestHttpClient};
use chemdash::store::{DataOrigin, DataStore, FetchState, FetchStatus};
use common::*;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Mock transport
// =============================================================================

#[tokio::test]
async fn test_remote_success_is_remote_origin() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 200, sample_envelope())
        .build();
    let store = store_with(http.clone());

    let state = store.load().await;

    assert_eq!(state.status(), FetchStatus::Succeeded);
    assert_eq!(state.origin(), Some(DataOrigin::Remote));
    assert_eq!(state.payload().map(|r| r.chemicals.len()), Some(6));
    assert_eq!(http.request_count(), 1);
    assert_eq!(http.get_requests()[0].url, TEST_ENDPOINT);
}

#[tokio::test]
async fn test_server_error_uses_fallback() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 500, "internal error")
        .build();
    let store = store_with(http);

    let snapshot = {
        store.load().await;
        store.read_model()
    };

    assert!(!snapshot.loading);
    assert!(snapshot.error.is_none());
    assert_eq!(snapshot.data_source, Some(DataOrigin::LocalFallback));
    assert!(snapshot.data.is_some());
}

#[tokio::test]
async fn test_connection_error_uses_fallback() {
    let http = MockHttpConfig::new()
        .with_connection_error(TEST_ENDPOINT, "connection refused")
        .build();
    let state = store_with(http).load().await;
    assert_eq!(state.origin(), Some(DataOrigin::LocalFallback));
}

#[tokio::test]
async fn test_malformed_remote_json_falls_back() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 200, r#"{"record": {"chemicals": "#)
        .build();
    let state = store_with(http).load().await;
    assert_eq!(state.status(), FetchStatus::Succeeded);
    assert_eq!(state.origin(), Some(DataOrigin::LocalFallback));
}

#[tokio::test]
async fn test_missing_envelope_field_falls_back() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 200, r#"{"metadata": {}}"#)
        .build();
    let state = store_with(http).load().await;
    assert_eq!(state.origin(), Some(DataOrigin::LocalFallback));
}

#[tokio::test]
async fn test_both_sources_failing_is_failed() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 503, "unavailable")
        .build();
    let store = store_with_fallback(http, FileFallback::new("/nonexistent/chemdash/fallback.json"));

    let state = store.load().await;

    assert_eq!(state.status(), FetchStatus::Failed);
    assert!(state.payload().is_none());
    assert!(state.origin().is_none());
    let message = state.error_message().unwrap_or_default();
    assert!(!message.is_empty());

    let snapshot = store.read_model();
    assert!(!snapshot.loading);
    assert!(snapshot.data.is_none());
    assert_eq!(snapshot.error.as_deref(), Some(message));
}

#[tokio::test]
async fn test_malformed_fallback_is_failed() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 500, "")
        .build();
    let store = store_with_fallback(http, EmbeddedFallback::from_static("{ not json"));
    assert!(matches!(store.load().await, FetchState::Failed { .. }));
}

#[tokio::test]
async fn test_file_fallback_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(sample_envelope().as_bytes()).unwrap();

    let http = MockHttpConfig::new()
        .with_connection_error(TEST_ENDPOINT, "offline")
        .build();
    let store = store_with_fallback(http, FileFallback::new(file.path()));

    let state = store.load().await;
    assert_eq!(state.origin(), Some(DataOrigin::LocalFallback));
    assert_eq!(
        state.payload().map(|r| r.dashboard_metrics.total_chemicals),
        Some(sample_record().dashboard_metrics.total_chemicals)
    );
}

// =============================================================================
// Single flight
// =============================================================================

#[tokio::test]
async fn test_concurrent_loads_issue_one_request() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 200, sample_envelope())
        .with_delay(Duration::from_millis(50))
        .build();
    let store = store_with(http.clone());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.load().await })
        })
        .collect();

    for handle in handles {
        let state = handle.await.unwrap();
        assert_eq!(state.origin(), Some(DataOrigin::Remote));
    }
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn test_later_loads_reuse_outcome() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 500, "")
        .build();
    let store = store_with(http.clone());

    let first = store.load().await;
    let second = store.load().await;

    assert_eq!(first.origin(), second.origin());
    assert_eq!(http.request_count(), 1);
}

#[tokio::test]
async fn test_subscriber_sees_loading_then_settled() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 200, sample_envelope())
        .with_delay(Duration::from_millis(30))
        .build();
    let store = store_with(http);
    let mut rx = store.subscribe();
    assert_eq!(rx.borrow().status(), FetchStatus::Idle);

    let loader = {
        let store = Arc::clone(&store);
        tokio::spawn(async move { store.load().await })
    };

    rx.changed().await.unwrap();
    assert_eq!(rx.borrow_and_update().status(), FetchStatus::Loading);
    assert!(store.read_model().loading);

    let settled = rx.wait_for(|state| state.is_settled()).await.unwrap().status();
    assert_eq!(settled, FetchStatus::Succeeded);

    loader.await.unwrap();
    assert_eq!(store.snapshot().status(), FetchStatus::Succeeded);
    assert!(!store.read_model().loading);
}

// =============================================================================
// Real HTTP via wiremock
// =============================================================================

fn reqwest_store(url: String) -> DataStore {
    DataStore::new(
        url,
        Arc::new(ReqwestHttpClient::new()),
        Arc::new(EmbeddedFallback::bundled()),
    )
}

#[tokio::test]
async fn test_reqwest_remote_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/b/chemicals"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sample_envelope(), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = reqwest_store(format!("{}/v3/b/chemicals", server.uri()));
    let state = store.load().await;

    assert_eq!(state.origin(), Some(DataOrigin::Remote));
    assert_eq!(state.payload().map(|r| r.regulations.len()), Some(3));
}

#[tokio::test]
async fn test_reqwest_server_error_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/b/chemicals"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let store = reqwest_store(format!("{}/v3/b/chemicals", server.uri()));
    let state = store.load().await;

    assert_eq!(state.origin(), Some(DataOrigin::LocalFallback));
}

#[tokio::test]
async fn test_reqwest_unreachable_host_falls_back() {
    // Port 9 (discard) on localhost is closed in test environments.
    let store = reqwest_store("http://127.0.0.1:9/v3/b/chemicals".to_string());
    let state = store.load().await;
    assert_eq!(state.origin(), Some(DataOrigin::LocalFallback));
}
