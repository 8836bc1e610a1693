//! Full flow through the app: mount, load, toggle, resize signal, render.

mod common;

use chemdash::app::{AppMessage, NavSection};
use chemdash::store::{DataOrigin, FetchState, FetchStatus};
use chemdash::ui;
use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_mount_load_toggle_signal() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 200, sample_envelope())
        .with_delay(Duration::from_millis(20))
        .build();
    let (mut app, clock) = TestAppBuilder::new().width(140).http(http).build();
    let mut rx = app.message_rx.take().unwrap();
    let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();

    // Mount: the first frame shows the loading state.
    assert!(app.snapshot().loading);
    let load = app.start_loading();
    assert_eq!(app.fetch_state.status(), FetchStatus::Loading);
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(buffer_text(&terminal).contains("Loading dashboard data"));

    // Load completes from the remote.
    let msg = rx.recv().await.unwrap();
    assert!(matches!(&msg, AppMessage::DataLoaded(state) if state.origin() == Some(DataOrigin::Remote)));
    app.handle_message(msg);
    load.await.unwrap();
    let snapshot = app.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(snapshot.data_source, Some(DataOrigin::Remote));

    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(buffer_text(&terminal).contains("Total Chemicals"));
    let measured = app.charts.measure_count();
    assert_eq!(measured, 3);

    // Toggle via the keyboard: one signal, only once the debounce elapses.
    let was_open = app.sidebar.is_open();
    app.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));
    assert_ne!(app.sidebar.is_open(), was_open);

    clock.advance(DEBOUNCE - Duration::from_millis(1));
    assert!(!app.poll_resize());
    assert_eq!(app.resize.emitted_count(), 0);

    clock.advance(Duration::from_millis(1));
    assert!(app.poll_resize());
    assert_eq!(app.resize.emitted_count(), 1);

    // The signal invalidated every panel; the next frame re-measures them.
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert_eq!(app.charts.measure_count(), measured + 3);

    clock.advance(DEBOUNCE * 3);
    assert!(!app.poll_resize());
    assert_eq!(app.resize.emitted_count(), 1);
}

#[tokio::test]
async fn test_offline_mount_renders_snapshot() {
    let http = MockHttpConfig::new()
        .with_connection_error(TEST_ENDPOINT, "network unreachable")
        .build();
    let (mut app, _clock) = TestAppBuilder::new().width(140).http(http).build();
    let mut rx = app.message_rx.take().unwrap();

    app.start_loading();
    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    assert_eq!(app.snapshot().data_source, Some(DataOrigin::LocalFallback));

    let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(buffer_text(&terminal).contains("Acetone"));
}

#[tokio::test]
async fn test_result_after_app_dropped_is_discarded() {
    let http = MockHttpConfig::new()
        .with_json_response(TEST_ENDPOINT, 200, sample_envelope())
        .with_delay(Duration::from_millis(20))
        .build();
    let (mut app, _clock) = TestAppBuilder::new().http(http).build();
    let store = std::sync::Arc::clone(app.store());
    let load = app.start_loading();
    drop(app);

    // The task finishes quietly and the store still holds the outcome.
    load.await.unwrap();
    assert_eq!(store.snapshot().origin(), Some(DataOrigin::Remote));
}

#[tokio::test]
async fn test_report_modal_after_load() {
    let (mut app, clock) = TestAppBuilder::new().width(120).build();
    let mut rx = app.message_rx.take().unwrap();
    app.start_loading();
    app.handle_message(rx.recv().await.unwrap());

    app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
    assert!(app.report_open);

    let mut terminal = Terminal::new(TestBackend::new(120, 60)).unwrap();
    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    assert!(buffer_text(&terminal).contains("Executive Summary"));

    app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
    assert!(!app.report_open);

    // Open and close coalesce into one container signal.
    clock.advance(DEBOUNCE);
    assert!(app.poll_resize());
    assert_eq!(app.resize.emitted_count(), 1);
}

#[test]
fn test_section_switch_remeasures_charts() {
    let (mut app, clock) = TestAppBuilder::new().width(140).height(30).build();
    app.fetch_state = FetchState::Succeeded {
        payload: Arc::new(sample_record()),
        origin: DataOrigin::Remote,
    };
    let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();

    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    let (_, home_height) = app.charts.monthly.lock().unwrap().measured_size().unwrap();

    app.select_section(NavSection::Reports);
    assert!(app.resize.has_pending());
    clock.advance(DEBOUNCE);
    assert!(app.poll_resize());

    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
    let (_, reports_height) = app.charts.monthly.lock().unwrap().measured_size().unwrap();
    assert!(
        reports_height > home_height,
        "monthly chart kept {home_height} rows on Reports"
    );
    assert_eq!(app.charts.measure_count(), 6);
}
