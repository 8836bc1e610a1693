//! Performance benchmarks for dashboard rendering
//!
//! Measures full-frame render time at common terminal sizes and the cost of
//! building the compliance report.
//! Run with: cargo bench

use chemdash::adapters::{EmbeddedFallback, MockHttpClient, BUNDLED_SNAPSHOT};
use chemdash::app::App;
use chemdash::models::DashboardRecord;
use chemdash::report::ComplianceReport;
use chemdash::startup::DashboardConfig;
use chemdash::store::{parse_envelope, DataOrigin, DataStore, FetchState};
use chemdash::ui;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;

fn sample_record() -> DashboardRecord {
    parse_envelope(BUNDLED_SNAPSHOT.as_bytes(), "bench").expect("bundled snapshot parses")
}

/// The bundled record with its chemical list repeated `factor` times.
fn scaled_record(factor: usize) -> DashboardRecord {
    let mut record = sample_record();
    let base = record.chemicals.clone();
    record.chemicals = (0..factor).flat_map(|_| base.iter().cloned()).collect();
    record
}

fn loaded_app(width: u16, height: u16, record: DashboardRecord) -> App {
    let store = Arc::new(DataStore::new(
        "http://bench.invalid",
        Arc::new(MockHttpClient::new()),
        Arc::new(EmbeddedFallback::bundled()),
    ));
    let mut app = App::new(DashboardConfig::default(), store, width, height);
    app.fetch_state = FetchState::Succeeded {
        payload: Arc::new(record),
        origin: DataOrigin::Remote,
    };
    app
}

/// Benchmark a full home-screen frame at several terminal sizes
fn bench_render_home(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_home");

    for (width, height) in [(80u16, 24u16), (120, 40), (200, 60)] {
        let mut app = loaded_app(width, height, sample_record());
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(width, height),
            |b, _| {
                b.iter(|| {
                    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the inventory table as the chemical list grows
fn bench_render_inventory(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_inventory");

    for factor in [1usize, 10, 100] {
        let mut app = loaded_app(160, 50, scaled_record(factor));
        app.select_section(chemdash::app::NavSection::ChemicalInventory);
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_chemicals", factor * 6)),
            &factor,
            |b, _| {
                b.iter(|| {
                    terminal.draw(|f| ui::render(f, &mut app)).unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark building and printing the compliance report
fn bench_report(c: &mut Criterion) {
    let record = scaled_record(50);
    c.bench_function("report_plain_text_300_chemicals", |b| {
        b.iter(|| {
            let report = ComplianceReport::from_record(black_box(&record));
            black_box(report.to_plain_text())
        });
    });
}

criterion_group!(benches, bench_render_home, bench_render_inventory, bench_report);
criterion_main!(benches);
