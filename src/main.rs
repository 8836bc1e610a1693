use chemdash::app::App;
use chemdash::report::ComplianceReport;
use chemdash::startup::{parse_launch_mode, DashboardConfig, LaunchMode};
use chemdash::store::{DataStore, FetchState};
use chemdash::terminal::{setup_panic_hook, TerminalManager};
use chemdash::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Spinner frame rate while data is loading.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let mode = parse_launch_mode(std::env::args().skip(1));
    if mode == LaunchMode::Version {
        println!("chemdash {}", VERSION);
        return Ok(());
    }

    color_eyre::install()?;

    let config = DashboardConfig::from_env();
    if let Err(e) = logging::init(&config.log_filter) {
        // Logging is optional; keep going without it.
        if mode == LaunchMode::Report {
            eprintln!("Warning: {}", e);
        }
    }
    tracing::info!(endpoint = %config.api_endpoint, ?mode, "Starting chemdash");

    let runtime = tokio::runtime::Runtime::new()?;
    let store = Arc::new(DataStore::from_config(&config));

    if mode == LaunchMode::Report {
        let code = print_report(&runtime, &store);
        std::process::exit(code);
    }

    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;

    let result = runtime.block_on(async {
        let mut app = App::new(config, store, size.width, size.height);
        let _load = app.start_loading();
        run_app(manager.terminal(), &mut app).await
    });

    manager.restore()?;
    result
}

/// Load once and print the plain-text report. Returns the process exit code.
fn print_report(runtime: &tokio::runtime::Runtime, store: &DataStore) -> i32 {
    match runtime.block_on(store.load()) {
        FetchState::Succeeded { payload, origin } => {
            tracing::info!(%origin, "Printing report");
            print!("{}", ComplianceReport::from_record(&payload).to_plain_text());
            0
        }
        other => {
            let message = other
                .error_message()
                .unwrap_or("Data did not finish loading")
                .to_string();
            eprintln!("Error generating report: {}", message);
            1
        }
    }
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // Owned here so the select below can borrow it alongside `app`.
    let mut message_rx = app.message_rx.take();

    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        let deadline = app.resize.next_deadline();

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            _ = wait_until(deadline) => {
                app.poll_resize();
            }

            Some(msg) = recv_message(&mut message_rx) => app.handle_message(msg),

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                Some(Ok(Event::Resize(width, height))) => {
                    app.update_terminal_dimensions(width, height);
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },
        }
    }
}

/// Sleep until the resize deadline, or forever when nothing is pending.
async fn wait_until(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}

async fn recv_message<T>(rx: &mut Option<mpsc::UnboundedReceiver<T>>) -> Option<T> {
    match rx {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
