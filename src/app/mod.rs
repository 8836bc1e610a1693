//! Application state for the dashboard TUI.
//!
//! `App` owns the sidebar store, the resize coordinator and the chart panels,
//! and holds the latest [`FetchState`] delivered by the data store. Event
//! handling lives in [`handlers`]; rendering reads `App` from [`crate::ui`].

mod handlers;
mod messages;
mod types;

pub use messages::AppMessage;
pub use types::{NavSection, SearchState};

use std::sync::{Arc, Mutex};

use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::adapters::SystemClock;
use crate::resize::{ResizeCoordinator, ResizeSource, Subscription};
use crate::sidebar::{SidebarAction, SidebarStore};
use crate::startup::DashboardConfig;
use crate::store::{spawn_load, DashboardSnapshot, DataStore, FetchState};
use crate::traits::Clock;
use crate::ui::charts::{ChartKind, ChartPanel};

/// The three chart panels, shared with the resize coordinator.
#[derive(Debug, Clone)]
pub struct ChartPanels {
    pub monthly: Arc<Mutex<ChartPanel>>,
    pub hazards: Arc<Mutex<ChartPanel>>,
    pub compliance: Arc<Mutex<ChartPanel>>,
}

impl ChartPanels {
    fn new() -> Self {
        Self {
            monthly: Arc::new(Mutex::new(ChartPanel::new(ChartKind::MonthlyUsage))),
            hazards: Arc::new(Mutex::new(ChartPanel::new(ChartKind::HazardDistribution))),
            compliance: Arc::new(Mutex::new(ChartPanel::new(ChartKind::ComplianceTracking))),
        }
    }

    pub fn all(&self) -> [&Arc<Mutex<ChartPanel>>; 3] {
        [&self.monthly, &self.hazards, &self.compliance]
    }

    /// Total re-measurements across all panels.
    pub fn measure_count(&self) -> u64 {
        self.all()
            .iter()
            .filter_map(|panel| panel.lock().ok().map(|p| p.measure_count()))
            .sum()
    }
}

/// Screen regions recorded during the last render, used for mouse hit-testing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub sidebar: Option<Rect>,
    pub menu_toggle: Option<Rect>,
}

pub struct App<C: Clock = SystemClock> {
    pub config: DashboardConfig,
    store: Arc<DataStore>,
    /// Latest load state received from the store
    pub fetch_state: FetchState,
    pub sidebar: SidebarStore,
    pub resize: ResizeCoordinator<C>,
    pub charts: ChartPanels,
    // Dropped with the app, which unsubscribes the panels.
    chart_subscriptions: Vec<Subscription>,
    pub section: NavSection,
    pub search: SearchState,
    pub report_open: bool,
    pub report_scroll: u16,
    pub should_quit: bool,
    /// Dirty flag: set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Animation counter for the loading spinner
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    pub hit_areas: HitAreas,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App<SystemClock> {
    pub fn new(config: DashboardConfig, store: Arc<DataStore>, width: u16, height: u16) -> Self {
        let resize = ResizeCoordinator::new(config.resize_debounce, config.resize_rate_floor);
        Self::with_coordinator(config, store, resize, width, height)
    }
}

impl<C: Clock> App<C> {
    /// Build an app around an existing coordinator (tests inject a manual clock).
    pub fn with_coordinator(
        config: DashboardConfig,
        store: Arc<DataStore>,
        resize: ResizeCoordinator<C>,
        width: u16,
        height: u16,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let sidebar = SidebarStore::new(width, config.desktop_breakpoint);
        let charts = ChartPanels::new();
        let chart_subscriptions = charts
            .all()
            .into_iter()
            .map(|panel| resize.subscribe_resizable(Arc::clone(panel)))
            .collect();

        tracing::debug!(
            width,
            height,
            sidebar_open = sidebar.is_open(),
            "App created"
        );

        Self {
            config,
            store,
            fetch_state: FetchState::Idle,
            sidebar,
            resize,
            charts,
            chart_subscriptions,
            section: NavSection::default(),
            search: SearchState::default(),
            report_open: false,
            report_scroll: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: width,
            terminal_height: height,
            hit_areas: HitAreas::default(),
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Kick off the data load on the runtime. The outcome arrives as
    /// [`AppMessage::DataLoaded`].
    pub fn start_loading(&mut self) -> JoinHandle<()> {
        if matches!(self.fetch_state, FetchState::Idle) {
            self.fetch_state = FetchState::Loading;
            self.mark_dirty();
        }
        spawn_load(Arc::clone(&self.store), self.message_tx.clone())
    }

    pub fn store(&self) -> &Arc<DataStore> {
        &self.store
    }

    /// Read model for views.
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::from(&self.fetch_state)
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.fetch_state.is_pending() {
            self.mark_dirty();
        }
    }

    /// Fire a due resize signal. Called when the coordinator deadline passes.
    pub fn poll_resize(&mut self) -> bool {
        let fired = self.resize.poll();
        if fired {
            self.mark_dirty();
        }
        fired
    }

    pub fn chart_subscription_count(&self) -> usize {
        self.chart_subscriptions.len()
    }

    /// Run a sidebar action; a real transition also schedules a resize signal.
    pub fn dispatch_sidebar(&mut self, action: SidebarAction) -> bool {
        let changed = self.sidebar.dispatch(action);
        if changed {
            self.resize.on_trigger(ResizeSource::Sidebar);
            self.mark_dirty();
        }
        changed
    }

    pub fn toggle_sidebar(&mut self) {
        self.dispatch_sidebar(SidebarAction::Toggle);
    }

    pub fn open_report(&mut self) {
        if self.report_open {
            return;
        }
        self.report_open = true;
        self.report_scroll = 0;
        self.resize.on_trigger(ResizeSource::Container);
        self.mark_dirty();
    }

    pub fn close_report(&mut self) {
        if !self.report_open {
            return;
        }
        self.report_open = false;
        self.resize.on_trigger(ResizeSource::Container);
        self.mark_dirty();
    }

    pub fn select_section(&mut self, section: NavSection) {
        if self.section != section {
            tracing::debug!(section = section.title(), "Navigate");
            // Chart containers differ in size between sections
            if self.section.has_charts() || section.has_charts() {
                self.resize.on_trigger(ResizeSource::Container);
            }
            self.section = section;
            self.mark_dirty();
        }
    }

    /// Record a new terminal size and re-classify the viewport.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.resize.on_trigger(ResizeSource::Window);
        if self.sidebar.on_viewport_width(width) {
            self.resize.on_trigger(ResizeSource::Sidebar);
        }
        self.mark_dirty();
    }
}
