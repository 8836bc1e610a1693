//! UI rendering for the chemical safety dashboard.
//!
//! Screen structure:
//! - Header with menu toggle, title and key hints
//! - Sidebar with the navigation sections (hidden when closed)
//! - Content area for the active section
//! - Report modal on top when open
//!
//! ## Responsive Layout System
//!
//! Sizing decisions go through [`LayoutContext`]:
//!
//! - `metric_columns()` - Cards per row for the metrics grid
//! - `should_stack_panels()` - Stack the two side-by-side charts vertically
//! - `should_show_manufacturer()` - Drop the widest optional table column
//!
//! Chart panels additionally cache their measured size until the resize
//! coordinator tells them to re-measure.

pub mod charts;
mod header;
mod inventory;
mod layout;
mod metrics;
mod regulations;
mod report;
mod sidebar;
mod states;
mod theme;

pub use header::{HeaderInfo, TITLE};
pub use layout::{breakpoints, AppLayout, LayoutContext, SizeCategory, HEADER_HEIGHT, SIDEBAR_WIDTH};
pub use metrics::{metric_cards, MetricCard};
pub use report::report_lines;
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, ChartPanels, NavSection};
use crate::models::DashboardRecord;
use crate::traits::Clock;

const CHART_HEIGHT: u16 = 12;
const TABLE_MIN_HEIGHT: u16 = 8;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole screen and record hit areas for mouse handling.
pub fn render<C: Clock>(frame: &mut Frame, app: &mut App<C>) {
    let area = frame.area();
    let layout = AppLayout::compute(area, app.sidebar.is_open(), app.sidebar.is_desktop());
    let snapshot = app.snapshot();

    let menu_toggle = header::render_header(
        frame,
        layout.header,
        HeaderInfo {
            section: app.section.title(),
            data_source: snapshot.data_source,
            show_data_source: app.config.show_data_source,
        },
    );

    render_content(frame, layout.content, app);

    if let Some(sidebar_area) = layout.sidebar {
        sidebar::render_sidebar(frame, sidebar_area, app.section);
    }

    if app.report_open {
        report::render_report_modal(frame, area, &snapshot, app.tick_count, &mut app.report_scroll);
    }

    app.hit_areas.menu_toggle = Some(menu_toggle);
    app.hit_areas.sidebar = layout.sidebar;
}

fn render_content<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>) {
    if !app.section.has_view() {
        states::render_placeholder(frame, area, app.section.title());
        return;
    }

    let snapshot = app.snapshot();
    if snapshot.loading {
        states::render_loading(frame, area, app.tick_count, "Loading dashboard data...");
        return;
    }
    let Some(record) = snapshot.data.as_deref() else {
        let message = snapshot.error.as_deref().unwrap_or("No data available");
        states::render_error(frame, area, message);
        return;
    };

    match app.section {
        NavSection::Home => render_home(frame, area, app, record),
        NavSection::ChemicalInventory => inventory::render_inventory(frame, area, record, &app.search),
        NavSection::Reports => render_reports(frame, area, &app.charts, record),
        _ => states::render_placeholder(frame, area, app.section.title()),
    }
}

fn render_home<C: Clock>(frame: &mut Frame, area: Rect, app: &App<C>, record: &DashboardRecord) {
    let ctx = LayoutContext::from_rect(area);
    let [metrics_area, monthly_area, pair_area, table_area] = Layout::vertical([
        Constraint::Length(metrics::metrics_height(&ctx)),
        Constraint::Length(CHART_HEIGHT),
        Constraint::Length(pair_height(&ctx)),
        Constraint::Min(TABLE_MIN_HEIGHT),
    ])
    .areas(area);

    metrics::render_metrics(frame, metrics_area, &record.dashboard_metrics);
    charts::render_monthly_usage(frame, monthly_area, &app.charts.monthly, record);
    render_chart_pair(frame, pair_area, &app.charts, record);
    inventory::render_inventory(frame, table_area, record, &app.search);
}

fn render_reports(frame: &mut Frame, area: Rect, panels: &ChartPanels, record: &DashboardRecord) {
    let ctx = LayoutContext::from_rect(area);
    let [monthly_area, pair_area, regulations_area] = Layout::vertical([
        Constraint::Length(CHART_HEIGHT),
        Constraint::Length(pair_height(&ctx)),
        Constraint::Min(0),
    ])
    .areas(area);

    charts::render_monthly_usage(frame, monthly_area, &panels.monthly, record);
    render_chart_pair(frame, pair_area, panels, record);
    regulations::render_regulations(frame, regulations_area, &record.regulations);
}

fn pair_height(ctx: &LayoutContext) -> u16 {
    if ctx.should_stack_panels() {
        CHART_HEIGHT * 2
    } else {
        CHART_HEIGHT
    }
}

/// Hazard and compliance charts side by side, stacked when narrow.
fn render_chart_pair(frame: &mut Frame, area: Rect, panels: &ChartPanels, record: &DashboardRecord) {
    let [first, second] = if LayoutContext::from_rect(area).should_stack_panels() {
        Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area)
    } else {
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(area)
    };
    charts::render_hazard_distribution(frame, first, &panels.hazards, record);
    charts::render_compliance_tracking(frame, second, &panels.compliance, record);
}
