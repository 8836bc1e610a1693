//! Chart panels: monthly usage, hazard distribution, compliance by region.
//!
//! Each panel caches the size it measured on first draw and keeps drawing at
//! that size until a resize signal invalidates it. Until then the cached size
//! is clipped to whatever area the frame offers.

use std::sync::Mutex;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph},
    Frame,
};

use super::theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_INCIDENTS, COLOR_NEGATIVE, COLOR_POSITIVE, COLOR_USAGE,
    SERIES_COLORS,
};
use crate::models::{format_quantity, DashboardRecord};
use crate::report::{SECTION_COMPLIANCE, SECTION_HAZARDS, SECTION_MONTHLY};
use crate::traits::Resizable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    MonthlyUsage,
    HazardDistribution,
    ComplianceTracking,
}

impl ChartKind {
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::MonthlyUsage => SECTION_MONTHLY,
            ChartKind::HazardDistribution => SECTION_HAZARDS,
            ChartKind::ComplianceTracking => SECTION_COMPLIANCE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartPanel {
    kind: ChartKind,
    /// Measured (width, height); `None` until the next draw re-measures
    measured: Option<(u16, u16)>,
    measure_count: u64,
}

impl ChartPanel {
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            measured: None,
            measure_count: 0,
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn is_measured(&self) -> bool {
        self.measured.is_some()
    }

    pub fn measured_size(&self) -> Option<(u16, u16)> {
        self.measured
    }

    /// How many times the panel has measured itself.
    pub fn measure_count(&self) -> u64 {
        self.measure_count
    }

    /// Area to draw into for this frame.
    pub fn layout(&mut self, offered: Rect) -> Rect {
        let (width, height) = match self.measured {
            Some(size) => size,
            None => {
                let size = (offered.width, offered.height);
                self.measured = Some(size);
                self.measure_count += 1;
                size
            }
        };
        Rect {
            x: offered.x,
            y: offered.y,
            width: width.min(offered.width),
            height: height.min(offered.height),
        }
    }
}

impl Resizable for ChartPanel {
    fn resize(&mut self) {
        self.measured = None;
    }
}

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", title))
}

/// Draw the panel frame and return the area the chart body may use.
fn chart_area(frame: &mut Frame, area: Rect, panel: &Mutex<ChartPanel>) -> Rect {
    let mut panel = panel.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let block = panel_block(panel.kind().title());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    panel.layout(inner)
}

fn render_empty(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from("No data available").fg(COLOR_DIM)),
        area,
    );
}

pub fn render_monthly_usage(
    frame: &mut Frame,
    area: Rect,
    panel: &Mutex<ChartPanel>,
    record: &DashboardRecord,
) {
    let target = chart_area(frame, area, panel);
    let usage = &record.reports.monthly_usage;
    if usage.is_empty() || target.height < 3 {
        render_empty(frame, target);
        return;
    }

    let groups: Vec<BarGroup> = usage
        .iter()
        .map(|month| {
            BarGroup::default()
                .label(Line::from(month.month.clone()))
                .bars(&[
                    Bar::default()
                        .value(month.total_usage.round().max(0.0) as u64)
                        .text_value(format_quantity(month.total_usage))
                        .style(Style::default().fg(COLOR_USAGE)),
                    Bar::default()
                        .value(month.incident_count as u64)
                        .style(Style::default().fg(COLOR_INCIDENTS)),
                ])
        })
        .collect();

    let bar_width = grouped_bar_width(target.width, usage.len());

    let [legend, chart] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(target);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            "■ Usage ".fg(COLOR_USAGE),
            "■ Incidents".fg(COLOR_INCIDENTS),
        ])),
        legend,
    );

    let mut bar_chart = BarChart::default().bar_width(bar_width).bar_gap(0).group_gap(1);
    for group in groups {
        bar_chart = bar_chart.data(group);
    }
    frame.render_widget(bar_chart, chart);
}

/// Two bars per group plus a gap; fit the widest bars that still fit.
fn grouped_bar_width(width: u16, groups: usize) -> u16 {
    let groups = u16::try_from(groups).unwrap_or(u16::MAX).max(1);
    ((width / groups).saturating_sub(2) / 2).clamp(1, 6)
}

pub fn render_hazard_distribution(
    frame: &mut Frame,
    area: Rect,
    panel: &Mutex<ChartPanel>,
    record: &DashboardRecord,
) {
    let target = chart_area(frame, area, panel);
    let distribution = &record.reports.hazard_distribution;
    if distribution.is_empty() {
        render_empty(frame, target);
        return;
    }

    let bars: Vec<Bar> = distribution
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            Bar::default()
                .label(Line::from(entry.category.clone()))
                .value(entry.count as u64)
                .text_value(format!("{} ({:.0}%)", entry.count, record.hazard_share(entry)))
                .style(Style::default().fg(SERIES_COLORS[i % SERIES_COLORS.len()]))
        })
        .collect();

    frame.render_widget(
        BarChart::default()
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .data(BarGroup::default().bars(&bars)),
        target,
    );
}

pub fn render_compliance_tracking(
    frame: &mut Frame,
    area: Rect,
    panel: &Mutex<ChartPanel>,
    record: &DashboardRecord,
) {
    let target = chart_area(frame, area, panel);
    let regions = &record.reports.compliance_tracking;
    if regions.is_empty() {
        render_empty(frame, target);
        return;
    }

    let rows = Layout::vertical(regions.iter().map(|_| Constraint::Length(2))).split(target);
    for (region, row) in regions.iter().zip(rows.iter()) {
        if row.height == 0 {
            break;
        }
        let [label, gauge] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(*row);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                region.region.clone().into(),
                format!("  {} / {}", region.compliant, region.total()).fg(COLOR_DIM),
            ])),
            label,
        );
        let ratio = region.compliant_percent() / 100.0;
        frame.render_widget(
            Gauge::default()
                .ratio(ratio.clamp(0.0, 1.0))
                .label(format!("{:.1}%", region.compliant_percent()))
                .gauge_style(Style::default().fg(COLOR_POSITIVE).bg(COLOR_NEGATIVE)),
            gauge,
        );
    }
}
