//! Headline metric cards.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_NEGATIVE, COLOR_POSITIVE};
use crate::models::{format_audit_date, format_quantity, DashboardMetrics};

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub subtext: &'static str,
    pub trend: &'static str,
    pub positive: bool,
}

/// Build the six cards in display order.
pub fn metric_cards(metrics: &DashboardMetrics) -> Vec<MetricCard> {
    vec![
        MetricCard {
            title: "Total Chemicals",
            value: metrics.total_chemicals.to_string(),
            subtext: "Active inventory items",
            trend: "+2 this month",
            positive: true,
        },
        MetricCard {
            title: "Active SDS Documents",
            value: metrics.active_sds_documents.to_string(),
            subtext: "Safety Data Sheets",
            trend: "All up to date",
            positive: true,
        },
        MetricCard {
            title: "Recent Incidents",
            value: metrics.recent_incidents.to_string(),
            subtext: "Last 30 days",
            trend: if metrics.recent_incidents > 0 {
                "Requires attention"
            } else {
                "No incidents"
            },
            positive: metrics.recent_incidents == 0,
        },
        MetricCard {
            title: "Compliance Score",
            value: format!("{}%", format_quantity(metrics.compliance_score)),
            subtext: "Regulatory compliance",
            trend: if metrics.compliance_score >= 90.0 {
                "Excellent"
            } else {
                "Needs improvement"
            },
            positive: metrics.compliance_score >= 90.0,
        },
        MetricCard {
            title: "Last Audit",
            value: format_audit_date(&metrics.last_audit_date),
            subtext: "Most recent audit date",
            trend: "Completed",
            positive: true,
        },
        MetricCard {
            title: "Next Audit",
            value: format_audit_date(&metrics.next_audit_date),
            subtext: "Upcoming audit date",
            trend: "Scheduled",
            positive: true,
        },
    ]
}

/// Rows needed to show every card at the given width.
pub fn metrics_height(ctx: &LayoutContext) -> u16 {
    let columns = ctx.metric_columns().max(1) as usize;
    let rows = 6usize.div_ceil(columns) as u16;
    rows * CARD_HEIGHT
}

pub fn render_metrics(frame: &mut Frame, area: Rect, metrics: &DashboardMetrics) {
    let cards = metric_cards(metrics);
    let columns = LayoutContext::from_rect(area).metric_columns().max(1) as usize;

    let row_count = cards.len().div_ceil(columns);
    let rows = Layout::vertical((0..row_count).map(|_| Constraint::Length(CARD_HEIGHT))).split(area);

    for (row_area, chunk) in rows.iter().zip(cards.chunks(columns)) {
        let cells = Layout::horizontal((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
            .split(*row_area);
        for (cell, card) in cells.iter().zip(chunk) {
            render_card(frame, *cell, card);
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &MetricCard) {
    let trend_color = if card.positive {
        COLOR_POSITIVE
    } else {
        COLOR_NEGATIVE
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", card.title));

    let lines = vec![
        Line::from(card.value.clone().bold().fg(COLOR_HEADER)),
        Line::from(card.subtext.fg(COLOR_DIM)),
        Line::from(card.trend.fg(trend_color)),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
