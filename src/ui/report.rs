//! Report modal drawn over the dashboard.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::states::{render_error, render_loading};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER};
use crate::report::{ComplianceReport, REPORT_TITLE, SECTIONS};
use crate::store::DashboardSnapshot;

/// Modal area: 90% of the frame, centered.
pub fn modal_area(area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(5),
        Constraint::Percentage(90),
        Constraint::Percentage(5),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(5),
        Constraint::Percentage(90),
        Constraint::Percentage(5),
    ])
    .areas(middle);
    center
}

/// Styled report body, one entry per printed line.
pub fn report_lines(report: &ComplianceReport) -> Vec<Line<'static>> {
    report
        .to_plain_text()
        .lines()
        .skip(2) // title and underline live in the block title
        .map(|line| {
            if SECTIONS.iter().any(|title| *title == line) {
                Line::from(line.to_string().bold().fg(COLOR_ACCENT))
            } else if !line.is_empty() && line.chars().all(|c| c == '-') {
                Line::from(line.to_string().fg(COLOR_DIM))
            } else {
                Line::from(line.to_string())
            }
        })
        .collect()
}

/// Draw the modal. `scroll` is clamped to the content height.
pub fn render_report_modal(
    frame: &mut Frame,
    area: Rect,
    snapshot: &DashboardSnapshot,
    tick: u64,
    scroll: &mut u16,
) {
    let modal = modal_area(area);
    frame.render_widget(Clear, modal);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Line::from(format!(" {} ", REPORT_TITLE).bold().fg(COLOR_HEADER)))
        .title_bottom(Line::from(" [Esc] Close Report  [↑/↓] Scroll ".fg(COLOR_DIM)));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    if snapshot.loading {
        render_loading(frame, inner, tick, "Generating comprehensive report...");
        return;
    }
    let Some(record) = snapshot.data.as_ref() else {
        let message = snapshot.error.as_deref().unwrap_or("No data available");
        render_error(frame, inner, &format!("Error generating report: {}", message));
        return;
    };

    let lines = report_lines(&ComplianceReport::from_record(record));
    *scroll = (*scroll).min(max_scroll(lines.len(), inner.height));

    frame.render_widget(Paragraph::new(lines).scroll((*scroll, 0)), inner);
}

fn max_scroll(line_count: usize, height: u16) -> u16 {
    u16::try_from(line_count)
        .unwrap_or(u16::MAX)
        .saturating_sub(height)
}
