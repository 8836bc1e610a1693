//! Loading, error and placeholder views.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_NEGATIVE};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

fn centered(area: Rect, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}

pub fn render_loading(frame: &mut Frame, area: Rect, tick: u64, message: &str) {
    let line = Line::from(vec![
        spinner_frame(tick).fg(COLOR_ACCENT),
        " ".into(),
        message.to_string().into(),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        centered(area, 1),
    );
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from("Error loading dashboard data".bold().fg(COLOR_NEGATIVE)),
        Line::from(""),
        Line::from(message.to_string()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered(area, 5),
    );
}

/// Sections without a dedicated view.
pub fn render_placeholder(frame: &mut Frame, area: Rect, title: &str) {
    let lines = vec![
        Line::from(title.to_string().bold()),
        Line::from("This section is not available yet.".fg(COLOR_DIM)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered(area, 2),
    );
}
