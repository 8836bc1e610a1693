//! Header bar: menu toggle, title, report hint and the optional data source.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_POSITIVE, COLOR_WARNING};
use crate::store::DataOrigin;

pub const TITLE: &str = "Chemical Safety Dashboard";
const MENU_LABEL: &str = " ≡ Menu ";

/// What the header shows besides the title.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderInfo<'a> {
    pub section: &'a str,
    pub data_source: Option<DataOrigin>,
    pub show_data_source: bool,
}

/// Render the header and return the menu toggle's screen area.
pub fn render_header(frame: &mut Frame, area: Rect, info: HeaderInfo<'_>) -> Rect {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let toggle_width = MENU_LABEL.width() as u16;
    let [toggle, title, hints] = Layout::horizontal([
        Constraint::Length(toggle_width),
        Constraint::Min(0),
        Constraint::Length(hint_width(&info)),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(MENU_LABEL.bold().fg(COLOR_ACCENT))),
        toggle,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            " ".into(),
            TITLE.bold().fg(COLOR_HEADER),
            format!(" · {}", info.section).fg(COLOR_DIM),
        ])),
        title,
    );
    frame.render_widget(Paragraph::new(hint_line(&info)).alignment(Alignment::Right), hints);

    toggle
}

fn hint_spans(info: &HeaderInfo<'_>) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if info.show_data_source {
        if let Some(origin) = info.data_source {
            let color = match origin {
                DataOrigin::Remote => COLOR_POSITIVE,
                DataOrigin::LocalFallback => COLOR_WARNING,
            };
            spans.push(format!("● {} ", origin.label()).fg(color));
        }
    }
    spans.push("[r] Report ".fg(COLOR_DIM));
    spans.push("[q] Quit ".fg(COLOR_DIM));
    spans
}

fn hint_line(info: &HeaderInfo<'_>) -> Line<'static> {
    Line::from(hint_spans(info))
}

fn hint_width(info: &HeaderInfo<'_>) -> u16 {
    hint_spans(info)
        .iter()
        .map(|span| span.content.width())
        .sum::<usize>() as u16
}
