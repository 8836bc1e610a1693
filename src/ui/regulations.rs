//! Regulatory standards by region.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::models::{format_audit_date, Regulation};
use crate::report::SECTION_REGULATIONS;

pub fn regulation_lines(regulations: &[Regulation]) -> Vec<Line<'static>> {
    if regulations.is_empty() {
        return vec![Line::from("No regulations on record".fg(COLOR_DIM))];
    }

    let mut lines = Vec::with_capacity(regulations.len() * 3);
    for regulation in regulations {
        lines.push(Line::from(regulation.region.clone().bold().fg(COLOR_HEADER)));
        let mut standards: Vec<Span> = Vec::new();
        for (i, standard) in regulation.standards.iter().enumerate() {
            if i > 0 {
                standards.push(Span::raw(" "));
            }
            standards.push(format!("[{}]", standard).fg(COLOR_ACCENT));
        }
        lines.push(Line::from(standards));
        lines.push(Line::from(
            format!("Updated: {}", format_audit_date(&regulation.last_updated)).fg(COLOR_DIM),
        ));
    }
    lines
}

pub fn render_regulations(frame: &mut Frame, area: Rect, regulations: &[Regulation]) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(format!(" {} ", SECTION_REGULATIONS));
    frame.render_widget(
        Paragraph::new(regulation_lines(regulations))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
