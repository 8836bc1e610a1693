//! Navigation sidebar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_TEXT};
use crate::app::NavSection;

pub fn render_sidebar(frame: &mut Frame, area: Rect, active: NavSection) {
    let items: Vec<ListItem> = NavSection::ALL
        .iter()
        .map(|section| {
            if *section == active {
                ListItem::new(Line::from(format!("▸ {}", section.title()))).style(
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ListItem::new(Line::from(format!("  {}", section.title())))
                    .style(Style::default().fg(COLOR_TEXT))
            }
        })
        .collect();

    // On mobile the sidebar sits on top of the content.
    frame.render_widget(Clear, area);
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        area,
    );
}
