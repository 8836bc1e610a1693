//! Chemicals table with the search filter.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use super::layout::LayoutContext;
use super::theme::{hazard_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_NEGATIVE, COLOR_POSITIVE};
use crate::app::SearchState;
use crate::models::{Chemical, DashboardRecord, SdsStatus};

pub fn render_inventory(frame: &mut Frame, area: Rect, record: &DashboardRecord, search: &SearchState) {
    let matches: Vec<&Chemical> = record.filter_chemicals(&search.query).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Chemical Inventory ")
        .title_bottom(Line::from(format!(
            " {} of {} chemicals ",
            matches.len(),
            record.chemicals.len()
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [search_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(search_line(search), search_area);

    if matches.is_empty() {
        let message = if record.chemicals.is_empty() {
            "No chemicals in inventory".to_string()
        } else {
            format!("No chemicals match \"{}\"", search.query)
        };
        frame.render_widget(Paragraph::new(message.fg(COLOR_DIM)), table_area);
        return;
    }

    let wide = LayoutContext::from_rect(area).should_show_manufacturer();
    let mut header = vec!["Product Name", "CAS Number"];
    if wide {
        header.push("Manufacturer");
    }
    header.extend(["Stock", "Hazard", "SDS"]);

    let rows = matches.iter().map(|chemical| chemical_row(chemical, wide));
    let widths = if wide {
        vec![
            Constraint::Fill(3),
            Constraint::Length(11),
            Constraint::Fill(2),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(8),
        ]
    } else {
        vec![
            Constraint::Fill(1),
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(10),
            Constraint::Length(8),
        ]
    };

    let table = Table::new(rows, widths).header(
        Row::new(header).style(Style::default().add_modifier(Modifier::BOLD).fg(COLOR_ACCENT)),
    );
    frame.render_widget(table, table_area);
}

fn search_line(search: &SearchState) -> Paragraph<'static> {
    let mut spans = vec![Span::from(" / ").fg(COLOR_DIM)];
    if search.query.is_empty() && !search.focused {
        spans.push("Search chemicals...".fg(COLOR_DIM));
    } else {
        spans.push(Span::from(search.query.clone()));
    }
    if search.focused {
        spans.push("▏".fg(COLOR_ACCENT));
    }
    Paragraph::new(Line::from(spans))
}

fn chemical_row(chemical: &Chemical, wide: bool) -> Row<'static> {
    let hazard = chemical.primary_hazard();
    let sds_color = match chemical.sds_info.status {
        SdsStatus::Active => COLOR_POSITIVE,
        SdsStatus::Inactive => COLOR_NEGATIVE,
    };

    let mut cells = vec![
        Cell::from(chemical.product_name.clone()),
        Cell::from(chemical.cas_number.clone()),
    ];
    if wide {
        cells.push(Cell::from(chemical.manufacturer.clone()));
    }
    cells.push(Cell::from(chemical.stock_label()));
    cells.push(Cell::from(hazard.as_str()).style(Style::default().fg(hazard_color(hazard))));
    cells.push(Cell::from(chemical.sds_info.status.label()).style(Style::default().fg(sds_color)));
    Row::new(cells)
}
