//! Input and message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::{App, AppMessage, NavSection};
use crate::resize::ResizeSource;
use crate::traits::Clock;

impl<C: Clock> App<C> {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::DataLoaded(state) => {
                tracing::debug!(status = ?state.status(), origin = ?state.origin(), "Data delivered to app");
                self.fetch_state = state;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('b') => self.toggle_sidebar(),
                _ => {}
            }
            return;
        }

        if self.search.focused {
            self.handle_search_key(key.code);
            return;
        }

        if self.report_open {
            self.handle_report_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('m') => self.toggle_sidebar(),
            KeyCode::Char('r') => self.open_report(),
            KeyCode::Char('/') => {
                if !matches!(
                    self.section,
                    NavSection::Home | NavSection::ChemicalInventory
                ) {
                    self.select_section(NavSection::ChemicalInventory);
                }
                self.search.focus();
                self.mark_dirty();
            }
            KeyCode::Esc => {
                if self.search.clear() {
                    self.mark_dirty();
                }
            }
            KeyCode::Up => self.select_section(self.section.prev()),
            KeyCode::Down | KeyCode::Tab => self.select_section(self.section.next()),
            KeyCode::BackTab => self.select_section(self.section.prev()),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.search.clear();
            }
            KeyCode::Enter => self.search.blur(),
            KeyCode::Backspace => self.search.pop(),
            KeyCode::Char(c) => self.search.push(c),
            _ => return,
        }
        self.mark_dirty();
    }

    fn handle_report_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('r') => self.close_report(),
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                self.report_scroll = self.report_scroll.saturating_sub(1);
                self.mark_dirty();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.report_scroll = self.report_scroll.saturating_add(1);
                self.mark_dirty();
            }
            KeyCode::PageUp => {
                self.report_scroll = self.report_scroll.saturating_sub(10);
                self.mark_dirty();
            }
            KeyCode::PageDown => {
                self.report_scroll = self.report_scroll.saturating_add(10);
                self.mark_dirty();
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);

        if contains(self.hit_areas.menu_toggle, pos) {
            self.toggle_sidebar();
            return;
        }

        if let Some(sidebar) = self.hit_areas.sidebar.filter(|area| area.contains(pos)) {
            // One nav entry per row, below the top border.
            if pos.y > sidebar.y {
                let row = (pos.y - sidebar.y - 1) as usize;
                if let Some(section) = NavSection::from_index(row) {
                    self.select_section(section);
                }
            }
            return;
        }

        if self.sidebar.on_click_outside() {
            self.resize.on_trigger(ResizeSource::Sidebar);
            self.mark_dirty();
        }
    }
}

fn contains(area: Option<Rect>, pos: Position) -> bool {
    area.is_some_and(|a| a.contains(pos))
}
