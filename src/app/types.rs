//! Type definitions for the application state.
//!
//! - [`NavSection`] - Which sidebar entry is active
//! - [`SearchState`] - Chemical table filter input

/// Sidebar navigation entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavSection {
    #[default]
    Home,
    ChemicalInventory,
    Reports,
    SdsDocuments,
    IncidentReports,
    Analytics,
    Training,
    UserManagement,
    SystemSettings,
}

impl NavSection {
    pub const ALL: [NavSection; 9] = [
        NavSection::Home,
        NavSection::ChemicalInventory,
        NavSection::Reports,
        NavSection::SdsDocuments,
        NavSection::IncidentReports,
        NavSection::Analytics,
        NavSection::Training,
        NavSection::UserManagement,
        NavSection::SystemSettings,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::ChemicalInventory => "Chemical Inventory",
            NavSection::Reports => "Reports",
            NavSection::SdsDocuments => "SDS Documents",
            NavSection::IncidentReports => "Incident Reports",
            NavSection::Analytics => "Analytics",
            NavSection::Training => "Training",
            NavSection::UserManagement => "User Management",
            NavSection::SystemSettings => "System Settings",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next entry, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous entry, wrapping around.
    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Sections with a dedicated content view.
    pub fn has_view(&self) -> bool {
        matches!(
            self,
            NavSection::Home | NavSection::ChemicalInventory | NavSection::Reports
        )
    }

    /// Sections whose content includes the chart panels.
    pub fn has_charts(&self) -> bool {
        matches!(self, NavSection::Home | NavSection::Reports)
    }
}

/// Filter input for the chemicals table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// Keystrokes go to the query while focused
    pub focused: bool,
}

impl SearchState {
    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    /// Clear the query and drop focus. Returns `false` if there was nothing to clear.
    pub fn clear(&mut self) -> bool {
        let had_state = self.focused || !self.query.is_empty();
        self.query.clear();
        self.focused = false;
        had_state
    }

    pub fn is_active(&self) -> bool {
        self.focused || !self.query.is_empty()
    }
}
