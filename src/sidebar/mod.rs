//! Sidebar open/closed reducer.
//!
//! The store is the only writer of the flag. Callers dispatch
//! [`SidebarAction`]s and get back whether anything changed; the app uses that
//! to decide whether the chart area needs a resize signal.

/// Viewport class derived from the terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    pub fn classify(width: u16, desktop_breakpoint: u16) -> Self {
        if width >= desktop_breakpoint {
            ViewportClass::Desktop
        } else {
            ViewportClass::Mobile
        }
    }

    /// Sidebar visibility a fresh viewport of this class starts with.
    pub fn default_open(&self) -> bool {
        matches!(self, ViewportClass::Desktop)
    }
}

/// Transitions accepted by [`SidebarStore::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Toggle,
    Set(bool),
}

/// Pure transition function.
pub fn reduce(is_open: bool, action: SidebarAction) -> bool {
    match action {
        SidebarAction::Toggle => !is_open,
        SidebarAction::Set(value) => value,
    }
}

#[derive(Debug, Clone)]
pub struct SidebarStore {
    is_open: bool,
    viewport: ViewportClass,
    desktop_breakpoint: u16,
}

impl SidebarStore {
    /// Start from the terminal width at launch.
    pub fn new(width: u16, desktop_breakpoint: u16) -> Self {
        let viewport = ViewportClass::classify(width, desktop_breakpoint);
        Self {
            is_open: viewport.default_open(),
            viewport,
            desktop_breakpoint,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn is_desktop(&self) -> bool {
        self.viewport == ViewportClass::Desktop
    }

    pub fn desktop_breakpoint(&self) -> u16 {
        self.desktop_breakpoint
    }

    /// Apply an action. Returns `true` if the open flag changed.
    pub fn dispatch(&mut self, action: SidebarAction) -> bool {
        let next = reduce(self.is_open, action);
        let changed = next != self.is_open;
        self.is_open = next;
        if changed {
            tracing::debug!(?action, is_open = next, "Sidebar transition");
        } else {
            tracing::trace!(?action, "Sidebar action was a no-op");
        }
        changed
    }

    pub fn toggle(&mut self) -> bool {
        self.dispatch(SidebarAction::Toggle)
    }

    /// Open the sidebar if it is closed.
    pub fn expand(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.dispatch(SidebarAction::Set(true))
    }

    /// Close the sidebar if it is open.
    pub fn collapse(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.dispatch(SidebarAction::Set(false))
    }

    /// Re-classify after a terminal resize.
    ///
    /// Only a class change touches the flag: crossing into desktop opens the
    /// sidebar, crossing into mobile closes it. Returns `true` if the flag
    /// changed.
    pub fn on_viewport_width(&mut self, width: u16) -> bool {
        let class = ViewportClass::classify(width, self.desktop_breakpoint);
        if class == self.viewport {
            return false;
        }
        tracing::debug!(?class, width, "Viewport crossed breakpoint");
        self.viewport = class;
        self.dispatch(SidebarAction::Set(class.default_open()))
    }

    /// Mobile auto-collapse for a click that landed outside the sidebar and
    /// outside the menu toggle.
    pub fn on_click_outside(&mut self) -> bool {
        if self.is_desktop() {
            return false;
        }
        self.collapse()
    }
}
