//! Responsive layout for the dashboard.
//!
//! [`LayoutContext`] wraps an area's dimensions and answers sizing questions;
//! [`AppLayout::compute`] splits the frame into header, sidebar and content.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

pub const HEADER_HEIGHT: u16 = 3;
pub const SIDEBAR_WIDTH: u16 = 24;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// < 60 cols
    ExtraSmall,
    /// < 80 cols
    Small,
    /// < 120 cols
    Medium,
    /// >= 120 cols
    Large,
}

/// Dimensions of the area being laid out.
///
/// # Example
///
/// ```ignore
/// let ctx = LayoutContext::from_rect(content_area);
/// if ctx.should_stack_panels() {
///     // charts one above the other
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Width in columns
    pub width: u16,
    /// Height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of the available width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a width as a percentage, clamped to `[min, max]`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Side-by-side charts need at least 80 columns.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    /// Metric cards per row: 3 on wide areas, 2 on medium, 1 below that.
    pub fn metric_columns(&self) -> u16 {
        match self.width_category() {
            SizeCategory::Large | SizeCategory::Medium if self.width >= 90 => 3,
            SizeCategory::ExtraSmall => 1,
            _ => 2,
        }
    }

    /// Whether the inventory table has room for the manufacturer column.
    pub fn should_show_manufacturer(&self) -> bool {
        self.width >= breakpoints::MD_WIDTH - 20
    }
}

/// Top-level screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// Present while the sidebar is open
    pub sidebar: Option<Rect>,
    pub content: Rect,
}

impl AppLayout {
    /// Split the frame.
    ///
    /// On desktop an open sidebar takes columns from the content. On mobile it
    /// is drawn over the content, which keeps its full width.
    pub fn compute(area: Rect, sidebar_open: bool, desktop: bool) -> Self {
        let [header, body] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);

        if !sidebar_open {
            return Self {
                header,
                sidebar: None,
                content: body,
            };
        }

        let sidebar_width = SIDEBAR_WIDTH.min(body.width);
        if desktop {
            let [sidebar, content] = Layout::horizontal([
                Constraint::Length(sidebar_width),
                Constraint::Min(0),
            ])
            .areas(body);
            Self {
                header,
                sidebar: Some(sidebar),
                content,
            }
        } else {
            Self {
                header,
                sidebar: Some(Rect {
                    width: sidebar_width,
                    ..body
                }),
                content: body,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(LayoutContext::new(1, 1).percent_width(10), 1);
    }

    #[test]
    fn test_bounded_width() {
        let ctx = LayoutContext::new(200, 40);
        assert_eq!(ctx.bounded_width(50, 10, 60), 60);
        assert_eq!(LayoutContext::new(10, 40).bounded_width(50, 8, 60), 8);
    }

    #[test]
    fn test_width_category() {
        assert_eq!(LayoutContext::new(50, 40).width_category(), SizeCategory::ExtraSmall);
        assert_eq!(LayoutContext::new(70, 40).width_category(), SizeCategory::Small);
        assert_eq!(LayoutContext::new(100, 40).width_category(), SizeCategory::Medium);
        assert_eq!(LayoutContext::new(140, 40).width_category(), SizeCategory::Large);
    }

    #[test]
    fn test_metric_columns() {
        assert_eq!(LayoutContext::new(150, 40).metric_columns(), 3);
        assert_eq!(LayoutContext::new(95, 40).metric_columns(), 3);
        assert_eq!(LayoutContext::new(85, 40).metric_columns(), 2);
        assert_eq!(LayoutContext::new(70, 40).metric_columns(), 2);
        assert_eq!(LayoutContext::new(40, 40).metric_columns(), 1);
    }

    #[test]
    fn test_desktop_sidebar_takes_columns() {
        let layout = AppLayout::compute(Rect::new(0, 0, 120, 40), true, true);
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.sidebar.map(|s| s.width), Some(SIDEBAR_WIDTH));
        assert_eq!(layout.content.width, 120 - SIDEBAR_WIDTH);
        assert_eq!(layout.content.x, SIDEBAR_WIDTH);
    }

    #[test]
    fn test_mobile_sidebar_overlays() {
        let layout = AppLayout::compute(Rect::new(0, 0, 80, 30), true, false);
        assert_eq!(layout.sidebar.map(|s| s.width), Some(SIDEBAR_WIDTH));
        assert_eq!(layout.content.width, 80);
    }

    #[test]
    fn test_closed_sidebar() {
        let layout = AppLayout::compute(Rect::new(0, 0, 120, 40), false, true);
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.content.width, 120);
        assert_eq!(layout.content.height, 40 - HEADER_HEIGHT);
    }
}
