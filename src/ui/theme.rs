//! Color theme constants for the dashboard UI.

use ratatui::style::Color;

use crate::models::PrimaryHazard;

// ============================================================================
// Base palette
// ============================================================================

pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and the active nav entry
pub const COLOR_ACCENT: Color = Color::Rgb(254, 108, 0); // pumpkin #FE6C00

pub const COLOR_HEADER: Color = Color::White;

pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_TEXT: Color = Color::Gray;

/// Background for the report modal
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Status colors
// ============================================================================

pub const COLOR_POSITIVE: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_NEGATIVE: Color = Color::Rgb(235, 87, 87);

pub const COLOR_WARNING: Color = Color::Yellow;

// ============================================================================
// Chart series
// ============================================================================

pub const COLOR_USAGE: Color = Color::Rgb(0, 122, 204); // blue #007ACC

pub const COLOR_INCIDENTS: Color = COLOR_NEGATIVE;

/// Color for a hazard bucket badge.
pub fn hazard_color(hazard: PrimaryHazard) -> Color {
    match hazard {
        PrimaryHazard::Flammable => Color::Rgb(255, 140, 0),
        PrimaryHazard::Corrosive => Color::Rgb(186, 104, 200),
        PrimaryHazard::Toxic => COLOR_NEGATIVE,
        PrimaryHazard::Other => COLOR_TEXT,
    }
}

/// Palette cycled through for distribution bars.
pub const SERIES_COLORS: [Color; 5] = [
    Color::Rgb(255, 140, 0),
    Color::Rgb(186, 104, 200),
    COLOR_NEGATIVE,
    COLOR_USAGE,
    COLOR_TEXT,
];
