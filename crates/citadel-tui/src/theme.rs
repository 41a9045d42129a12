//! Portal palette: colors and semantic styles for the catalog UI.
//!
//! Screens ask for a semantic style (`grid_selected()`, `hint_key()`)
//! and never touch raw color values.

use ratatui::style::{Color, Modifier, Style};

// ── Palette ─────────────────────────────────────────────────────────

/// Signature accent. Focus borders, the selection, the spinner.
pub const PORTAL_GREEN: Color = Color::Rgb(151, 206, 76); // #97ce4c
/// Titles and primary values.
pub const MEESEEKS_BLUE: Color = Color::Rgb(64, 180, 196); // #40b4c4
/// Page numbers and counters.
pub const MORTY_YELLOW: Color = Color::Rgb(245, 225, 75); // #f5e14b

// Status badge colors.
pub const ALIVE_GREEN: Color = Color::Rgb(85, 220, 120); // #55dc78
pub const DEAD_RED: Color = Color::Rgb(214, 77, 77); // #d64d4d

// Text and chrome.
pub const TEXT_DIM: Color = Color::Rgb(157, 163, 180); // #9da3b4
pub const BORDER_DIM: Color = Color::Rgb(90, 98, 120); // #5a6278
pub const BG_SELECTED: Color = Color::Rgb(38, 42, 50); // #262a32
pub const BG_OVERLAY: Color = Color::Rgb(24, 26, 31); // #181a1f

// ── Semantic styles ─────────────────────────────────────────────────

/// Panel and overlay titles.
pub fn title() -> Style {
    Style::default()
        .fg(MEESEEKS_BLUE)
        .add_modifier(Modifier::BOLD)
}

pub fn border_active() -> Style {
    Style::default().fg(PORTAL_GREEN)
}

pub fn border_idle() -> Style {
    Style::default().fg(BORDER_DIM)
}

/// Header row of the character grid.
pub fn grid_header() -> Style {
    Style::default()
        .fg(MEESEEKS_BLUE)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn grid_row() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// The row the cursor is on.
pub fn grid_selected() -> Style {
    Style::default()
        .fg(PORTAL_GREEN)
        .bg(BG_SELECTED)
        .add_modifier(Modifier::BOLD)
}

/// Message text in a view's error surface.
pub fn error_text() -> Style {
    Style::default().fg(DEAD_RED)
}

/// Explanatory half of a key hint ("move", "quit").
pub fn hint() -> Style {
    Style::default().fg(BORDER_DIM)
}

/// Key half of a key hint ("j/k", "q").
pub fn hint_key() -> Style {
    Style::default()
        .fg(MEESEEKS_BLUE)
        .add_modifier(Modifier::BOLD)
}
