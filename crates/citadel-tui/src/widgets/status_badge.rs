//! Status badge: colored dot plus label for a character's life status.

use ratatui::style::{Color, Style};
use ratatui::text::Span;

use citadel_core::StatusCategory;

use crate::theme;

/// Dot symbol and color for a raw status string.
fn appearance(status: &str) -> (&'static str, Color) {
    match StatusCategory::classify(status) {
        StatusCategory::Alive => ("●", theme::ALIVE_GREEN),
        StatusCategory::Dead => ("●", theme::DEAD_RED),
        StatusCategory::Unknown => ("○", theme::TEXT_DIM),
    }
}

/// Styled dot for a raw status string.
pub fn badge_span(status: &str) -> Span<'static> {
    let (symbol, color) = appearance(status);
    Span::styled(symbol, Style::default().fg(color))
}

/// Dot plus the raw status text, colored to match.
pub fn badge_spans(status: &str) -> Vec<Span<'static>> {
    let (_, color) = appearance(status);
    vec![
        badge_span(status),
        Span::raw(" "),
        Span::styled(status.to_string(), Style::default().fg(color)),
    ]
}
