//! Color palette and shared styles

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

// --- Accent ---
pub const ACCENT: Color = Color::Yellow; // Coin gold
pub const BORDER_DIM: Color = Color::DarkGray;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Outcomes ---
pub const AGUILA: Color = Color::LightRed;
pub const SOL: Color = Color::LightYellow;

// --- Status ---
pub const ENABLED: Color = Color::Green;
pub const DISABLED: Color = Color::Red;

/// Rounded bordered container used by every screen.
pub fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_DIM))
        .title(title)
        .title_style(
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
}

/// Style for the footer key hints.
pub fn hint_style() -> Style {
    Style::default().fg(TEXT_MUTED)
}
