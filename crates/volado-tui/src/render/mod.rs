//! Main render/view function (View in TEA pattern)

mod history;
mod home;
mod settings;


use ratatui::style::Color;
use ratatui::Frame;

use volado_app::{AppState, Screen};
use volado_core::Outcome;

use crate::theme;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    match state.screen {
        Screen::Home => home::render(frame, state),
        Screen::History => history::render(frame, state),
        Screen::Settings => settings::render(frame, state),
    }
}

/// Display color for an outcome.
pub(crate) fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Aguila => theme::AGUILA,
        Outcome::Sol => theme::SOL,
    }
}
