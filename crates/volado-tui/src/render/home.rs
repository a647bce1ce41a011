//! Home screen: the coin, the gesture area, and the last outcome

use std::time::Instant;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use volado_app::AppState;
use volado_core::{FlipPhase, Outcome};

use crate::event::CELL_POINTS;
use crate::theme;

use super::outcome_color;

pub fn render(frame: &mut Frame, state: &AppState) {
    let now = Instant::now();
    let panel = theme::panel(" Volado ");
    let inner = panel.inner(frame.area());
    frame.render_widget(panel, frame.area());

    let [coin_area, caption_area, selector_area, footer_area] = Layout::vertical([
        Constraint::Min(7),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    render_coin(frame, state, coin_area, now);
    render_caption(frame, state, caption_area);
    render_selector(frame, state, selector_area);

    let hints = Line::from(
        "swipe up / space: flip   \u{25c0} \u{25b6}: coin   h: history   s: settings   q: quit",
    )
    .style(theme::hint_style())
    .centered();
    frame.render_widget(Paragraph::new(hints), footer_area);
}

/// Draw the coin face at its animated height.
///
/// The coin rests at the bottom of the area. The launch arc lifts it over
/// the full free span; an in-progress drag lifts it proportionally to the
/// gesture offset.
fn render_coin(frame: &mut Frame, state: &AppState, area: Rect, now: Instant) {
    let face = state.visible_face(now);
    let art = match face {
        Outcome::Aguila => state.selected_coin().aguila_art,
        Outcome::Sol => state.selected_coin().sol_art,
    };
    let art_height = art.lines().count() as u16;
    if area.height < art_height {
        return;
    }

    let span = area.height - art_height;
    let lift_rows = (state.launch_height(now) * span as f32) as u16;
    let drag_rows = ((-state.gesture.offset()).max(0.0) / CELL_POINTS) as u16;
    let y = area.y + span - (lift_rows + drag_rows).min(span);

    let coin_rect = Rect::new(area.x, y, area.width, art_height);
    let coin = Paragraph::new(art)
        .style(Style::default().fg(outcome_color(face)))
        .centered();
    frame.render_widget(coin, coin_rect);
}

fn render_caption(frame: &mut Frame, state: &AppState, area: Rect) {
    let line = match state.phase {
        FlipPhase::Launching | FlipPhase::Spinning | FlipPhase::Settled => {
            Line::from("...").style(Style::default().fg(theme::TEXT_MUTED))
        }
        FlipPhase::Idle => match &state.last_outcome {
            Some(record) => Line::from(vec![
                Span::raw("\u{00da}ltimo: "),
                Span::styled(
                    record.outcome.label(),
                    Style::default()
                        .fg(outcome_color(record.outcome))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" ({})", record.coin_label),
                    Style::default().fg(theme::TEXT_SECONDARY),
                ),
            ]),
            None => Line::from("Swipe the coin up to flip it")
                .style(Style::default().fg(theme::TEXT_SECONDARY)),
        },
    };
    frame.render_widget(Paragraph::new(line.centered()), area);
}

fn render_selector(frame: &mut Frame, state: &AppState, area: Rect) {
    let line = Line::from(vec![
        Span::styled("\u{25c0} ", theme::hint_style()),
        Span::styled(
            state.selected_coin().display_label,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" \u{25b6}", theme::hint_style()),
    ]);
    frame.render_widget(Paragraph::new(line.centered()), area);
}
