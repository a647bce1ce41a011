//! History screen: aggregate stats and the flip log, most recent first

use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use volado_app::AppState;

use crate::theme;

use super::outcome_color;

pub fn render(frame: &mut Frame, state: &AppState) {
    let panel = theme::panel(" History ");
    let inner = panel.inner(frame.area());
    frame.render_widget(panel, frame.area());

    let [stats_area, log_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let stats = &state.stats;
    let summary = Line::from(vec![
        Span::raw(format!("Total: {}   ", stats.total)),
        Span::styled(
            format!("\u{c1}guila: {} ({:.1}%)   ", stats.aguila, stats.aguila_pct),
            Style::default().fg(theme::AGUILA),
        ),
        Span::styled(
            format!("Sol: {} ({:.1}%)", stats.sol, stats.sol_pct),
            Style::default().fg(theme::SOL),
        ),
    ]);
    frame.render_widget(Paragraph::new(summary).centered(), stats_area);

    if state.history.is_empty() {
        let empty = Paragraph::new("No flips yet")
            .style(Style::default().fg(theme::TEXT_MUTED))
            .centered();
        frame.render_widget(empty, log_area);
    } else {
        let items: Vec<ListItem> = state
            .history
            .iter()
            .take(log_area.height as usize)
            .map(|record| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<8}", record.outcome.label()),
                        Style::default()
                            .fg(outcome_color(record.outcome))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:<6}", record.coin_label),
                        Style::default().fg(theme::ACCENT),
                    ),
                    Span::styled(
                        record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                        Style::default().fg(theme::TEXT_SECONDARY),
                    ),
                ]))
            })
            .collect();
        frame.render_widget(List::new(items), log_area);
    }

    let hints = Line::from("c: clear history   esc: back   q: quit")
        .style(theme::hint_style())
        .centered();
    frame.render_widget(Paragraph::new(hints), footer_area);
}
