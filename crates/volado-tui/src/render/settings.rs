//! Settings screen: the two sound cue toggles

use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use volado_app::AppState;

use crate::theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let panel = theme::panel(" Sound Settings ");
    let inner = panel.inner(frame.area());
    frame.render_widget(panel, frame.area());

    let [toggles_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let lines = vec![
        Line::default(),
        toggle_line("1", "Flip sound", state.sound.flip),
        toggle_line("2", "Result sound", state.sound.result),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), toggles_area);

    let hints = Line::from("1/2: toggle   a: toggle both   esc: back   q: quit")
        .style(theme::hint_style())
        .centered();
    frame.render_widget(Paragraph::new(hints), footer_area);
}

fn toggle_line(key: &str, label: &str, enabled: bool) -> Line<'static> {
    let (mark, color) = if enabled {
        ("on ", theme::ENABLED)
    } else {
        ("off", theme::DISABLED)
    };
    Line::from(vec![
        Span::styled(format!("[{key}] "), theme::hint_style()),
        Span::styled(
            format!("{label:<14}"),
            Style::default().fg(theme::TEXT_PRIMARY),
        ),
        Span::styled(mark.to_string(), Style::default().fg(color)),
    ])
}
