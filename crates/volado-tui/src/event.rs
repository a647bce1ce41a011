//! Terminal event polling and gesture mapping
//!
//! Keyboard events map directly to messages. Mouse events are translated
//! into the drag protocol: a left press starts a drag, each drag report
//! becomes a delta in gesture points, and the release closes it. One
//! terminal row is worth [`CELL_POINTS`] points, so an upward drag of a
//! few rows crosses the swipe threshold.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

use volado_core::prelude::*;
use volado_app::{Message, Screen};

/// Poll timeout; a tick fires on expiry (~30 FPS for animations).
const POLL_TIMEOUT: Duration = Duration::from_millis(33);

/// Gesture points per terminal cell row. Chosen so the 50-point swipe
/// threshold corresponds to roughly four rows of upward drag.
pub const CELL_POINTS: f32 = 14.0;

/// Translates raw mouse reports into drag deltas.
///
/// Terminal mouse rows grow downward, matching the gesture convention
/// (negative delta = upward), so no sign flip is needed.
#[derive(Debug, Default)]
pub struct InputTracker {
    last_row: Option<u16>,
}

impl InputTracker {
    fn press(&mut self, row: u16) -> Message {
        self.last_row = Some(row);
        Message::DragStarted
    }

    fn drag(&mut self, row: u16) -> Option<Message> {
        let last = self.last_row.replace(row)?;
        let dy = (row as f32 - last as f32) * CELL_POINTS;
        (dy != 0.0).then_some(Message::DragMoved { dy })
    }

    fn release(&mut self) -> Option<Message> {
        self.last_row.take().map(|_| Message::DragReleased)
    }
}

/// Poll for terminal events with timeout
pub fn poll(tracker: &mut InputTracker) -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        // Generate tick on timeout for animations
        return Ok(Some(Message::Tick));
    }

    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key.code)),
        Event::Mouse(mouse) => Ok(match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(tracker.press(mouse.row)),
            MouseEventKind::Drag(MouseButton::Left) => tracker.drag(mouse.row),
            MouseEventKind::Up(MouseButton::Left) => tracker.release(),
            _ => None,
        }),
        _ => Ok(None),
    }
}

fn map_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::Esc => Some(Message::ShowScreen(Screen::Home)),
        KeyCode::Char('h') => Some(Message::ShowScreen(Screen::History)),
        KeyCode::Char('s') => Some(Message::ShowScreen(Screen::Settings)),

        KeyCode::Left => Some(Message::SelectPrevCoin),
        KeyCode::Right => Some(Message::SelectNextCoin),

        // Keyboard path to a flip, equivalent to a full swipe
        KeyCode::Char(' ') | KeyCode::Enter => Some(Message::FlipRequested),

        KeyCode::Char('c') => Some(Message::ClearHistoryRequested),

        KeyCode::Char('1') => Some(Message::ToggleLaunchSound),
        KeyCode::Char('2') => Some(Message::ToggleSettleSound),
        KeyCode::Char('a') => Some(Message::ToggleAllSounds),

        _ => None,
    }
}
