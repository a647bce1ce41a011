//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal for the lifetime of the run: init, mouse capture,
//! the draw/poll/update loop, and restoration on every exit path
//! (including panics, via the installed hook).

use volado_core::prelude::*;
use volado_app::{CueBackend, Engine};

use crate::event::{self, InputTracker};
use crate::{render, terminal};

/// Run the TUI over an initialized engine until the user quits.
pub fn run<B: CueBackend>(mut engine: Engine<B>) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = match terminal::enable_mouse() {
        Ok(()) => {
            let r = run_loop(&mut term, &mut engine);
            terminal::disable_mouse();
            r
        }
        // No mouse reporting: keyboard flips still work
        Err(e) => {
            warn!("mouse capture unavailable, swipe disabled: {e}");
            run_loop(&mut term, &mut engine)
        }
    };

    engine.shutdown();
    ratatui::restore();
    result
}

/// Main event loop
fn run_loop<B: CueBackend>(
    terminal: &mut ratatui::DefaultTerminal,
    engine: &mut Engine<B>,
) -> Result<()> {
    let mut tracker = InputTracker::default();

    while !engine.should_quit() {
        // Process messages fed back by timers and background loads
        engine.drain_pending_messages();

        // Render
        terminal.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events (or a tick on poll timeout)
        if let Some(message) = event::poll(&mut tracker)? {
            engine.process_message(message);
        }
    }

    info!("quit requested, leaving event loop");
    Ok(())
}
