//! Terminal setup and restoration

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use volado_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enable mouse reporting so press/drag/release events reach the gesture
/// adapter.
pub fn enable_mouse() -> Result<()> {
    execute!(stdout(), EnableMouseCapture)?;
    Ok(())
}

/// Disable mouse reporting. Best effort during teardown.
pub fn disable_mouse() {
    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!("failed to disable mouse capture: {e}");
    }
}
