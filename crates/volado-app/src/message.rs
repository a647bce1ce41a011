//! Message types for the application (TEA pattern)

use volado_core::{FlipRecord, SoundSettings};

use crate::state::Screen;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Request to quit
    Quit,

    /// Tick event for periodic updates (gesture spring-back, redraw)
    Tick,

    /// Switch the visible screen. Also re-synchronizes cached settings
    /// (the screen-focus event is the sole trigger for a settings reload).
    ShowScreen(Screen),

    // ─────────────────────────────────────────────────────────
    // Coin Selection
    // ─────────────────────────────────────────────────────────
    /// Select the next coin in the catalog
    SelectNextCoin,
    /// Select the previous coin in the catalog
    SelectPrevCoin,

    // ─────────────────────────────────────────────────────────
    // Gesture Messages
    // ─────────────────────────────────────────────────────────
    /// Press began on the coin
    DragStarted,
    /// Drag moved by `dy` points (negative = upward)
    DragMoved { dy: f32 },
    /// Press released; may emit a flip trigger
    DragReleased,

    // ─────────────────────────────────────────────────────────
    // Flip Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Flip trigger (from the gesture adapter, or the keyboard shortcut).
    /// Dropped without effect while a lifecycle is in flight.
    FlipRequested,
    /// Launch phase timer elapsed
    FlipLaunchDone,
    /// Spin phase timer elapsed; the coin settles
    FlipSpinDone,

    // ─────────────────────────────────────────────────────────
    // History
    // ─────────────────────────────────────────────────────────
    /// History read completed (most-recent-first)
    HistoryLoaded { records: Vec<FlipRecord> },
    /// User asked to clear the history
    ClearHistoryRequested,

    // ─────────────────────────────────────────────────────────
    // Sound Settings
    // ─────────────────────────────────────────────────────────
    /// Toggle the launch cue flag
    ToggleLaunchSound,
    /// Toggle the settle cue flag
    ToggleSettleSound,
    /// Toggle both cue flags together
    ToggleAllSounds,
    /// Settings reloaded from durable storage
    SettingsReloaded { settings: SoundSettings },
}
