//! Handler module - TEA update function
//!
//! `update()` is a pure state transition: it mutates `AppState` and
//! returns the side effects to perform as [`UpdateAction`]s, which the
//! engine dispatches (timers, cue playback, durable writes). Keeping the
//! effects out of the update function is what makes the admission gate
//! and the lifecycle transitions directly testable.

pub(crate) mod update;


use volado_core::{Cue, FlipRecord, SoundSettings};

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Side effects the engine should perform after an update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Start the launch phase timer (sends `FlipLaunchDone` on expiry)
    StartLaunchTimer,

    /// Start the spin phase timer (sends `FlipSpinDone` on expiry)
    StartSpinTimer,

    /// Play an audio cue, gated by the cached sound settings.
    /// Fire-and-forget: playback failure never affects the lifecycle.
    PlayCue(Cue),

    /// Append one record to durable history. Detached: completion is not
    /// awaited by the lifecycle, and a failure is logged and swallowed.
    AppendHistory(FlipRecord),

    /// Read the full history (most-recent-first), reply with
    /// `Message::HistoryLoaded`
    LoadHistory,

    /// Atomically replace the durable log with an empty sequence
    ClearHistory,

    /// Durably overwrite the sound settings row
    SaveSettings(SoundSettings),

    /// Force a fresh durable read of the settings, refreshing the cache
    ReloadSettings,
}

/// Result of processing a message: optional follow-up message plus the
/// side effects to dispatch, in order.
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
