//! volado-app - Flip lifecycle engine and orchestration
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! flip interaction: `AppState` is the model, [`Message`] the events,
//! [`handler::update`] the pure transition function, and [`Engine`] the
//! orchestrator that owns the message channel, the durable stores, and
//! the audio cue service.
//!
//! The central invariant lives in the update function: a flip request is
//! admitted only while the lifecycle is idle, so at most one flip is ever
//! in flight and history is never double-counted.

pub mod audio;
pub mod drag;
pub mod engine;
pub mod handler;
pub mod message;
pub mod state;
pub mod storage;

// Re-export primary types
pub use audio::{AudioCueService, CueBackend, RecordingBackend, RodioBackend};
pub use drag::{GestureInputAdapter, SWIPE_TRIGGER_DISTANCE};
pub use engine::Engine;
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{ActiveFlip, AppState, Screen, LAUNCH_DURATION, SPIN_DURATION};
pub use storage::{compute_stats, default_data_dir, HistoryStore, SettingsStore};
