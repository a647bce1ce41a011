//! Engine - orchestration around the pure update function
//!
//! The Engine owns the message channel, the durable stores, and the audio
//! cue service. It runs the TEA cycle: receive a [`Message`], run
//! [`handler::update`], then dispatch the resulting [`UpdateAction`]s.
//! Phase timers and durable writes run as detached tokio tasks that feed
//! their completions back through the same channel, so the update function
//! itself never blocks.

use std::path::Path;

use tokio::sync::mpsc;

use volado_core::prelude::*;

use crate::audio::{AudioCueService, CueBackend};
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::{AppState, LAUNCH_DURATION, SPIN_DURATION};
use crate::storage::{HistoryStore, SettingsStore};

/// Message channel capacity. Input sources block briefly if the
/// frontend stops draining.
const CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for the flip interaction.
///
/// Not `Send` once a real audio backend is attached; the whole engine
/// lives on the runtime's main task.
pub struct Engine<B: CueBackend> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (terminal events, timers).
    msg_tx: mpsc::Sender<Message>,

    /// Receiver half. The frontend event loop drains messages from here.
    msg_rx: mpsc::Receiver<Message>,

    history: HistoryStore,
    settings: SettingsStore,
    audio: AudioCueService<B>,
}

impl<B: CueBackend> Engine<B> {
    /// Create an engine over the given data directory and audio service.
    ///
    /// Loads the persisted sound settings and the existing flip history
    /// so the first frame already shows them.
    pub fn new(data_dir: &Path, audio: AudioCueService<B>) -> Self {
        let settings = SettingsStore::new(data_dir);
        let history = HistoryStore::new(data_dir);

        let mut state = AppState::with_settings(settings.cached());
        let records = history.read_all();
        info!(
            count = records.len(),
            "loaded flip history from {}",
            data_dir.display()
        );
        state.stats = crate::storage::compute_stats(&records);
        state.history = records;

        let (msg_tx, msg_rx) = mpsc::channel(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            history,
            settings,
            audio,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Process a single message through the TEA update cycle, following
    /// any follow-up messages it produces (a triggered swipe release
    /// becomes a flip request within the same cycle).
    pub fn process_message(&mut self, msg: Message) {
        let mut queue = vec![msg];
        while let Some(msg) = queue.pop() {
            let result = handler::update(&mut self.state, msg);
            for action in result.actions {
                if let Some(follow_up) = self.dispatch(action) {
                    queue.push(follow_up);
                }
            }
            if let Some(follow_up) = result.message {
                queue.push(follow_up);
            }
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner,
    /// which drains everything pending before rendering a frame.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Await the next message. `None` means every sender is gone.
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Release the audio device. Idempotent; rendering and persistence
    /// are unaffected.
    pub fn shutdown(&mut self) {
        self.audio.release();
        info!("engine shut down");
    }

    /// Execute one side effect. Returns a follow-up message for effects
    /// that complete synchronously.
    fn dispatch(&mut self, action: UpdateAction) -> Option<Message> {
        match action {
            UpdateAction::StartLaunchTimer => {
                self.spawn_timer(LAUNCH_DURATION, Message::FlipLaunchDone);
                None
            }

            UpdateAction::StartSpinTimer => {
                self.spawn_timer(SPIN_DURATION, Message::FlipSpinDone);
                None
            }

            UpdateAction::PlayCue(cue) => {
                // Gated by the store's cache, the single source of truth
                // for cue enablement.
                let settings = self.settings.cached();
                self.audio.play(cue, &settings);
                None
            }

            UpdateAction::AppendHistory(record) => {
                // Detached write: the lifecycle never waits on it, and a
                // failure is logged and swallowed.
                let store = self.history.clone();
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = store.append(&record) {
                        warn!("history append failed, flip not persisted: {e}");
                    }
                });
                None
            }

            UpdateAction::LoadHistory => {
                let store = self.history.clone();
                let tx = self.msg_tx.clone();
                tokio::task::spawn_blocking(move || {
                    let records = store.read_all();
                    let _ = tx.blocking_send(Message::HistoryLoaded { records });
                });
                None
            }

            UpdateAction::ClearHistory => {
                let store = self.history.clone();
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = store.clear() {
                        warn!("history clear failed: {e}");
                    }
                });
                None
            }

            UpdateAction::SaveSettings(settings) => {
                // Synchronous so the cache updates before the next cue.
                if let Err(e) = self.settings.save(settings) {
                    warn!("settings save failed, change not durable: {e}");
                }
                None
            }

            UpdateAction::ReloadSettings => {
                let settings = self.settings.reload();
                Some(Message::SettingsReloaded { settings })
            }
        }
    }

    /// Spawn a phase timer that reports back through the channel.
    fn spawn_timer(&self, duration: std::time::Duration, done: Message) {
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if tx.send(done).await.is_err() {
                debug!("phase timer fired after engine teardown");
            }
        });
    }
}

impl<B: CueBackend> Drop for Engine<B> {
    fn drop(&mut self) {
        self.audio.release();
    }
}
