//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use rand::Rng;
use tracing::debug;
use volado_core::{Cue, FlipPhase, FlipRecord, FlipStats, Outcome};

use crate::message::Message;
use crate::state::{ActiveFlip, AppState, Screen};
use crate::storage::compute_stats;

use super::{UpdateAction, UpdateResult};

/// Process a message and update state.
/// Returns optional follow-up message and/or side effects.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Tick => {
            state.gesture.tick();
            UpdateResult::none()
        }

        Message::ShowScreen(screen) => {
            state.screen = screen;
            // Screen focus is the one trigger for a settings re-sync, so
            // a toggle made on the settings screen applies to the very
            // next cue.
            let mut actions = vec![UpdateAction::ReloadSettings];
            if screen == Screen::History {
                actions.push(UpdateAction::LoadHistory);
            }
            UpdateResult::actions(actions)
        }

        // ─────────────────────────────────────────────────────────
        // Coin Selection
        // ─────────────────────────────────────────────────────────
        Message::SelectNextCoin => {
            state.selected_coin = (state.selected_coin + 1) % volado_core::COIN_CATALOG.len();
            UpdateResult::none()
        }

        Message::SelectPrevCoin => {
            let len = volado_core::COIN_CATALOG.len();
            state.selected_coin = (state.selected_coin + len - 1) % len;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Gesture Messages
        // ─────────────────────────────────────────────────────────
        Message::DragStarted => {
            state.gesture.begin(state.phase.is_idle());
            UpdateResult::none()
        }

        Message::DragMoved { dy } => {
            state.gesture.move_by(dy, state.phase.is_idle());
            UpdateResult::none()
        }

        Message::DragReleased => {
            if state.gesture.release(state.phase.is_idle()) {
                UpdateResult::message(Message::FlipRequested)
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Flip Lifecycle
        // ─────────────────────────────────────────────────────────
        Message::FlipRequested => handle_flip_requested(state),
        Message::FlipLaunchDone => handle_launch_done(state),
        Message::FlipSpinDone => handle_spin_done(state),

        // ─────────────────────────────────────────────────────────
        // History
        // ─────────────────────────────────────────────────────────
        Message::HistoryLoaded { records } => {
            state.stats = compute_stats(&records);
            state.history = records;
            UpdateResult::none()
        }

        Message::ClearHistoryRequested => {
            state.history.clear();
            state.stats = FlipStats::default();
            UpdateResult::action(UpdateAction::ClearHistory)
        }

        // ─────────────────────────────────────────────────────────
        // Sound Settings
        // ─────────────────────────────────────────────────────────
        Message::ToggleLaunchSound => {
            state.sound.flip = !state.sound.flip;
            UpdateResult::action(UpdateAction::SaveSettings(state.sound))
        }

        Message::ToggleSettleSound => {
            state.sound.result = !state.sound.result;
            UpdateResult::action(UpdateAction::SaveSettings(state.sound))
        }

        Message::ToggleAllSounds => {
            let enable = !(state.sound.flip && state.sound.result);
            state.sound.flip = enable;
            state.sound.result = enable;
            UpdateResult::action(UpdateAction::SaveSettings(state.sound))
        }

        Message::SettingsReloaded { settings } => {
            state.sound = settings;
            UpdateResult::none()
        }
    }
}

/// Admission gate and lifecycle start.
///
/// A request while any lifecycle is in flight is a normal "still busy"
/// condition: dropped, not queued, no error.
fn handle_flip_requested(state: &mut AppState) -> UpdateResult {
    if !state.phase.is_idle() {
        debug!("flip request ignored: lifecycle busy ({:?})", state.phase);
        return UpdateResult::none();
    }

    let outcome = draw_outcome();
    // Coin fixed at admission: later selection changes cannot leak into
    // this lifecycle's record.
    let coin = state.selected_coin();
    state.active = Some(ActiveFlip { outcome, coin });
    state.phase = FlipPhase::Launching;
    state.phase_started = Some(Instant::now());

    UpdateResult::actions(vec![
        UpdateAction::PlayCue(Cue::Launch),
        UpdateAction::StartLaunchTimer,
    ])
}

fn handle_launch_done(state: &mut AppState) -> UpdateResult {
    if state.phase != FlipPhase::Launching {
        return UpdateResult::none();
    }
    state.phase = FlipPhase::Spinning;
    state.phase_started = Some(Instant::now());
    UpdateResult::action(UpdateAction::StartSpinTimer)
}

/// Settle the coin: publish the outcome, commit the record, return to
/// idle within this same update (no observable settled-but-busy window).
fn handle_spin_done(state: &mut AppState) -> UpdateResult {
    if state.phase != FlipPhase::Spinning {
        return UpdateResult::none();
    }
    state.phase = FlipPhase::Settled;

    let Some(flip) = state.active.take() else {
        state.phase = FlipPhase::Idle;
        state.phase_started = None;
        return UpdateResult::none();
    };

    let record = FlipRecord::new(flip.outcome, flip.coin.display_label);
    state.settled_face = flip.outcome;
    state.last_outcome = Some(record.clone());
    state.history.insert(0, record.clone());
    state.stats = compute_stats(&state.history);

    state.phase = FlipPhase::Idle;
    state.phase_started = None;

    // Settle cue precedes the history commit; the append itself is
    // detached and never awaited by the lifecycle.
    UpdateResult::actions(vec![
        UpdateAction::PlayCue(Cue::Settle),
        UpdateAction::AppendHistory(record),
    ])
}

/// Fair-coin draw: each face with probability 0.5, independent of the
/// selected denomination.
pub(crate) fn draw_outcome() -> Outcome {
    if rand::thread_rng().gen_bool(0.5) {
        Outcome::Aguila
    } else {
        Outcome::Sol
    }
}
