//! Application state (Model in TEA pattern)

use std::time::{Duration, Instant};

use volado_core::{
    default_coin, CoinDefinition, FlipPhase, FlipRecord, FlipStats, Outcome, SoundSettings,
    COIN_CATALOG, DEFAULT_COIN_INDEX,
};

use crate::drag::GestureInputAdapter;

/// Duration of the upward travel phase.
pub const LAUNCH_DURATION: Duration = Duration::from_millis(500);

/// Duration of the face-rotation phase. The visual crossover between the
/// two faces sits at the midpoint.
pub const SPIN_DURATION: Duration = Duration::from_millis(1000);

/// Current UI screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Coin area with the swipe gesture
    #[default]
    Home,
    /// Statistics and the flip log
    History,
    /// Sound toggles
    Settings,
}

/// The lifecycle in flight. Outcome and coin are fixed at admission time,
/// so a later coin selection change cannot leak into the history record.
#[derive(Debug, Clone, Copy)]
pub struct ActiveFlip {
    pub outcome: Outcome,
    pub coin: &'static CoinDefinition,
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    pub screen: Screen,

    /// Flip lifecycle phase. At most one lifecycle is active at any time.
    pub phase: FlipPhase,
    /// The admitted flip, present only while `phase` is not idle.
    pub active: Option<ActiveFlip>,
    /// When the current phase began; drives the animation timeline.
    pub phase_started: Option<Instant>,
    /// The face showing while the coin rests.
    pub settled_face: Outcome,
    /// Latest completed flip, published before its durable write finishes.
    pub last_outcome: Option<FlipRecord>,

    /// Index into [`COIN_CATALOG`].
    pub selected_coin: usize,
    /// Cached sound settings, refreshed on screen focus changes.
    pub sound: SoundSettings,

    pub gesture: GestureInputAdapter,

    /// Loaded history, most-recent-first (for the history screen).
    pub history: Vec<FlipRecord>,
    pub stats: FlipStats,

    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(SoundSettings::default())
    }

    pub fn with_settings(sound: SoundSettings) -> Self {
        Self {
            screen: Screen::Home,
            phase: FlipPhase::Idle,
            active: None,
            phase_started: None,
            settled_face: Outcome::Sol,
            last_outcome: None,
            selected_coin: DEFAULT_COIN_INDEX,
            sound,
            gesture: GestureInputAdapter::default(),
            history: Vec::new(),
            stats: FlipStats::default(),
            should_quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The currently selected coin definition.
    pub fn selected_coin(&self) -> &'static CoinDefinition {
        COIN_CATALOG
            .get(self.selected_coin)
            .unwrap_or_else(default_coin)
    }

    /// Time elapsed in the current phase, zero when idle.
    pub fn phase_elapsed(&self, now: Instant) -> Duration {
        self.phase_started
            .map(|t| now.duration_since(t))
            .unwrap_or(Duration::ZERO)
    }

    /// The coin face to show at `now`.
    ///
    /// Before the spin midpoint this is the previously settled face;
    /// after it, the drawn outcome's face.
    pub fn visible_face(&self, now: Instant) -> Outcome {
        match (self.phase, self.active) {
            (FlipPhase::Spinning, Some(flip)) => {
                if self.phase_elapsed(now) < SPIN_DURATION / 2 {
                    self.settled_face
                } else {
                    flip.outcome
                }
            }
            _ => self.settled_face,
        }
    }

    /// Height fraction of the launch arc at `now`: rises 0 -> 1 during
    /// the launch phase, falls 1 -> 0 during the spin phase. Strictly
    /// monotonic within each phase.
    pub fn launch_height(&self, now: Instant) -> f32 {
        let ratio = |dur: Duration| {
            (self.phase_elapsed(now).as_secs_f32() / dur.as_secs_f32()).clamp(0.0, 1.0)
        };
        match self.phase {
            FlipPhase::Launching => ratio(LAUNCH_DURATION),
            FlipPhase::Spinning => 1.0 - ratio(SPIN_DURATION),
            _ => 0.0,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_on_home() {
        let state = AppState::new();
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.phase, FlipPhase::Idle);
        assert!(state.active.is_none());
        assert!(state.last_outcome.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_default_selection_is_one_peso() {
        let state = AppState::new();
        assert_eq!(state.selected_coin().id, "1p");
    }

    #[test]
    fn test_visible_face_crosses_over_at_spin_midpoint() {
        let mut state = AppState::new();
        state.settled_face = Outcome::Sol;
        state.phase = FlipPhase::Spinning;
        state.active = Some(ActiveFlip {
            outcome: Outcome::Aguila,
            coin: default_coin(),
        });

        let start = Instant::now();
        state.phase_started = Some(start);
        assert_eq!(state.visible_face(start + Duration::from_millis(100)), Outcome::Sol);
        assert_eq!(
            state.visible_face(start + Duration::from_millis(700)),
            Outcome::Aguila
        );
    }

    #[test]
    fn test_launch_height_rises_then_falls() {
        let mut state = AppState::new();
        let start = Instant::now();
        state.phase = FlipPhase::Launching;
        state.phase_started = Some(start);

        let early = state.launch_height(start + Duration::from_millis(100));
        let late = state.launch_height(start + Duration::from_millis(400));
        assert!(early < late);

        state.phase = FlipPhase::Spinning;
        let falling_early = state.launch_height(start + Duration::from_millis(200));
        let falling_late = state.launch_height(start + Duration::from_millis(900));
        assert!(falling_late < falling_early);
    }

    #[test]
    fn test_launch_height_zero_when_idle() {
        let state = AppState::new();
        assert_eq!(state.launch_height(Instant::now()), 0.0);
    }
}
