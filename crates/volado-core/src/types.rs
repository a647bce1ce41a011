//! Domain types for the flip lifecycle

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Outcome
// ─────────────────────────────────────────────────────────────────────────────

/// The two faces of a Mexican coin: águila (heads) and sol (tails).
///
/// Serialized with the localized labels the original history store used
/// (`"Águila"` / `"Sol"`); parsing also accepts the plain `"HEADS"` /
/// `"TAILS"` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Aguila,
    Sol,
}

impl Outcome {
    /// Display label, as shown in the UI and stored in history.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Aguila => "Águila",
            Outcome::Sol => "Sol",
        }
    }

    /// Parse a stored outcome label. Returns `None` for anything that is
    /// not one of the accepted forms; callers drop such records.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Águila" | "Aguila" | "AGUILA" | "HEADS" | "Heads" => Some(Outcome::Aguila),
            "Sol" | "SOL" | "TAILS" | "Tails" => Some(Outcome::Sol),
            _ => None,
        }
    }

    /// The opposite face.
    pub fn other(&self) -> Self {
        match self {
            Outcome::Aguila => Outcome::Sol,
            Outcome::Sol => Outcome::Aguila,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Outcome::parse(&s).ok_or_else(|| de::Error::custom(format!("unknown outcome: {s:?}")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Flip lifecycle
// ─────────────────────────────────────────────────────────────────────────────

/// Flip lifecycle phase.
///
/// Exactly one lives in the application state. `Settled` is collapsed to
/// `Idle` within a single update cycle and is never observable from the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlipPhase {
    #[default]
    Idle,
    /// Upward travel after admission; launch cue fires at entry.
    Launching,
    /// Face rotation; the visual crossover sits at the phase midpoint.
    Spinning,
    /// Outcome published and record committed; immediately becomes Idle.
    Settled,
}

impl FlipPhase {
    /// Whether a new flip request would currently be admitted.
    pub fn is_idle(&self) -> bool {
        matches!(self, FlipPhase::Idle)
    }
}

/// One completed flip. Created only by the engine when a lifecycle
/// settles; immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipRecord {
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
    pub coin_label: String,
}

impl FlipRecord {
    pub fn new(outcome: Outcome, coin_label: impl Into<String>) -> Self {
        Self {
            outcome,
            timestamp: Utc::now(),
            coin_label: coin_label.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Statistics
// ─────────────────────────────────────────────────────────────────────────────

/// Aggregate statistics over a flip history.
///
/// Percentages are `count / total * 100` rounded to one decimal, and `0`
/// when the history is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FlipStats {
    pub total: usize,
    pub aguila: usize,
    pub sol: usize,
    pub aguila_pct: f64,
    pub sol_pct: f64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Sound settings
// ─────────────────────────────────────────────────────────────────────────────

/// Per-cue audio enable flags, persisted under the `soundSettings` key.
///
/// A missing field reads as `true` (sound on) rather than producing an
/// invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundSettings {
    /// Launch cue enabled ("flip" in the stored object).
    #[serde(default = "default_enabled")]
    pub flip: bool,
    /// Settle cue enabled ("result" in the stored object).
    #[serde(default = "default_enabled")]
    pub result: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            flip: true,
            result: true,
        }
    }
}

impl SoundSettings {
    /// Whether the given cue should be audible.
    pub fn allows(&self, cue: Cue) -> bool {
        match cue {
            Cue::Launch => self.flip,
            Cue::Settle => self.result,
        }
    }
}

/// The two audio cue points of a lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// Fired on admission, at the `Idle -> Launching` boundary.
    Launch,
    /// Fired when the coin settles, at the `Spinning -> Settled` boundary.
    Settle,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Launch => "launch",
            Cue::Settle => "settle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels_round_trip() {
        assert_eq!(Outcome::parse(Outcome::Aguila.label()), Some(Outcome::Aguila));
        assert_eq!(Outcome::parse(Outcome::Sol.label()), Some(Outcome::Sol));
    }

    #[test]
    fn test_outcome_accepts_plain_forms() {
        assert_eq!(Outcome::parse("HEADS"), Some(Outcome::Aguila));
        assert_eq!(Outcome::parse("TAILS"), Some(Outcome::Sol));
        assert_eq!(Outcome::parse("Aguila"), Some(Outcome::Aguila));
    }

    #[test]
    fn test_outcome_rejects_garbage() {
        assert_eq!(Outcome::parse(""), None);
        assert_eq!(Outcome::parse("edge"), None);
    }

    #[test]
    fn test_outcome_serde_uses_localized_label() {
        let json = serde_json::to_string(&Outcome::Aguila).unwrap();
        assert_eq!(json, "\"Águila\"");
        let back: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::Aguila);
    }

    #[test]
    fn test_sound_settings_missing_field_defaults_on() {
        let s: SoundSettings = serde_json::from_str("{\"flip\": false}").unwrap();
        assert!(!s.flip);
        assert!(s.result);

        let s: SoundSettings = serde_json::from_str("{}").unwrap();
        assert!(s.flip && s.result);
    }

    #[test]
    fn test_sound_settings_gate_cues() {
        let s = SoundSettings {
            flip: false,
            result: true,
        };
        assert!(!s.allows(Cue::Launch));
        assert!(s.allows(Cue::Settle));
    }

    #[test]
    fn test_phase_idle_gate() {
        assert!(FlipPhase::Idle.is_idle());
        assert!(!FlipPhase::Launching.is_idle());
        assert!(!FlipPhase::Spinning.is_idle());
        assert!(!FlipPhase::Settled.is_idle());
    }
}
