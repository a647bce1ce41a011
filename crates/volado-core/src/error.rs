//! Application error types
//!
//! No error here is fatal to the interaction: persistence and audio
//! failures degrade the feature and are logged by the caller. The only
//! non-recoverable variant is a terminal setup failure.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Persistence Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read stored '{key}': {reason}")]
    PersistenceRead { key: String, reason: String },

    #[error("Failed to write stored '{key}': {reason}")]
    PersistenceWrite { key: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Audio Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to load audio cue '{cue}': {reason}")]
    AudioLoad { cue: String, reason: String },

    #[error("Audio playback error: {reason}")]
    AudioPlayback { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn persistence_read(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PersistenceRead {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn persistence_write(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PersistenceWrite {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn audio_load(cue: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AudioLoad {
            cue: cue.into(),
            reason: reason.into(),
        }
    }

    pub fn audio_playback(reason: impl Into<String>) -> Self {
        Self::AudioPlayback {
            reason: reason.into(),
        }
    }

    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Recoverable errors degrade a feature (no sound, stale history)
    /// without interrupting the flip interaction.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::PersistenceRead { .. }
                | Error::PersistenceWrite { .. }
                | Error::AudioLoad { .. }
                | Error::AudioPlayback { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::persistence_write("flipHistory", "disk full");
        assert_eq!(
            err.to_string(),
            "Failed to write stored 'flipHistory': disk full"
        );

        let err = Error::audio_load("launch", "file missing");
        assert!(err.to_string().contains("launch"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::persistence_read("soundSettings", "corrupt").is_recoverable());
        assert!(Error::persistence_write("flipHistory", "denied").is_recoverable());
        assert!(Error::audio_playback("no device").is_recoverable());
        assert!(!Error::terminal("raw mode failed").is_recoverable());
    }
}
