//! Durable sound settings
//!
//! A single logical row under the `soundSettings` key, read through an
//! in-memory cache. The cache is the one source of truth for cue gating;
//! it is refreshed by `reload()` on screen focus changes and updated
//! synchronously with every `save()`, so a toggle applies to the very
//! next cue with no staleness window.

use std::path::{Path, PathBuf};

use volado_core::prelude::*;
use volado_core::SoundSettings;

use super::{read_key, write_key};

/// Storage key for the settings row.
pub const SETTINGS_KEY: &str = "soundSettings";

#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    cached: SoundSettings,
}

impl SettingsStore {
    /// Open the store and populate the cache from durable storage.
    pub fn new(data_dir: &Path) -> Self {
        let mut store = Self {
            path: data_dir.join(format!("{SETTINGS_KEY}.json")),
            cached: SoundSettings::default(),
        };
        store.reload();
        store
    }

    /// Current settings (cached read).
    pub fn cached(&self) -> SoundSettings {
        self.cached
    }

    /// Read-through load: returns the cached row, which was populated
    /// from durable storage on open.
    pub fn load(&self) -> SoundSettings {
        self.cached
    }

    /// Durably overwrite the settings row. The cache is updated before
    /// the write, so same-process reads observe the new value
    /// immediately even if the write fails (availability over
    /// durability).
    pub fn save(&mut self, settings: SoundSettings) -> Result<()> {
        self.cached = settings;
        let contents = serde_json::to_string(&settings)
            .map_err(|e| Error::persistence_write(SETTINGS_KEY, e.to_string()))?;
        write_key(&self.path, SETTINGS_KEY, &contents)
    }

    /// Force a fresh durable read, refreshing the cache. Absent or
    /// unreadable data yields the defaults (both cues on).
    pub fn reload(&mut self) -> SoundSettings {
        self.cached = match read_key(&self.path, SETTINGS_KEY) {
            Ok(Some(contents)) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("settings corrupt, using defaults: {e}");
                SoundSettings::default()
            }),
            Ok(None) => SoundSettings::default(),
            Err(e) => {
                warn!("settings unreadable, using defaults: {e}");
                SoundSettings::default()
            }
        };
        self.cached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        assert_eq!(store.load(), SoundSettings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::new(dir.path());

        let settings = SoundSettings {
            flip: false,
            result: true,
        };
        store.save(settings).unwrap();

        // Same-process cached read
        assert_eq!(store.load(), settings);

        // Fresh store sees the durable row
        let fresh = SettingsStore::new(dir.path());
        assert_eq!(fresh.load(), settings);
    }

    #[test]
    fn test_reload_picks_up_external_change() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SettingsStore::new(dir.path());
        assert!(store.load().flip);

        // Another screen wrote the row
        std::fs::write(
            dir.path().join("soundSettings.json"),
            "{\"flip\": false, \"result\": false}",
        )
        .unwrap();

        let reloaded = store.reload();
        assert!(!reloaded.flip);
        assert!(!reloaded.result);
    }

    #[test]
    fn test_corrupt_row_reads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("soundSettings.json"), "nonsense").unwrap();

        let store = SettingsStore::new(dir.path());
        assert_eq!(store.load(), SoundSettings::default());
    }

    #[test]
    fn test_missing_field_defaults_on() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("soundSettings.json"), "{\"flip\": false}").unwrap();

        let store = SettingsStore::new(dir.path());
        assert!(!store.load().flip);
        assert!(store.load().result);
    }
}
