//! Durable storage - a small key-value layout over JSON files
//!
//! Two independent keyed records live under the data directory, one file
//! per key: `flipHistory.json` (append-only flip log) and
//! `soundSettings.json` (single settings row). Writes take an exclusive
//! file lock and truncate only after acquiring it; reads take a shared
//! lock, so a detached append and a concurrent history load never observe
//! each other mid-write.

pub mod history;
pub mod settings;

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use volado_core::prelude::*;

pub use history::{compute_stats, HistoryStore, HISTORY_KEY};
pub use settings::{SettingsStore, SETTINGS_KEY};

/// Default data directory: `~/.local/share/volado` (platform equivalent).
pub fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("volado")
}

/// Read the raw contents stored under a key, holding a shared lock so an
/// in-progress write is never observed half-done. `Ok(None)` when the key
/// has never been written.
pub(crate) fn read_key(path: &Path, key: &str) -> Result<Option<String>> {
    let mut file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::persistence_read(key, e.to_string())),
    };

    file.lock_shared()
        .map_err(|e| Error::persistence_read(key, e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| Error::persistence_read(key, e.to_string()))?;

    // Lock released when the file handle drops
    Ok(Some(contents))
}

/// Overwrite the contents stored under a key.
///
/// The exclusive lock is acquired before the file is truncated; a reader
/// holding the shared lock sees either the previous contents or the new
/// ones, never an empty or partial file.
pub(crate) fn write_key(path: &Path, key: &str, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::persistence_write(key, e.to_string()))?;
    }

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::persistence_write(key, e.to_string()))?;

    file.lock_exclusive()
        .map_err(|e| Error::persistence_write(key, e.to_string()))?;

    file.set_len(0)
        .map_err(|e| Error::persistence_write(key, e.to_string()))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::persistence_write(key, e.to_string()))?;
    file.flush()
        .map_err(|e| Error::persistence_write(key, e.to_string()))?;

    // Lock released when the file handle drops
    Ok(())
}
