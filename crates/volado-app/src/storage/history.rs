//! Durable flip history
//!
//! An append-only JSON array under the `flipHistory` key, in the exact
//! shape the store has always used: `{"result", "date", "coinType"}`
//! objects, oldest first. Reads are defensive: the store once wrote
//! `coinType` as a whole coin object instead of its label, so every
//! entry is normalized into a strongly-typed [`FlipRecord`] or dropped
//! at this boundary -- the ambiguous shape never propagates upward.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use volado_core::prelude::*;
use volado_core::{FlipRecord, FlipStats, Outcome};

use super::{read_key, write_key};

/// Storage key for the flip log.
pub const HISTORY_KEY: &str = "flipHistory";

/// Append-only log of completed flips.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{HISTORY_KEY}.json")),
        }
    }

    /// Durably append one record. Read-modify-write over the whole
    /// array; the engine's admission gate guarantees a single writer.
    /// The caller decides what to do with a failure; the engine logs and
    /// swallows it without retrying.
    pub fn append(&self, record: &FlipRecord) -> Result<()> {
        let mut entries = self.read_raw();
        entries.push(json!({
            "result": record.outcome.label(),
            "date": record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            "coinType": record.coin_label,
        }));

        let contents = serde_json::to_string(&Value::Array(entries))
            .map_err(|e| Error::persistence_write(HISTORY_KEY, e.to_string()))?;
        write_key(&self.path, HISTORY_KEY, &contents)
    }

    /// Read the full history, most-recent-first.
    ///
    /// Never fails: missing or corrupt data yields an empty sequence,
    /// and individual entries are normalized or dropped.
    pub fn read_all(&self) -> Vec<FlipRecord> {
        let mut records: Vec<FlipRecord> = self
            .read_raw()
            .iter()
            .filter_map(normalize_entry)
            .collect();
        records.reverse();
        records
    }

    /// Atomically replace the stored log with an empty sequence.
    pub fn clear(&self) -> Result<()> {
        write_key(&self.path, HISTORY_KEY, "[]")
    }

    /// Best-effort raw read of the stored array, oldest first.
    fn read_raw(&self) -> Vec<Value> {
        let contents = match read_key(&self.path, HISTORY_KEY) {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("history unreadable, starting empty: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Array(entries)) => entries,
            Ok(other) => {
                warn!("history is not an array ({other:?}), starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!("history corrupt, starting empty: {e}");
                Vec::new()
            }
        }
    }
}

/// Normalize one stored entry into a [`FlipRecord`].
///
/// - `result` must parse as an outcome, otherwise the entry is dropped;
/// - `date` must be ISO-8601, otherwise the entry is dropped;
/// - a `coinType` stored as a compound object is coerced to its `value`
///   string; anything else unrecognizable becomes `"N/A"`.
fn normalize_entry(entry: &Value) -> Option<FlipRecord> {
    let outcome = entry
        .get("result")
        .and_then(Value::as_str)
        .and_then(Outcome::parse)?;

    let timestamp = entry
        .get("date")
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())?
        .with_timezone(&Utc);

    let coin_label = match entry.get("coinType") {
        Some(Value::String(label)) => label.clone(),
        Some(Value::Object(obj)) => obj
            .get("value")
            .and_then(Value::as_str)
            .unwrap_or("N/A")
            .to_string(),
        _ => "N/A".to_string(),
    };

    Some(FlipRecord {
        outcome,
        timestamp,
        coin_label,
    })
}

/// Aggregate counts and percentages over a history.
///
/// Pure function; percentages are rounded to one decimal and defined as
/// `0` for an empty history.
pub fn compute_stats(records: &[FlipRecord]) -> FlipStats {
    let total = records.len();
    let aguila = records
        .iter()
        .filter(|r| r.outcome == Outcome::Aguila)
        .count();
    let sol = total - aguila;

    let pct = |count: usize| {
        if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64 * 1000.0).round() / 10.0
        }
    };

    FlipStats {
        total,
        aguila,
        sol,
        aguila_pct: pct(aguila),
        sol_pct: pct(sol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (tempfile::TempDir, HistoryStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = HistoryStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_read_all_empty_when_missing() {
        let (_dir, store) = store();
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_append_grows_log_by_one_preserving_order() {
        let (_dir, store) = store();

        store.append(&FlipRecord::new(Outcome::Aguila, "$1")).unwrap();
        assert_eq!(store.read_all().len(), 1);

        store.append(&FlipRecord::new(Outcome::Sol, "$5")).unwrap();
        let records = store.read_all();
        assert_eq!(records.len(), 2);

        // Most-recent-first: the $5 sol flip comes first, and the
        // earlier entry is untouched.
        assert_eq!(records[0].outcome, Outcome::Sol);
        assert_eq!(records[0].coin_label, "$5");
        assert_eq!(records[1].outcome, Outcome::Aguila);
        assert_eq!(records[1].coin_label, "$1");
    }

    #[test]
    fn test_clear_yields_empty_sequence() {
        let (_dir, store) = store();
        store.append(&FlipRecord::new(Outcome::Aguila, "$1")).unwrap();

        store.clear().unwrap();

        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_corrupt_file_reads_as_empty() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("flipHistory.json"), "{not json").unwrap();
        assert!(store.read_all().is_empty());
    }

    #[test]
    fn test_compound_coin_type_is_normalized() {
        let (dir, store) = store();
        // The shape the buggy writer produced: the whole coin object
        // instead of its label.
        let stored = r#"[{
            "result": "Águila",
            "date": "2024-11-02T17:20:00.000Z",
            "coinType": {"id": "2p", "value": "$2"}
        }]"#;
        std::fs::write(dir.path().join("flipHistory.json"), stored).unwrap();

        let records = store.read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].coin_label, "$2");
        assert_eq!(records[0].outcome, Outcome::Aguila);
    }

    #[test]
    fn test_entry_without_valid_outcome_is_dropped() {
        let (dir, store) = store();
        let stored = r#"[
            {"result": "edge", "date": "2024-11-02T17:20:00.000Z", "coinType": "$1"},
            {"result": "Sol", "date": "2024-11-02T17:21:00.000Z", "coinType": "$1"}
        ]"#;
        std::fs::write(dir.path().join("flipHistory.json"), stored).unwrap();

        let records = store.read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].outcome, Outcome::Sol);
    }

    #[test]
    fn test_plain_heads_tails_labels_accepted() {
        let (dir, store) = store();
        let stored = r#"[
            {"result": "HEADS", "date": "2024-11-02T17:20:00.000Z", "coinType": "$1"}
        ]"#;
        std::fs::write(dir.path().join("flipHistory.json"), stored).unwrap();
        assert_eq!(store.read_all()[0].outcome, Outcome::Aguila);
    }

    #[test]
    fn test_compute_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.aguila, 0);
        assert_eq!(stats.sol, 0);
        assert_eq!(stats.aguila_pct, 0.0);
        assert_eq!(stats.sol_pct, 0.0);
    }

    #[test]
    fn test_compute_stats_counts_and_percentages() {
        let records = vec![
            FlipRecord::new(Outcome::Aguila, "$1"),
            FlipRecord::new(Outcome::Aguila, "$1"),
            FlipRecord::new(Outcome::Sol, "$1"),
        ];
        let stats = compute_stats(&records);

        assert_eq!(stats.aguila + stats.sol, stats.total);
        assert_eq!(stats.aguila_pct, 66.7);
        assert_eq!(stats.sol_pct, 33.3);
        assert!((stats.aguila_pct + stats.sol_pct - 100.0).abs() <= 0.1);
    }

    #[test]
    fn test_stored_shape_matches_legacy_layout() {
        let (dir, store) = store();
        store.append(&FlipRecord::new(Outcome::Sol, "$10")).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("flipHistory.json")).unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        let entry = &parsed.as_array().unwrap()[0];

        assert_eq!(entry["result"], "Sol");
        assert_eq!(entry["coinType"], "$10");
        // ISO-8601 with a Z suffix, as the original writer produced
        assert!(entry["date"].as_str().unwrap().ends_with('Z'));
    }
}
