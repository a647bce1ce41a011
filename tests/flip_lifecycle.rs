//! End-to-end flip lifecycle over a real engine, real timers, and
//! durable storage.

use std::time::{Duration, Instant};

use volado_app::{AudioCueService, Engine, HistoryStore, Message, RecordingBackend, SettingsStore};
use volado_core::{Cue, FlipPhase, Outcome};

fn engine_in(dir: &std::path::Path) -> (Engine<RecordingBackend>, RecordingBackend) {
    let backend = RecordingBackend::new();
    let engine = Engine::new(dir, AudioCueService::with_backend(backend.clone()));
    (engine, backend)
}

/// Pump real timer messages until the lifecycle settles.
async fn settle(engine: &mut Engine<RecordingBackend>) {
    tokio::time::timeout(Duration::from_secs(10), async {
        while !(engine.state.phase == FlipPhase::Idle && engine.state.last_outcome.is_some()) {
            let msg = engine.next_message().await.expect("channel open");
            engine.process_message(msg);
        }
    })
    .await
    .expect("flip should settle");
}

#[tokio::test]
async fn swipe_to_settled_record_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, backend) = engine_in(dir.path());

    // Simulated upward swipe past the trigger threshold
    let started = Instant::now();
    engine.process_message(Message::DragStarted);
    engine.process_message(Message::DragMoved { dy: -70.0 });
    engine.process_message(Message::DragReleased);
    assert_eq!(engine.state.phase, FlipPhase::Launching);

    settle(&mut engine).await;

    // The two phases take 1.5s of wall time together
    assert!(started.elapsed() >= Duration::from_millis(1500));

    let record = engine.state.last_outcome.clone().expect("settled");
    assert!(matches!(record.outcome, Outcome::Aguila | Outcome::Sol));
    assert_eq!(record.coin_label, "$1");
    assert_eq!(backend.played(), vec![Cue::Launch, Cue::Settle]);

    // Detached append lands shortly after the settle
    let store = HistoryStore::new(dir.path());
    tokio::time::timeout(Duration::from_secs(5), async {
        while store.read_all().is_empty() {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("history should persist");

    let persisted = store.read_all();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].outcome, record.outcome);
    assert_eq!(persisted[0].coin_label, "$1");
}

#[tokio::test]
async fn second_request_mid_flight_is_dropped() {
    let dir = tempfile::tempdir().unwrap();
    let (mut engine, _backend) = engine_in(dir.path());

    engine.process_message(Message::FlipRequested);
    engine.process_message(Message::FlipRequested);
    settle(&mut engine).await;

    let store = HistoryStore::new(dir.path());
    tokio::time::timeout(Duration::from_secs(5), async {
        while store.read_all().is_empty() {
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("append should persist");

    // A brief grace period: a second (buggy) lifecycle would still be
    // appending at this point.
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(engine.state.history.len(), 1);
    assert_eq!(store.read_all().len(), 1);
}

#[tokio::test]
async fn settings_survive_restart_and_mute_cues() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (mut engine, _backend) = engine_in(dir.path());
        engine.process_message(Message::ToggleAllSounds);
    }

    // The toggle was written through; a fresh process starts muted.
    let settings = SettingsStore::new(dir.path()).load();
    assert!(!settings.flip);
    assert!(!settings.result);

    let (mut engine, backend) = engine_in(dir.path());
    engine.process_message(Message::FlipRequested);
    settle(&mut engine).await;

    assert!(backend.played().is_empty());
}
