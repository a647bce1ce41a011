//! Audio cue service
//!
//! Two short cues mark the lifecycle boundaries: "launch" when a flip is
//! admitted and "settle" when the coin lands. Playback is fire-and-forget
//! and gated by the cached sound settings; a missing asset or a device
//! without audio degrades to silence, never blocking the lifecycle.
//!
//! The output stream and decoded samples are owned by the backend and
//! released when it drops, so the acquire/release pair holds on every
//! exit path.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use rodio::buffer::SamplesBuffer;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use volado_core::prelude::*;
use volado_core::{Cue, SoundSettings};

/// Playback backend seam. The production implementation talks to rodio;
/// tests substitute a recording backend.
pub trait CueBackend {
    fn play(&mut self, cue: Cue) -> Result<()>;
}

/// Decoded, preloaded samples for one cue.
#[derive(Debug, Clone)]
struct CueSamples {
    channels: u16,
    sample_rate: u32,
    samples: Vec<f32>,
}

/// Real playback over the default audio device.
pub struct RodioBackend {
    // Must stay alive for the handle to keep working.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    samples: HashMap<Cue, CueSamples>,
    sinks: HashMap<Cue, Sink>,
}

impl RodioBackend {
    /// Open the default output device and preload both cue assets.
    ///
    /// Looks for `launch.wav` / `settle.wav` under `assets_dir`; a cue
    /// that fails to load falls back to a short synthesized tone.
    pub fn acquire(assets_dir: &Path) -> Result<Self> {
        let (stream, handle) =
            OutputStream::try_default().map_err(|e| Error::audio_playback(e.to_string()))?;

        let mut samples = HashMap::new();
        for cue in [Cue::Launch, Cue::Settle] {
            let loaded = match load_cue_file(assets_dir, cue) {
                Ok(s) => s,
                Err(e) => {
                    debug!("{e}; using synthesized {} cue", cue.name());
                    synthesize(cue)
                }
            };
            samples.insert(cue, loaded);
        }

        Ok(Self {
            _stream: stream,
            handle,
            samples,
            sinks: HashMap::new(),
        })
    }
}

impl CueBackend for RodioBackend {
    /// Replay semantics: an in-progress playback of the same cue is
    /// stopped and the cue restarts from the beginning.
    fn play(&mut self, cue: Cue) -> Result<()> {
        let samples = self
            .samples
            .get(&cue)
            .ok_or_else(|| Error::audio_load(cue.name(), "cue not loaded"))?;

        if let Some(previous) = self.sinks.remove(&cue) {
            previous.stop();
        }

        let sink =
            Sink::try_new(&self.handle).map_err(|e| Error::audio_playback(e.to_string()))?;
        sink.append(SamplesBuffer::new(
            samples.channels,
            samples.sample_rate,
            samples.samples.clone(),
        ));
        self.sinks.insert(cue, sink);
        Ok(())
    }
}

/// Decode one cue's WAV file into memory.
fn load_cue_file(assets_dir: &Path, cue: Cue) -> Result<CueSamples> {
    let path = assets_dir.join(format!("{}.wav", cue.name()));
    let bytes = std::fs::read(&path)
        .map_err(|e| Error::audio_load(cue.name(), format!("{}: {e}", path.display())))?;

    let decoder = Decoder::new(Cursor::new(bytes))
        .map_err(|e| Error::audio_load(cue.name(), e.to_string()))?;
    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.convert_samples().collect();

    Ok(CueSamples {
        channels,
        sample_rate,
        samples,
    })
}

const SYNTH_SAMPLE_RATE: u32 = 44_100;

/// Built-in fallback tones so the cues work without bundled media.
fn synthesize(cue: Cue) -> CueSamples {
    let samples = match cue {
        // Rising whoosh for the launch
        Cue::Launch => render_sweep(0.12, 300.0, 900.0, 0.2),
        // Two-note ding for the settle
        Cue::Settle => {
            let mut samples = render_sweep(0.12, 520.0, 520.0, 0.15);
            samples.extend(render_sweep(0.15, 680.0, 680.0, 0.15));
            samples
        }
    };
    CueSamples {
        channels: 1,
        sample_rate: SYNTH_SAMPLE_RATE,
        samples,
    }
}

/// Render a mono sine sweep with a linear fade-out envelope.
fn render_sweep(duration: f32, from_hz: f32, to_hz: f32, amplitude: f32) -> Vec<f32> {
    let count = (SYNTH_SAMPLE_RATE as f32 * duration) as usize;
    let mut phase = 0.0f32;
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let hz = from_hz + (to_hz - from_hz) * t;
            phase += std::f32::consts::TAU * hz / SYNTH_SAMPLE_RATE as f32;
            phase.sin() * amplitude * (1.0 - t)
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Service
// ─────────────────────────────────────────────────────────────────────────────

/// Settings-gated cue dispatch over an optional backend.
///
/// `None` means audio is unavailable (failed acquire or explicit
/// release); every play degrades to a silent no-op.
pub struct AudioCueService<B: CueBackend> {
    backend: Option<B>,
}

impl AudioCueService<RodioBackend> {
    /// Acquire the audio device and preload the cues. Failure is logged
    /// and yields a silent service; the flip interaction stays available.
    pub fn acquire(assets_dir: &Path) -> Self {
        match RodioBackend::acquire(assets_dir) {
            Ok(backend) => Self {
                backend: Some(backend),
            },
            Err(e) => {
                warn!("audio unavailable, cues disabled: {e}");
                Self { backend: None }
            }
        }
    }
}

impl<B: CueBackend> AudioCueService<B> {
    /// Service over an explicit backend (tests, headless runs).
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A service that never plays anything.
    pub fn silent() -> Self {
        Self { backend: None }
    }

    /// Play a cue, gated by the given settings. Fire-and-forget: any
    /// playback failure is logged and swallowed.
    pub fn play(&mut self, cue: Cue, settings: &SoundSettings) {
        if !settings.allows(cue) {
            debug!("{} cue muted by settings", cue.name());
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(e) = backend.play(cue) {
            warn!("{} cue playback failed: {e}", cue.name());
        }
    }

    /// Unload the assets and close the device. Idempotent; also runs
    /// implicitly when the service drops.
    pub fn release(&mut self) {
        self.backend = None;
    }

    /// Whether a backend is currently held.
    pub fn is_acquired(&self) -> bool {
        self.backend.is_some()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording backend (test support)
// ─────────────────────────────────────────────────────────────────────────────

/// Backend that records every play instead of making sound. Used by the
/// engine tests to observe cue dispatch.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    played: std::sync::Arc<std::sync::Mutex<Vec<Cue>>>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cues played so far, in order.
    pub fn played(&self) -> Vec<Cue> {
        self.played.lock().expect("recording backend poisoned").clone()
    }
}

impl CueBackend for RecordingBackend {
    fn play(&mut self, cue: Cue) -> Result<()> {
        self.played.lock().expect("recording backend poisoned").push(cue);
        Ok(())
    }
}
