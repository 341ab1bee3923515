//! Spoken output for announcements.
//!
//! The panel queues announcements regardless of output; this module is
//! the seam that turns them into audio. The default build ships the
//! silent [`NullSpeech`], the `speech` feature adds a platform engine.

use tracing::{debug, warn};

/// Slowest supported speech rate multiplier.
pub const MIN_RATE: f32 = 0.5;
/// Fastest supported speech rate multiplier.
pub const MAX_RATE: f32 = 2.0;

/// Speech output errors.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech engine init failed: {0}")]
    InitFailed(String),

    #[error("Speech output failed: {0}")]
    OutputFailed(String),
}

/// A text-to-speech engine.
///
/// Rates are multipliers of the engine's normal rate, clamped to
/// [`MIN_RATE`]..=[`MAX_RATE`].
pub trait SpeechSynth {
    /// Prepare the engine for output. Safe to call more than once.
    fn initialize(&mut self) -> Result<(), SpeechError>;

    /// Whether [`speak`](Self::speak) can produce output right now.
    fn is_ready(&self) -> bool;

    /// Set the rate multiplier. Out-of-range values are clamped.
    fn set_rate(&mut self, rate: f32);

    fn rate(&self) -> f32;

    /// Speak `text`, interrupting anything still being spoken.
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;

    /// Stop any in-progress utterance.
    fn stop(&mut self);
}

/// Silent engine that remembers what would have been said.
///
/// Used when the `speech` feature is off or no platform engine could be
/// brought up, so the rest of the app never has to care.
#[derive(Debug, Default)]
pub struct NullSpeech {
    rate: f32,
    ready: bool,
    last: Option<String>,
}

impl NullSpeech {
    pub fn new() -> Self {
        Self {
            rate: 1.0,
            ready: false,
            last: None,
        }
    }

    /// The most recent utterance, for inspection in tests.
    pub fn last_utterance(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

impl SpeechSynth for NullSpeech {
    fn initialize(&mut self) -> Result<(), SpeechError> {
        self.ready = true;
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_rate(&mut self, rate: f32) {
        self.rate = rate.clamp(MIN_RATE, MAX_RATE);
    }

    fn rate(&self) -> f32 {
        self.rate
    }

    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        debug!("Speech (silent): {}", text);
        self.last = Some(text.to_string());
        Ok(())
    }

    fn stop(&mut self) {
        self.last = None;
    }
}

/// Platform engine backed by the `tts` crate.
#[cfg(feature = "speech")]
pub struct SystemSpeech {
    engine: Option<tts::Tts>,
    rate: f32,
}

#[cfg(feature = "speech")]
impl SystemSpeech {
    pub fn new() -> Self {
        Self {
            engine: None,
            rate: 1.0,
        }
    }

    /// Map the multiplier onto the platform's own rate range. Engines
    /// disagree wildly on units, so interpolate around normal_rate.
    fn apply_rate(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            let normal = engine.normal_rate();
            let target = if self.rate >= 1.0 {
                let span = engine.max_rate() - normal;
                normal + span * (self.rate - 1.0) / (MAX_RATE - 1.0)
            } else {
                let span = normal - engine.min_rate();
                normal - span * (1.0 - self.rate) / (1.0 - MIN_RATE)
            };
            if let Err(e) = engine.set_rate(target) {
                warn!("Failed to set speech rate: {}", e);
            }
        }
    }
}

#[cfg(feature = "speech")]
impl Default for SystemSpeech {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "speech")]
impl SpeechSynth for SystemSpeech {
    fn initialize(&mut self) -> Result<(), SpeechError> {
        if self.engine.is_some() {
            return Ok(());
        }
        let engine = tts::Tts::default().map_err(|e| SpeechError::InitFailed(e.to_string()))?;
        self.engine = Some(engine);
        self.apply_rate();
        debug!("Speech engine initialized");
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    fn set_rate(&mut self, rate: f32) {
        self.rate = rate.clamp(MIN_RATE, MAX_RATE);
        self.apply_rate();
    }

    fn rate(&self) -> f32 {
        self.rate
    }

    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        match self.engine.as_mut() {
            Some(engine) => {
                engine
                    .speak(text, true)
                    .map_err(|e| SpeechError::OutputFailed(e.to_string()))?;
                Ok(())
            }
            None => Err(SpeechError::OutputFailed(
                "engine not initialized".to_string(),
            )),
        }
    }

    fn stop(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            if let Err(e) = engine.stop() {
                warn!("Failed to stop speech: {}", e);
            }
        }
    }
}

/// Best available engine for this build, already initialized.
///
/// Falls back to [`NullSpeech`] when the platform engine cannot start,
/// so callers always get a working synth.
pub fn default_synth(rate: f32) -> Box<dyn SpeechSynth> {
    #[cfg(feature = "speech")]
    {
        let mut synth = SystemSpeech::new();
        match synth.initialize() {
            Ok(()) => {
                synth.set_rate(rate);
                return Box::new(synth);
            }
            Err(e) => {
                warn!("Speech engine unavailable, going silent: {}", e);
            }
        }
    }

    let mut synth = NullSpeech::new();
    // Cannot fail
    let _ = synth.initialize();
    synth.set_rate(rate);
    Box::new(synth)
}
