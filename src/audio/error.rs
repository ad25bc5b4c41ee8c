//! Error types for tone synthesis.

use thiserror::Error;

/// Errors that can occur while generating a sound.
#[derive(Debug, Error, PartialEq)]
pub enum SynthError {
    #[error("Frequency {0} Hz is not playable")]
    InvalidFrequency(f32),

    #[error("Volume {0} is outside 0.0..=1.0")]
    InvalidVolume(f32),

    /// Duration and sample rate produced no samples.
    #[error("Tone of {duration_ms} ms at {sample_rate} Hz has no samples")]
    EmptyTone { duration_ms: u32, sample_rate: u32 },
}
