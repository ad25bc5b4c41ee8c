//! Runtime tone synthesis.
//!
//! Every sound in the game is generated here from a waveform description and
//! handed to kira as an in-memory [`StaticSoundData`]. Nothing is loaded from
//! disk.

use bevy_kira_audio::prelude::*;
use std::f32::consts::TAU;
use std::sync::Arc;

use super::error::SynthError;
use crate::core::Sfx;

pub const SAMPLE_RATE: u32 = 44_100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

impl Waveform {
    /// Sample at `phase` cycles, result in -1.0..=1.0.
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (phase * TAU).sin(),
            Waveform::Square => {
                if (phase * TAU).sin() >= 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Sawtooth => 2.0 * (phase - (phase + 0.5).floor()),
        }
    }
}

/// A single tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration_ms: u32,
    pub volume: f32,
    pub waveform: Waveform,
}

impl Tone {
    pub const fn new(frequency: f32, duration_ms: u32, volume: f32, waveform: Waveform) -> Self {
        Self {
            frequency,
            duration_ms,
            volume,
            waveform,
        }
    }

    /// A silent gap of the given length.
    pub const fn rest(duration_ms: u32) -> Self {
        Self::new(0.0, duration_ms, 0.0, Waveform::Sine)
    }

    fn is_rest(&self) -> bool {
        self.frequency == 0.0 && self.volume == 0.0
    }
}

/// Tone played for each sound cue.
pub fn sfx_tone(sfx: Sfx) -> Tone {
    match sfx {
        Sfx::Click => Tone::new(800.0, 60, 0.5, Waveform::Square),
        Sfx::Attack => Tone::new(200.0, 120, 0.5, Waveform::Square),
        Sfx::Magic => Tone::new(1200.0, 200, 0.5, Waveform::Sine),
        Sfx::Item => Tone::new(1000.0, 80, 0.5, Waveform::Sine),
        Sfx::LevelUp => Tone::new(1500.0, 300, 0.5, Waveform::Sine),
        Sfx::GameOver => Tone::new(100.0, 400, 0.5, Waveform::Sine),
        Sfx::Victory => Tone::new(900.0, 500, 0.5, Waveform::Sine),
        Sfx::Arrow => Tone::new(600.0, 40, 0.4, Waveform::Square),
        Sfx::Enter => Tone::new(1200.0, 80, 0.5, Waveform::Sine),
    }
}

/// Render one tone into mono samples.
///
/// A short linear fade at both ends keeps square waves from clicking.
pub fn render_tone(tone: &Tone, sample_rate: u32) -> Result<Vec<f32>, SynthError> {
    if !(0.0..=1.0).contains(&tone.volume) {
        return Err(SynthError::InvalidVolume(tone.volume));
    }
    let len = (sample_rate as u64 * tone.duration_ms as u64 / 1000) as usize;
    if len == 0 {
        return Err(SynthError::EmptyTone {
            duration_ms: tone.duration_ms,
            sample_rate,
        });
    }
    if tone.is_rest() {
        return Ok(vec![0.0; len]);
    }
    let nyquist = sample_rate as f32 / 2.0;
    if !tone.frequency.is_finite() || tone.frequency <= 0.0 || tone.frequency >= nyquist {
        return Err(SynthError::InvalidFrequency(tone.frequency));
    }

    let ramp = (len / 20).max(1);
    let samples = (0..len)
        .map(|i| {
            let phase = tone.frequency * i as f32 / sample_rate as f32;
            let edge = i.min(len - 1 - i);
            let envelope = (edge as f32 / ramp as f32).min(1.0);
            tone.waveform.sample(phase) * tone.volume * envelope
        })
        .collect();
    Ok(samples)
}

/// Render a sequence of tones back to back.
pub fn render_sequence(tones: &[Tone], sample_rate: u32) -> Result<Vec<f32>, SynthError> {
    let mut samples = Vec::new();
    for tone in tones {
        samples.extend(render_tone(tone, sample_rate)?);
    }
    Ok(samples)
}

/// Wrap mono samples as a kira sound.
pub fn to_sound(samples: &[f32], sample_rate: u32) -> StaticSoundData {
    let frames: Arc<[Frame]> = samples.iter().map(|s| Frame::from_mono(*s)).collect();
    StaticSoundData {
        sample_rate,
        frames,
        settings: StaticSoundSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_length_follows_duration() {
        let samples = render_tone(&Tone::new(440.0, 100, 0.5, Waveform::Sine), 10_000).unwrap();
        assert_eq!(samples.len(), 1000);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
    }

    #[test]
    fn square_wave_reaches_full_volume() {
        let samples = render_tone(&sfx_tone(Sfx::Attack), SAMPLE_RATE).unwrap();
        let peak = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert!((peak - 0.5).abs() < 1e-6);
    }

    #[test]
    fn bad_tones_are_rejected() {
        assert_eq!(
            render_tone(&Tone::new(-5.0, 100, 0.5, Waveform::Sine), SAMPLE_RATE),
            Err(SynthError::InvalidFrequency(-5.0))
        );
        assert_eq!(
            render_tone(&Tone::new(440.0, 100, 1.5, Waveform::Sine), SAMPLE_RATE),
            Err(SynthError::InvalidVolume(1.5))
        );
        assert!(matches!(
            render_tone(&Tone::new(440.0, 0, 0.5, Waveform::Sine), SAMPLE_RATE),
            Err(SynthError::EmptyTone { .. })
        ));
    }

    #[test]
    fn rests_are_silent() {
        let tones = [Tone::rest(10), Tone::new(300.0, 10, 0.3, Waveform::Sawtooth)];
        let samples = render_sequence(&tones, 1000).unwrap();
        assert_eq!(samples.len(), 20);
        assert!(samples[..10].iter().all(|s| *s == 0.0));
    }

    #[test]
    fn every_cue_renders() {
        for sfx in Sfx::ALL {
            assert!(render_tone(&sfx_tone(sfx), SAMPLE_RATE).is_ok(), "{sfx:?}");
        }
    }

    #[test]
    fn waveforms_stay_in_range() {
        for waveform in [Waveform::Sine, Waveform::Square, Waveform::Sawtooth] {
            for i in 0..100 {
                let value = waveform.sample(i as f32 * 0.037);
                assert!((-1.0..=1.0).contains(&value));
            }
        }
    }
}
