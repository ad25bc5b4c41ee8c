//! Audio module - generated sound effects and background music.

mod error;
mod music;
mod plugin;
pub mod synth;

pub use error::SynthError;
pub use music::{MusicMood, MusicTrack};
pub use plugin::{MusicChannel, SfxChannel, SoundBank, SoundPlugin};
