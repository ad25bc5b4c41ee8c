//! Music selection.
//!
//! The game publishes a [`MusicMood`]; this module maps it to a track and
//! describes each track as a short synthesized loop.

use bevy::prelude::*;

use super::synth::{Tone, Waveform};
use crate::core::GameState;
use crate::world::Biome;

/// What the music should reflect right now.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MusicMood {
    pub state: GameState,
    pub boss_battle: bool,
    /// Biome of the current area while a run is active
    pub biome: Option<Biome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Title,
    Field,
    Town,
    Ominous,
    Frost,
    Battle,
    BossBattle,
    Defeat,
    Victory,
}

impl MusicTrack {
    pub const ALL: [MusicTrack; 9] = [
        MusicTrack::Title,
        MusicTrack::Field,
        MusicTrack::Town,
        MusicTrack::Ominous,
        MusicTrack::Frost,
        MusicTrack::Battle,
        MusicTrack::BossBattle,
        MusicTrack::Defeat,
        MusicTrack::Victory,
    ];

    pub fn for_mood(mood: &MusicMood) -> Self {
        match mood.state {
            GameState::StartMenu | GameState::OpeningCutscene | GameState::CharacterSelect => {
                MusicTrack::Title
            }
            GameState::Overworld => match mood.biome {
                Some(Biome::Town) => MusicTrack::Town,
                Some(Biome::Volcano | Biome::Castle | Biome::Swamp | Biome::Cave) => {
                    MusicTrack::Ominous
                }
                Some(Biome::Ice | Biome::Mountain) => MusicTrack::Frost,
                _ => MusicTrack::Field,
            },
            GameState::Battle if mood.boss_battle => MusicTrack::BossBattle,
            GameState::Battle => MusicTrack::Battle,
            GameState::GameOver => MusicTrack::Defeat,
            GameState::Victory => MusicTrack::Victory,
        }
    }

    /// Victory plays once so its end can be detected.
    pub fn loops(self) -> bool {
        self != MusicTrack::Victory
    }

    pub fn score(self) -> Vec<Tone> {
        let (notes, note_ms, waveform, volume): (&[f32], u32, Waveform, f32) = match self {
            MusicTrack::Title => (
                &[262.0, 330.0, 392.0, 523.0, 392.0, 330.0, 294.0, 0.0],
                300,
                Waveform::Sine,
                0.25,
            ),
            MusicTrack::Field => (
                &[392.0, 440.0, 494.0, 587.0, 494.0, 440.0, 392.0, 330.0],
                250,
                Waveform::Sine,
                0.2,
            ),
            MusicTrack::Town => (
                &[523.0, 659.0, 784.0, 659.0, 587.0, 523.0, 0.0, 0.0],
                280,
                Waveform::Sine,
                0.2,
            ),
            MusicTrack::Ominous => (
                &[110.0, 117.0, 110.0, 98.0, 110.0, 131.0, 123.0, 0.0],
                350,
                Waveform::Sawtooth,
                0.15,
            ),
            MusicTrack::Frost => (
                &[659.0, 0.0, 784.0, 0.0, 880.0, 784.0, 659.0, 0.0],
                300,
                Waveform::Sine,
                0.18,
            ),
            MusicTrack::Battle => (
                &[220.0, 220.0, 262.0, 220.0, 294.0, 262.0, 247.0, 196.0],
                150,
                Waveform::Square,
                0.12,
            ),
            MusicTrack::BossBattle => (
                &[147.0, 147.0, 156.0, 147.0, 175.0, 165.0, 156.0, 139.0],
                130,
                Waveform::Sawtooth,
                0.15,
            ),
            MusicTrack::Defeat => (
                &[392.0, 370.0, 349.0, 330.0, 0.0, 0.0],
                500,
                Waveform::Sine,
                0.22,
            ),
            MusicTrack::Victory => (
                &[523.0, 523.0, 523.0, 659.0, 784.0, 0.0, 659.0, 784.0, 1047.0, 1047.0],
                320,
                Waveform::Square,
                0.15,
            ),
        };
        notes
            .iter()
            .map(|&frequency| {
                if frequency == 0.0 {
                    Tone::rest(note_ms)
                } else {
                    Tone::new(frequency, note_ms, volume, waveform)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::synth::{render_sequence, SAMPLE_RATE};

    fn mood(state: GameState, boss_battle: bool, biome: Option<Biome>) -> MusicMood {
        MusicMood {
            state,
            boss_battle,
            biome,
        }
    }

    #[test]
    fn battle_music_depends_on_boss() {
        assert_eq!(MusicTrack::for_mood(&mood(GameState::Battle, false, None)), MusicTrack::Battle);
        assert_eq!(
            MusicTrack::for_mood(&mood(GameState::Battle, true, Some(Biome::Plains))),
            MusicTrack::BossBattle
        );
    }

    #[test]
    fn overworld_music_follows_biome() {
        assert_eq!(
            MusicTrack::for_mood(&mood(GameState::Overworld, false, Some(Biome::Town))),
            MusicTrack::Town
        );
        assert_eq!(
            MusicTrack::for_mood(&mood(GameState::Overworld, false, Some(Biome::Volcano))),
            MusicTrack::Ominous
        );
        assert_eq!(
            MusicTrack::for_mood(&mood(GameState::Overworld, false, Some(Biome::Plains))),
            MusicTrack::Field
        );
    }

    #[test]
    fn only_victory_plays_once() {
        assert!(!MusicTrack::Victory.loops());
        assert!(MusicTrack::ALL.iter().filter(|t| !t.loops()).count() == 1);
    }

    #[test]
    fn every_track_renders() {
        for track in MusicTrack::ALL {
            let samples = render_sequence(&track.score(), SAMPLE_RATE).unwrap();
            assert!(!samples.is_empty(), "{track:?}");
        }
    }
}
