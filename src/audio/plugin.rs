//! Audio plugin - synthesized sound effects and mood-driven music.

use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use bevy_kira_audio::AudioSource;
use std::collections::HashMap;
use std::time::Duration;

use super::error::SynthError;
use super::music::{MusicMood, MusicTrack};
use super::synth::{render_sequence, render_tone, sfx_tone, to_sound, SAMPLE_RATE};
use crate::core::{GameConfig, GameState, Sfx, SfxEvent, VictoryMusicFinished};
use crate::game::GameSession;

const CROSSFADE: Duration = Duration::from_millis(600);

/// Audio plugin - builds every sound at startup and plays them on request.
///
/// Requires `bevy_kira_audio::AudioPlugin`; `DragonsLairPlugin` adds it.
pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_audio_channel::<MusicChannel>()
            .add_audio_channel::<SfxChannel>()
            .init_resource::<MusicMood>()
            .init_resource::<NowPlaying>()
            .add_systems(Startup, (build_sound_bank, apply_volume))
            .add_systems(
                Update,
                (
                    update_music_mood,
                    switch_music,
                    watch_victory_track,
                    play_sound_effects,
                )
                    .chain()
                    .run_if(resource_exists::<SoundBank>),
            );
    }
}

/// Channel for the looping background track.
#[derive(Resource)]
pub struct MusicChannel;

/// Channel for short cues.
#[derive(Resource)]
pub struct SfxChannel;

/// Every generated sound. Absent when synthesis failed, which disables audio.
#[derive(Resource, Default)]
pub struct SoundBank {
    effects: HashMap<Sfx, Handle<AudioSource>>,
    tracks: HashMap<MusicTrack, Handle<AudioSource>>,
}

/// The music track currently on the music channel.
#[derive(Resource, Default)]
struct NowPlaying {
    track: Option<MusicTrack>,
    instance: Option<Handle<AudioInstance>>,
    /// Victory completion already reported
    reported: bool,
}

fn synthesize(sources: &mut Assets<AudioSource>) -> Result<SoundBank, SynthError> {
    let mut bank = SoundBank::default();
    for sfx in Sfx::ALL {
        let samples = render_tone(&sfx_tone(sfx), SAMPLE_RATE)?;
        let handle = sources.add(AudioSource {
            sound: to_sound(&samples, SAMPLE_RATE),
        });
        bank.effects.insert(sfx, handle);
    }
    for track in MusicTrack::ALL {
        let samples = render_sequence(&track.score(), SAMPLE_RATE)?;
        let handle = sources.add(AudioSource {
            sound: to_sound(&samples, SAMPLE_RATE),
        });
        bank.tracks.insert(track, handle);
    }
    Ok(bank)
}

fn build_sound_bank(mut commands: Commands, mut sources: ResMut<Assets<AudioSource>>) {
    match synthesize(&mut sources) {
        Ok(bank) => {
            info!(
                "Synthesized {} sound effects and {} music tracks",
                bank.effects.len(),
                bank.tracks.len()
            );
            commands.insert_resource(bank);
        }
        Err(e) => warn!("Sound synthesis failed: {}. Audio disabled.", e),
    }
}

fn apply_volume(
    config: Res<GameConfig>,
    music: Res<AudioChannel<MusicChannel>>,
    sfx: Res<AudioChannel<SfxChannel>>,
) {
    let volume = if config.muted { 0.0 } else { config.master_volume.clamp(0.0, 1.0) };
    music.set_volume(volume);
    sfx.set_volume(volume);
}

/// Derive the music mood from the game state and session.
fn update_music_mood(
    state: Res<State<GameState>>,
    session: Res<GameSession>,
    mut mood: ResMut<MusicMood>,
) {
    let next = MusicMood {
        state: *state.get(),
        boss_battle: session.battle.as_ref().is_some_and(|battle| battle.is_boss()),
        biome: session
            .player
            .as_ref()
            .map(|_| session.world.current_area().biome),
    };
    // Only touch the resource on change so `is_changed` stays meaningful
    if *mood != next {
        *mood = next;
    }
}

fn switch_music(
    mood: Res<MusicMood>,
    bank: Res<SoundBank>,
    music: Res<AudioChannel<MusicChannel>>,
    mut now_playing: ResMut<NowPlaying>,
) {
    if !mood.is_changed() {
        return;
    }
    let track = MusicTrack::for_mood(&mood);
    if now_playing.track == Some(track) {
        return;
    }
    let Some(source) = bank.tracks.get(&track) else {
        return;
    };

    debug!("Music: {:?} -> {:?}", now_playing.track, track);
    music.stop().fade_out(AudioTween::linear(CROSSFADE));
    let mut command = music.play(source.clone());
    command.fade_in(AudioTween::linear(CROSSFADE));
    if track.loops() {
        command.looped();
    }
    *now_playing = NowPlaying {
        track: Some(track),
        instance: Some(command.handle()),
        reported: false,
    };
}

/// Report once when the victory track has played through.
fn watch_victory_track(
    music: Res<AudioChannel<MusicChannel>>,
    mut now_playing: ResMut<NowPlaying>,
    mut finished: EventWriter<VictoryMusicFinished>,
) {
    if now_playing.track != Some(MusicTrack::Victory) || now_playing.reported {
        return;
    }
    let Some(instance) = &now_playing.instance else {
        return;
    };
    if matches!(music.state(instance), PlaybackState::Stopped) {
        now_playing.reported = true;
        finished.send(VictoryMusicFinished);
    }
}

fn play_sound_effects(
    mut cues: EventReader<SfxEvent>,
    bank: Res<SoundBank>,
    sfx: Res<AudioChannel<SfxChannel>>,
) {
    for SfxEvent(cue) in cues.read() {
        if let Some(source) = bank.effects.get(cue) {
            sfx.play(source.clone());
        }
    }
}
