//! Global events used for cross-system communication.
//!
//! The game logic never talks to the audio backend directly. It sends
//! [`SfxEvent`]s and the audio plugin plays them if it can.

use bevy::prelude::*;

/// Short sound cues the game can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Click,
    Attack,
    Magic,
    Item,
    LevelUp,
    GameOver,
    Victory,
    /// Cursor or step movement
    Arrow,
    /// Confirm in battle
    Enter,
}

impl Sfx {
    pub const ALL: [Sfx; 9] = [
        Sfx::Click,
        Sfx::Attack,
        Sfx::Magic,
        Sfx::Item,
        Sfx::LevelUp,
        Sfx::GameOver,
        Sfx::Victory,
        Sfx::Arrow,
        Sfx::Enter,
    ];
}

/// Fire-and-forget request to play a sound effect.
#[derive(Event, Debug, Clone, Copy)]
pub struct SfxEvent(pub Sfx);

/// Sent by the audio plugin when the victory track has played through.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct VictoryMusicFinished;
