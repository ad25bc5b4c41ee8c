//! Dragon's Lair - a top-down 2D RPG in Bevy.
//!
//! Pick a class, roam a 3x3 world of biomes, and fight turn-based battles.
//! Every level gained summons a dragon; reaching level ten brings Malakor.
//!
//! # Architecture
//!
//! Gameplay is plain data advanced by pure functions. Bevy only feeds input
//! in on a fixed tick and draws the result:
//!
//! - **Core**: Game states, config, logical input, global events
//! - **Player**: Classes, stats, leveling
//! - **Enemies**: Enemy kinds, stat tables, chase behavior
//! - **World**: Area grid, towns, items, spawning
//! - **Combat**: Battle state machine, boss triggers
//! - **Game**: The run session and the top-level flow between screens
//! - **Rendering**: Gizmo-drawn scenes
//! - **Audio**: Synthesized sound effects and music
//! - **UI**: Menus, HUD, battle panel, overlays

pub mod audio;
pub mod combat;
pub mod core;
pub mod enemies;
pub mod game;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
///
/// Expects `DefaultPlugins` with Bevy's own audio plugin disabled.
pub struct DragonsLairPlugin;

impl Plugin for DragonsLairPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Session and state machine
            .add_plugins(game::GamePlugin)

            // Audio backend and our sounds
            .add_plugins(bevy_kira_audio::AudioPlugin)
            .add_plugins(audio::SoundPlugin)

            // Rendering systems
            .add_plugins(rendering::RenderingPlugin)

            // UI systems
            .add_plugins(ui::UiPlugin);
    }
}
