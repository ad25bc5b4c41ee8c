//! Core plugin that sets up game states, events, config and input.

use bevy::input::InputSystem;
use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::input::{collect_keyboard_input, PendingInput};
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - The top-level `GameState` machine
/// - Global events (sound cues, victory music completion)
/// - `GameConfig`, loaded once unless a config was inserted beforehand
/// - The fixed simulation rate
/// - Keyboard collection into `PendingInput`
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameConfig>() {
            app.insert_resource(GameConfig::load());
        }
        let tick_rate = app.world().resource::<GameConfig>().tick_rate_hz;

        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<SfxEvent>()
            .add_event::<VictoryMusicFinished>()

            .insert_resource(Time::<Fixed>::from_hz(tick_rate))
            .init_resource::<PendingInput>()

            // Gather key presses before anything reads them this frame
            .add_systems(PreUpdate, collect_keyboard_input.after(InputSystem))
            .add_systems(Update, log_state_changes);
    }
}

/// Log every top-level state change.
fn log_state_changes(mut transitions: EventReader<StateTransitionEvent<GameState>>) {
    for transition in transitions.read() {
        info!("Game state: {:?} -> {:?}", transition.exited, transition.entered);
    }
}
