//! Rendering plugin - vector-drawn world and battle scenes.
//!
//! Everything is drawn with gizmos each frame straight from the game
//! session. Rendering reads the session and never writes it.

use bevy::prelude::*;

use super::battle::draw_battle;
use super::overworld::{draw_overworld, draw_world_map};
use crate::core::GameState;

/// Backdrop behind menus and the cutscene.
const MENU_BACKDROP: Color = Color::srgb(0.05, 0.05, 0.08);

/// Rendering plugin - camera, backdrop, and per-state scene drawing.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(MENU_BACKDROP))
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                (
                    (draw_overworld, draw_world_map)
                        .chain()
                        .run_if(in_state(GameState::Overworld)),
                    draw_battle.run_if(in_state(GameState::Battle)),
                ),
            )
            .add_systems(OnEnter(GameState::StartMenu), reset_backdrop)
            .add_systems(OnEnter(GameState::GameOver), reset_backdrop)
            .add_systems(OnEnter(GameState::Victory), reset_backdrop);
    }
}

/// Marker for the one 2D camera.
#[derive(Component)]
pub struct MainCamera;

fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, MainCamera));
}

fn reset_backdrop(mut clear: ResMut<ClearColor>) {
    clear.0 = MENU_BACKDROP;
}
