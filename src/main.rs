//! Dragon's Lair - Entry Point
//!
//! Controls:
//! - Arrows/WASD: Move, menu navigation
//! - Enter: Confirm
//! - Space: Talk
//! - M: World map
//! - Escape: Back / give up

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins, with kira taking over audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Dragon's Lair".to_string(),
                        resolution: (1000.0, 700.0).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .disable::<bevy::audio::AudioPlugin>(),
        )

        // Our game plugin
        .add_plugins(dragons_lair::DragonsLairPlugin)

        .run();
}
