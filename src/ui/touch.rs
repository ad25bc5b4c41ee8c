//! On-screen touch pad, enabled with `touch_controls` in the config.

use bevy::prelude::*;

use super::widgets::{button_color, text_bundle, TEXT_COLOR};
use crate::core::{GameConfig, GameInput, PendingInput};

const PAD_BUTTON: f32 = 56.0;

/// A pad button and the input it sends.
#[derive(Component)]
pub struct TouchButton(pub GameInput);

#[derive(Component)]
pub struct TouchPad;

pub fn setup_touch_systems(app: &mut App) {
    app.add_systems(Startup, spawn_touch_pad.run_if(touch_enabled))
        .add_systems(Update, touch_button_input.run_if(touch_enabled));
}

fn touch_enabled(config: Res<GameConfig>) -> bool {
    config.touch_controls
}

fn spawn_touch_pad(mut commands: Commands) {
    info!("Touch controls enabled");
    // D-pad, bottom left
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(220.0),
                display: Display::Grid,
                grid_template_columns: RepeatedGridTrack::px(3, PAD_BUTTON),
                grid_template_rows: RepeatedGridTrack::px(3, PAD_BUTTON),
                ..default()
            },
            GlobalZIndex(50),
            TouchPad,
        ))
        .with_children(|pad| {
            let cells = [
                None,
                Some(("^", GameInput::Up)),
                None,
                Some(("<", GameInput::Left)),
                None,
                Some((">", GameInput::Right)),
                None,
                Some(("v", GameInput::Down)),
                None,
            ];
            for cell in cells {
                match cell {
                    Some((label, input)) => spawn_pad_button(pad, label, input),
                    None => {
                        pad.spawn(Node::default());
                    }
                }
            }
        });

    // Action buttons, bottom right
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                bottom: Val::Px(220.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            GlobalZIndex(50),
            TouchPad,
        ))
        .with_children(|column| {
            for (label, input) in [
                ("OK", GameInput::Confirm),
                ("Talk", GameInput::Advance),
                ("Map", GameInput::ToggleMap),
                ("Esc", GameInput::Cancel),
            ] {
                spawn_pad_button(column, label, input);
            }
        });
}

fn spawn_pad_button(parent: &mut ChildBuilder, label: &str, input: GameInput) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(PAD_BUTTON),
                height: Val::Px(PAD_BUTTON),
                margin: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(button_color(Interaction::None, false).with_alpha(0.6)),
            TouchButton(input),
        ))
        .with_children(|button| {
            button.spawn(text_bundle(label, 18.0, TEXT_COLOR));
        });
}

fn touch_button_input(
    mut buttons: Query<(&Interaction, &TouchButton, &mut BackgroundColor), Changed<Interaction>>,
    mut pending: ResMut<PendingInput>,
) {
    for (interaction, button, mut background) in buttons.iter_mut() {
        if *interaction == Interaction::Pressed {
            pending.push(button.0);
        }
        background.0 = button_color(*interaction, false).with_alpha(0.6);
    }
}
