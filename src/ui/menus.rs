//! Title, character select, game over and victory screens.

use bevy::prelude::*;

use super::widgets::{button_color, spawn_button, text_bundle, TEXT_COLOR};
use crate::core::{GameInput, GameState, PendingInput};
use crate::game::{menu_entries, GameSession, MenuEntry};

/// Marker for the root of whichever menu screen is up.
#[derive(Component)]
pub struct MenuUi;

/// A menu button; the index matches `menu_entries` for the state.
#[derive(Component)]
pub struct MenuButton(pub usize);

/// Build the screen for the state just entered.
pub fn setup_menu(mut commands: Commands, state: Res<State<GameState>>, session: Res<GameSession>) {
    let state = *state.get();
    let (title, title_color) = match state {
        GameState::StartMenu => ("DRAGON'S LAIR", Color::srgb(0.9, 0.6, 0.2)),
        GameState::CharacterSelect => ("Choose Your Hero", TEXT_COLOR),
        GameState::GameOver => ("GAME OVER", Color::srgb(0.8, 0.2, 0.2)),
        GameState::Victory => ("VICTORY!", Color::srgb(1.0, 0.85, 0.3)),
        _ => return,
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            MenuUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                text_bundle(title, 64.0, title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            for line in subtitle(state, &session) {
                parent.spawn((
                    text_bundle(line, 20.0, Color::srgb(0.6, 0.6, 0.65)),
                    Node {
                        margin: UiRect::bottom(Val::Px(8.0)),
                        ..default()
                    },
                ));
            }

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    margin: UiRect::top(Val::Px(30.0)),
                    ..default()
                })
                .with_children(|buttons| {
                    for (index, entry) in menu_entries(state).iter().enumerate() {
                        spawn_button(buttons, &button_label(*entry), 320.0, MenuButton(index));
                    }
                });
        });
}

fn button_label(entry: MenuEntry) -> String {
    match entry {
        MenuEntry::Class(class) => {
            let profile = class.profile();
            format!("{}  HP {} MP {}", class.name(), profile.max_health, profile.max_mana)
        }
        other => other.label().to_string(),
    }
}

fn subtitle(state: GameState, session: &GameSession) -> Vec<String> {
    let summary = || {
        session
            .player
            .as_ref()
            .map(|player| {
                format!(
                    "Level {}   Score {}   Kills {}   Items {}",
                    player.level, session.score, player.kills, player.items_collected
                )
            })
            .into_iter()
            .collect::<Vec<_>>()
    };
    match state {
        GameState::StartMenu => vec!["Arrows to choose, Enter to confirm".to_string()],
        GameState::CharacterSelect => crate::player::ClassKind::ALL
            .iter()
            .map(|class| format!("{}: {}", class.name(), class.blurb()))
            .collect(),
        GameState::GameOver => summary(),
        GameState::Victory => {
            let mut lines = vec!["Malakor has fallen. The land is free.".to_string()];
            lines.extend(summary());
            lines
        }
        _ => Vec::new(),
    }
}

/// Clicks become `Select` inputs for the next game tick.
pub fn menu_button_input(
    buttons: Query<(&Interaction, &MenuButton), Changed<Interaction>>,
    mut pending: ResMut<PendingInput>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            pending.push(GameInput::Select(button.0));
        }
    }
}

/// Keep button colors in step with hover and the keyboard cursor.
pub fn highlight_menu_buttons(
    session: Res<GameSession>,
    mut buttons: Query<(&Interaction, &MenuButton, &mut BackgroundColor)>,
) {
    for (interaction, button, mut background) in buttons.iter_mut() {
        background.0 = button_color(*interaction, button.0 == session.menu_cursor);
    }
}
