//! Battle panel - opponent and player bars, the message log, and the
//! 2x2 action menu.

use bevy::prelude::*;

use super::widgets::{button_color, despawn_all, spawn_bar, spawn_button, text_bundle, TEXT_COLOR};
use crate::combat::BattleAction;
use crate::core::{GameInput, GameState, PendingInput};
use crate::game::GameSession;

/// Log lines shown at once.
const VISIBLE_LOG: usize = 5;

#[derive(Component)]
pub struct BattleUi;

#[derive(Component)]
pub struct EnemyPanel;

#[derive(Component)]
pub struct EnemyName;

#[derive(Component)]
pub struct EnemyHealthBar;

#[derive(Component)]
pub struct PlayerHealthBar;

#[derive(Component)]
pub struct PlayerManaBar;

#[derive(Component)]
pub struct PlayerVitals;

#[derive(Component)]
pub struct BattleLog;

#[derive(Component)]
pub struct HitMarkerText;

/// One of the four battle commands, by menu index.
#[derive(Component)]
pub struct ActionButton(pub usize);

pub fn setup_battle_ui_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Battle), spawn_battle_ui)
        .add_systems(OnExit(GameState::Battle), despawn_all::<BattleUi>)
        .add_systems(
            Update,
            (
                action_button_input,
                update_enemy_panel,
                update_player_panel,
                update_log,
                update_action_buttons,
                update_hit_marker,
            )
                .run_if(in_state(GameState::Battle)),
        );
}

fn spawn_battle_ui(mut commands: Commands) {
    // Opponent, top right
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(30.0),
                top: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            EnemyPanel,
            BattleUi,
        ))
        .with_children(|parent| {
            parent.spawn((text_bundle("", 20.0, Color::WHITE), EnemyName));
            spawn_bar(parent, "HP", 200.0, Color::srgb(0.8, 0.2, 0.2), EnemyHealthBar);
        });

    // Bottom panel: vitals and log on the left, actions on the right
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                bottom: Val::Px(0.0),
                height: Val::Px(200.0),
                flex_direction: FlexDirection::Row,
                justify_content: JustifyContent::SpaceBetween,
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.9)),
            BattleUi,
        ))
        .with_children(|panel| {
            panel
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    width: Val::Percent(55.0),
                    ..default()
                })
                .with_children(|left| {
                    left.spawn((text_bundle("", 16.0, TEXT_COLOR), PlayerVitals));
                    spawn_bar(left, "HP", 180.0, Color::srgb(0.8, 0.2, 0.2), PlayerHealthBar);
                    spawn_bar(left, "MP", 180.0, Color::srgb(0.2, 0.4, 0.9), PlayerManaBar);
                    left.spawn((text_bundle("", 16.0, Color::srgb(0.85, 0.85, 0.7)), BattleLog));
                });

            panel
                .spawn(Node {
                    display: Display::Grid,
                    grid_template_columns: RepeatedGridTrack::flex(2, 1.0),
                    ..default()
                })
                .with_children(|grid| {
                    for (index, action) in BattleAction::ALL.iter().enumerate() {
                        spawn_button(grid, action.label(), 160.0, ActionButton(index));
                    }
                });
        });

    commands.spawn((
        text_bundle("", 32.0, Color::srgb(1.0, 0.3, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            ..default()
        },
        Visibility::Hidden,
        HitMarkerText,
        BattleUi,
    ));
}

fn action_button_input(
    buttons: Query<(&Interaction, &ActionButton), Changed<Interaction>>,
    mut pending: ResMut<PendingInput>,
) {
    for (interaction, button) in buttons.iter() {
        if *interaction == Interaction::Pressed {
            pending.push(GameInput::Select(button.0));
        }
    }
}

fn update_enemy_panel(
    session: Res<GameSession>,
    mut panel: Query<&mut Visibility, With<EnemyPanel>>,
    mut name: Query<&mut Text, With<EnemyName>>,
    mut bar: Query<&mut Node, With<EnemyHealthBar>>,
) {
    let Some(battle) = session.battle.as_ref() else {
        return;
    };
    let enemy = &battle.enemy;
    // Malakor's strength stays a mystery
    if let Ok(mut visibility) = panel.get_single_mut() {
        *visibility = if enemy.kind.is_final_boss() {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
    }
    if let Ok(mut text) = name.get_single_mut() {
        **text = format!("{}  {}/{}", enemy.name, enemy.health.current, enemy.health.maximum);
    }
    if let Ok(mut node) = bar.get_single_mut() {
        node.width = Val::Percent(enemy.health.fraction() * 100.0);
    }
}

#[allow(clippy::type_complexity)]
fn update_player_panel(
    session: Res<GameSession>,
    mut vitals: Query<&mut Text, With<PlayerVitals>>,
    mut health: Query<&mut Node, (With<PlayerHealthBar>, Without<PlayerManaBar>)>,
    mut mana: Query<&mut Node, (With<PlayerManaBar>, Without<PlayerHealthBar>)>,
) {
    let Some(player) = session.player.as_ref() else {
        return;
    };
    if let Ok(mut text) = vitals.get_single_mut() {
        **text = format!(
            "{} Lv.{}  HP {}/{}  MP {}/{}",
            player.class(),
            player.level,
            player.health.current,
            player.health.maximum,
            player.mana.current,
            player.mana.maximum
        );
    }
    if let Ok(mut node) = health.get_single_mut() {
        node.width = Val::Percent(player.health.fraction() * 100.0);
    }
    if let Ok(mut node) = mana.get_single_mut() {
        node.width = Val::Percent(player.mana.fraction() * 100.0);
    }
}

fn update_log(session: Res<GameSession>, mut log: Query<&mut Text, With<BattleLog>>) {
    let (Some(battle), Ok(mut text)) = (session.battle.as_ref(), log.get_single_mut()) else {
        return;
    };
    let joined = battle.recent_log(VISIBLE_LOG).join("\n");
    if text.0 != joined {
        **text = joined;
    }
}

fn update_action_buttons(
    session: Res<GameSession>,
    mut buttons: Query<(&Interaction, &ActionButton, &mut BackgroundColor)>,
) {
    let Some(battle) = session.battle.as_ref() else {
        return;
    };
    let idle = !battle.accepts_input();
    for (interaction, button, mut background) in buttons.iter_mut() {
        let color = button_color(*interaction, button.0 == battle.selected);
        background.0 = if idle { color.with_alpha(0.5) } else { color };
    }
}

fn update_hit_marker(
    session: Res<GameSession>,
    mut marker: Query<(&mut Text, &mut Node, &mut Visibility, &mut TextColor), With<HitMarkerText>>,
) {
    let Ok((mut text, mut node, mut visibility, mut color)) = marker.get_single_mut() else {
        return;
    };
    let Some(hit) = session.battle.as_ref().and_then(|battle| battle.hit_marker) else {
        *visibility = Visibility::Hidden;
        return;
    };
    *visibility = Visibility::Inherited;
    **text = format!("-{}", hit.amount);
    let rise = (20 - hit.remaining.min(20)) as f32 * 2.0;
    let (left, top) = if hit.on_player { (250.0, 260.0) } else { (720.0, 160.0) };
    node.left = Val::Px(left);
    node.top = Val::Px(top - rise);
    color.0 = if hit.on_player {
        Color::srgb(1.0, 0.3, 0.3)
    } else {
        Color::srgb(1.0, 0.9, 0.3)
    };
}
