//! Overworld HUD - vitals, progress, area name and the guard's dialogue.

use bevy::prelude::*;

use super::widgets::{spawn_bar, text_bundle, TEXT_COLOR};
use crate::core::{GameConfig, GameState};
use crate::game::GameSession;

/// Marker for HUD root entities.
#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct HealthBar;

#[derive(Component)]
pub struct ManaBar;

#[derive(Component)]
pub struct ExpBar;

/// Level, score, kills and bosses faced.
#[derive(Component)]
pub struct StatsText;

#[derive(Component)]
pub struct AreaText;

#[derive(Component)]
pub struct DialogueBox;

#[derive(Component)]
pub struct DialogueText;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::Overworld), spawn_hud)
        .add_systems(OnExit(GameState::Overworld), super::widgets::despawn_all::<HudRoot>)
        .add_systems(
            Update,
            (update_bars, update_labels, update_dialogue).run_if(in_state(GameState::Overworld)),
        );
}

fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(15.0),
                top: Val::Px(15.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((text_bundle("", 16.0, TEXT_COLOR), StatsText));
            spawn_bar(parent, "HP", 160.0, Color::srgb(0.8, 0.2, 0.2), HealthBar);
            spawn_bar(parent, "MP", 160.0, Color::srgb(0.2, 0.4, 0.9), ManaBar);
            spawn_bar(parent, "EXP", 160.0, Color::srgb(0.9, 0.8, 0.2), ExpBar);
        });

    commands.spawn((
        text_bundle("", 20.0, Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            top: Val::Px(15.0),
            ..default()
        },
        AreaText,
        HudRoot,
    ));

    commands.spawn((
        text_bundle(
            "Arrows/WASD move   M map   Space talk   Esc give up",
            14.0,
            Color::srgba(1.0, 1.0, 1.0, 0.6),
        ),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(15.0),
            bottom: Val::Px(10.0),
            ..default()
        },
        HudRoot,
    ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(100.0),
                right: Val::Px(100.0),
                bottom: Val::Px(40.0),
                padding: UiRect::all(Val::Px(15.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.85)),
            Visibility::Hidden,
            DialogueBox,
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn(text_bundle("Gate Guard", 14.0, Color::srgb(0.9, 0.8, 0.4)));
            parent.spawn((text_bundle("", 20.0, Color::WHITE), DialogueText));
            parent.spawn(text_bundle("Space to continue", 12.0, Color::srgb(0.6, 0.6, 0.6)));
        });
}

#[allow(clippy::type_complexity)]
fn update_bars(
    session: Res<GameSession>,
    mut health: Query<&mut Node, (With<HealthBar>, Without<ManaBar>, Without<ExpBar>)>,
    mut mana: Query<&mut Node, (With<ManaBar>, Without<HealthBar>, Without<ExpBar>)>,
    mut exp: Query<&mut Node, (With<ExpBar>, Without<HealthBar>, Without<ManaBar>)>,
) {
    let Some(player) = session.player.as_ref() else {
        return;
    };
    if let Ok(mut bar) = health.get_single_mut() {
        bar.width = Val::Percent(player.health.fraction() * 100.0);
    }
    if let Ok(mut bar) = mana.get_single_mut() {
        bar.width = Val::Percent(player.mana.fraction() * 100.0);
    }
    if let Ok(mut bar) = exp.get_single_mut() {
        let fraction = player.exp as f32 / player.exp_to_level.max(1) as f32;
        bar.width = Val::Percent(fraction.min(1.0) * 100.0);
    }
}

fn update_labels(
    session: Res<GameSession>,
    config: Res<GameConfig>,
    mut stats: Query<&mut Text, (With<StatsText>, Without<AreaText>)>,
    mut area: Query<&mut Text, (With<AreaText>, Without<StatsText>)>,
) {
    let Some(player) = session.player.as_ref() else {
        return;
    };
    if let Ok(mut text) = stats.get_single_mut() {
        **text = format!(
            "{} Lv.{}   Score {}   Kills {}   Bosses {}",
            player.class(),
            player.level,
            session.score,
            player.kills,
            session.boss.encounters
        );
    }
    if let Ok(mut text) = area.get_single_mut() {
        let seconds = session.game_time as f64 / config.tick_rate_hz;
        let total = seconds as u64;
        **text = format!(
            "{}   {:02}:{:02}",
            session.world.current_area().biome.name(),
            total / 60,
            total % 60
        );
    }
}

fn update_dialogue(
    session: Res<GameSession>,
    mut dialogue_box: Query<&mut Visibility, With<DialogueBox>>,
    mut dialogue_text: Query<&mut Text, With<DialogueText>>,
) {
    let line = session
        .world
        .current_area()
        .town
        .as_ref()
        .and_then(|town| town.current_line());
    if let Ok(mut visibility) = dialogue_box.get_single_mut() {
        *visibility = if line.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }
    if let (Some(line), Ok(mut text)) = (line, dialogue_text.get_single_mut()) {
        if text.0 != line {
            **text = line.to_string();
        }
    }
}
