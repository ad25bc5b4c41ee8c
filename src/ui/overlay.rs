//! Full-screen layers: the opening story and the fade curtain.

use bevy::prelude::*;

use super::widgets::{despawn_all, text_bundle};
use crate::core::{GameConfig, GameState};
use crate::game::GameSession;

#[derive(Component)]
pub struct CutsceneUi;

#[derive(Component)]
pub struct CutsceneText;

/// Black curtain drawn over everything.
#[derive(Component)]
pub struct FadeCurtain;

pub fn setup_overlay_systems(app: &mut App) {
    app.add_systems(Startup, spawn_curtain)
        .add_systems(OnEnter(GameState::OpeningCutscene), spawn_cutscene)
        .add_systems(OnExit(GameState::OpeningCutscene), despawn_all::<CutsceneUi>)
        .add_systems(
            Update,
            (
                update_cutscene.run_if(in_state(GameState::OpeningCutscene)),
                update_curtain,
            ),
        );
}

fn spawn_curtain(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        BackgroundColor(Color::NONE),
        GlobalZIndex(100),
        FadeCurtain,
    ));
}

fn spawn_cutscene(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(120.0)),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            CutsceneUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                text_bundle("", 28.0, Color::srgb(0.9, 0.85, 0.7)),
                TextLayout::new_with_justify(JustifyText::Center),
                CutsceneText,
            ));
            parent.spawn((
                text_bundle("Press any key to skip", 14.0, Color::srgb(0.5, 0.5, 0.5)),
                Node {
                    margin: UiRect::top(Val::Px(60.0)),
                    ..default()
                },
            ));
        });
}

fn update_cutscene(
    session: Res<GameSession>,
    config: Res<GameConfig>,
    mut text: Query<(&mut Text, &mut TextColor), With<CutsceneText>>,
) {
    let Ok((mut text, mut color)) = text.get_single_mut() else {
        return;
    };
    let cutscene = &session.cutscene;
    let page = cutscene.current_text().unwrap_or_default();
    if text.0 != page {
        **text = page.to_string();
    }
    // Fade in over the first quarter of each page
    let alpha = (cutscene.page_progress(config.cutscene_page_ticks) * 4.0).min(1.0);
    color.0 = color.0.with_alpha(alpha);
}

fn update_curtain(
    session: Res<GameSession>,
    state: Res<State<GameState>>,
    mut curtain: Query<&mut BackgroundColor, With<FadeCurtain>>,
) {
    let Ok(mut background) = curtain.get_single_mut() else {
        return;
    };
    let mut opacity = session.fade.opacity();
    if *state.get() == GameState::Overworld && session.world.is_transitioning() {
        opacity = opacity.max(session.world.transition_alpha as f32 / 255.0);
    }
    background.0 = Color::BLACK.with_alpha(opacity);
}
