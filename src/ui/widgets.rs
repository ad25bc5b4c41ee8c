//! Shared UI building blocks.

use bevy::prelude::*;

pub const TEXT_COLOR: Color = Color::srgb(0.8, 0.8, 0.85);
pub const BUTTON_IDLE: Color = Color::srgb(0.15, 0.15, 0.2);
pub const BUTTON_HOVER: Color = Color::srgb(0.25, 0.25, 0.3);
pub const BUTTON_PRESSED: Color = Color::srgb(0.3, 0.3, 0.35);
/// Entry under the keyboard cursor
pub const BUTTON_SELECTED: Color = Color::srgb(0.35, 0.3, 0.15);

pub fn text_bundle(
    text: impl Into<String>,
    size: f32,
    color: Color,
) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

/// Spawn a labeled button carrying `marker`.
pub fn spawn_button<M: Component>(parent: &mut ChildBuilder, text: &str, width: f32, marker: M) {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(width),
                height: Val::Px(50.0),
                margin: UiRect::all(Val::Px(8.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(BUTTON_IDLE),
            marker,
        ))
        .with_children(|button| {
            button.spawn(text_bundle(text, 24.0, TEXT_COLOR));
        });
}

/// Button background for its interaction and keyboard selection.
pub fn button_color(interaction: Interaction, selected: bool) -> Color {
    match interaction {
        Interaction::Pressed => BUTTON_PRESSED,
        Interaction::Hovered => BUTTON_HOVER,
        Interaction::None if selected => BUTTON_SELECTED,
        Interaction::None => BUTTON_IDLE,
    }
}

/// Spawn a labeled status bar whose fill carries `fill_marker`.
pub fn spawn_bar<M: Component>(
    parent: &mut ChildBuilder,
    label: &str,
    width: f32,
    color: Color,
    fill_marker: M,
) {
    parent
        .spawn(Node {
            flex_direction: FlexDirection::Row,
            align_items: AlignItems::Center,
            margin: UiRect::bottom(Val::Px(5.0)),
            ..default()
        })
        .with_children(|bar_parent| {
            bar_parent.spawn((
                text_bundle(label, 14.0, TEXT_COLOR),
                Node {
                    width: Val::Px(40.0),
                    ..default()
                },
            ));

            bar_parent
                .spawn((
                    Node {
                        width: Val::Px(width),
                        height: Val::Px(12.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.1, 0.1, 0.1)),
                ))
                .with_children(|bg| {
                    bg.spawn((
                        Node {
                            width: Val::Percent(100.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        BackgroundColor(color),
                        fill_marker,
                    ));
                });
        });
}

/// Despawn every entity carrying `M`, children included.
pub fn despawn_all<M: Component>(mut commands: Commands, query: Query<Entity, With<M>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_beats_keyboard_selection() {
        assert_eq!(button_color(Interaction::Hovered, true), BUTTON_HOVER);
        assert_eq!(button_color(Interaction::None, true), BUTTON_SELECTED);
        assert_eq!(button_color(Interaction::None, false), BUTTON_IDLE);
    }
}
