//! UI plugin - menus, HUD, battle panel, and overlays.

use bevy::prelude::*;

use super::menus::{highlight_menu_buttons, menu_button_input, setup_menu, MenuUi};
use super::widgets::despawn_all;
use super::{battle, hud, overlay, touch};
use crate::core::GameState;

const MENU_STATES: [GameState; 4] = [
    GameState::StartMenu,
    GameState::CharacterSelect,
    GameState::GameOver,
    GameState::Victory,
];

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        hud::setup_hud_systems(app);
        battle::setup_battle_ui_systems(app);
        overlay::setup_overlay_systems(app);
        touch::setup_touch_systems(app);

        for state in MENU_STATES {
            app.add_systems(OnEnter(state), setup_menu)
                .add_systems(OnExit(state), despawn_all::<MenuUi>);
        }
        app.add_systems(
            Update,
            (menu_button_input, highlight_menu_buttons).run_if(is_menu_state),
        );
    }
}

fn is_menu_state(state: Res<State<GameState>>) -> bool {
    MENU_STATES.contains(state.get())
}
