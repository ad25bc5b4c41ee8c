//! Logical input layer.
//!
//! Keyboard keys, on-screen touch buttons and menu buttons all become
//! [`GameInput`] values queued in [`PendingInput`]. The fixed game tick drains
//! the queue, so the game logic never looks at raw devices.

use bevy::prelude::*;

use super::states::GameState;

/// One logical input, independent of the device that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameInput {
    Up,
    Down,
    Left,
    Right,
    /// Enter
    Confirm,
    /// Escape
    Cancel,
    /// M
    ToggleMap,
    /// Space
    Advance,
    /// A menu or battle button was clicked directly.
    Select(usize),
    /// An unbound key, only queued while the opening story plays.
    AnyKey,
}

impl GameInput {
    /// Grid step for directional inputs.
    pub fn direction(self) -> Option<IVec2> {
        match self {
            GameInput::Up => Some(IVec2::new(0, -1)),
            GameInput::Down => Some(IVec2::new(0, 1)),
            GameInput::Left => Some(IVec2::new(-1, 0)),
            GameInput::Right => Some(IVec2::new(1, 0)),
            _ => None,
        }
    }
}

/// Inputs collected since the last fixed tick, oldest first.
#[derive(Resource, Default, Debug)]
pub struct PendingInput {
    queue: Vec<GameInput>,
}

impl PendingInput {
    pub fn push(&mut self, input: GameInput) {
        self.queue.push(input);
    }

    pub fn drain(&mut self) -> Vec<GameInput> {
        std::mem::take(&mut self.queue)
    }

}

/// Keyboard bindings, first match wins.
const KEY_BINDINGS: [(KeyCode, GameInput); 12] = [
    (KeyCode::ArrowUp, GameInput::Up),
    (KeyCode::KeyW, GameInput::Up),
    (KeyCode::ArrowDown, GameInput::Down),
    (KeyCode::KeyS, GameInput::Down),
    (KeyCode::ArrowLeft, GameInput::Left),
    (KeyCode::KeyA, GameInput::Left),
    (KeyCode::ArrowRight, GameInput::Right),
    (KeyCode::KeyD, GameInput::Right),
    (KeyCode::Enter, GameInput::Confirm),
    (KeyCode::Escape, GameInput::Cancel),
    (KeyCode::KeyM, GameInput::ToggleMap),
    (KeyCode::Space, GameInput::Advance),
];

/// Translate a key into its logical input.
pub fn map_key(key: KeyCode) -> Option<GameInput> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, input)| *input)
}

/// Queue every key pressed this frame. Headless apps have no keyboard.
pub fn collect_keyboard_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    state: Option<Res<State<GameState>>>,
    mut pending: ResMut<PendingInput>,
) {
    let Some(keyboard) = keyboard else {
        return;
    };
    let in_cutscene = state.is_some_and(|state| *state.get() == GameState::OpeningCutscene);
    for key in keyboard.get_just_pressed() {
        if let Some(input) = key_input(*key, in_cutscene) {
            pending.push(input);
        }
    }
    // A click anywhere also skips the story
    if in_cutscene && mouse.is_some_and(|mouse| mouse.just_pressed(MouseButton::Left)) {
        pending.push(GameInput::AnyKey);
    }
}

/// Bound keys map as usual; any other key only counts during the cutscene.
fn key_input(key: KeyCode, in_cutscene: bool) -> Option<GameInput> {
    map_key(key).or(in_cutscene.then_some(GameInput::AnyKey))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_share_directions() {
        assert_eq!(map_key(KeyCode::ArrowUp), Some(GameInput::Up));
        assert_eq!(map_key(KeyCode::KeyW), Some(GameInput::Up));
        assert_eq!(map_key(KeyCode::KeyD), Some(GameInput::Right));
        assert_eq!(map_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn directions_use_screen_space() {
        assert_eq!(GameInput::Up.direction(), Some(IVec2::new(0, -1)));
        assert_eq!(GameInput::Right.direction(), Some(IVec2::new(1, 0)));
        assert_eq!(GameInput::Confirm.direction(), None);
    }

    #[test]
    fn drain_empties_queue_in_order() {
        let mut pending = PendingInput::default();
        pending.push(GameInput::Left);
        pending.push(GameInput::Confirm);
        assert_eq!(pending.drain(), vec![GameInput::Left, GameInput::Confirm]);
        assert!(pending.drain().is_empty());
    }

    #[test]
    fn unbound_keys_only_count_in_the_cutscene() {
        assert_eq!(key_input(KeyCode::KeyQ, true), Some(GameInput::AnyKey));
        assert_eq!(key_input(KeyCode::KeyQ, false), None);
        assert_eq!(key_input(KeyCode::ArrowUp, true), Some(GameInput::Up));
    }
}
