//! Menu entries for the non-gameplay screens.

use crate::core::GameState;
use crate::player::ClassKind;

/// Something a menu button can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Start,
    Quit,
    Class(ClassKind),
    Back,
    Restart,
    MainMenu,
}

impl MenuEntry {
    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Start => "Start Game",
            MenuEntry::Quit => "Quit",
            MenuEntry::Class(class) => class.name(),
            MenuEntry::Back => "Back",
            MenuEntry::Restart => "Play Again",
            MenuEntry::MainMenu => "Main Menu",
        }
    }
}

const START_MENU: [MenuEntry; 2] = [MenuEntry::Start, MenuEntry::Quit];
const CHARACTER_SELECT: [MenuEntry; 4] = [
    MenuEntry::Class(ClassKind::Warrior),
    MenuEntry::Class(ClassKind::Mage),
    MenuEntry::Class(ClassKind::Rogue),
    MenuEntry::Back,
];
const END_SCREEN: [MenuEntry; 2] = [MenuEntry::Restart, MenuEntry::MainMenu];

/// Buttons shown in a state, in cursor order.
pub fn menu_entries(state: GameState) -> &'static [MenuEntry] {
    match state {
        GameState::StartMenu => &START_MENU,
        GameState::CharacterSelect => &CHARACTER_SELECT,
        GameState::GameOver | GameState::Victory => &END_SCREEN,
        _ => &[],
    }
}

/// Move a wrapping cursor over `len` entries.
pub fn step_cursor(cursor: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (cursor + 1) % len
    } else {
        (cursor + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_screen_has_entries() {
        for state in GameState::ALL {
            let has_menu = matches!(
                state,
                GameState::StartMenu
                    | GameState::CharacterSelect
                    | GameState::GameOver
                    | GameState::Victory
            );
            assert_eq!(!menu_entries(state).is_empty(), has_menu, "{state:?}");
        }
    }

    #[test]
    fn cursor_wraps_both_ways() {
        assert_eq!(step_cursor(3, 4, true), 0);
        assert_eq!(step_cursor(0, 4, false), 3);
        assert_eq!(step_cursor(0, 0, true), 0);
    }
}
