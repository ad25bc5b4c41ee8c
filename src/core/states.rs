//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Menu screens only
//! exist while their state is active, the overworld HUD only while
//! exploring, and so on.

use bevy::prelude::*;

/// Top-level game states.
///
/// The game moves between these states based on player actions:
/// - Start on the `StartMenu` title screen
/// - Play the `OpeningCutscene` story when a new game begins
/// - Pick a class in `CharacterSelect`
/// - Explore the `Overworld`, dropping into `Battle` on contact
/// - End in `GameOver` or `Victory`, both of which lead back to the menu
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Title screen
    #[default]
    StartMenu,
    /// Story pages shown before character selection
    OpeningCutscene,
    /// Choosing Warrior, Mage or Rogue
    CharacterSelect,
    /// Free movement across the 3x3 world
    Overworld,
    /// Turn-based fight against one enemy or boss
    Battle,
    /// Player was defeated or quit the run
    GameOver,
    /// Final boss defeated
    Victory,
}

impl GameState {
    pub const ALL: [GameState; 7] = [
        GameState::StartMenu,
        GameState::OpeningCutscene,
        GameState::CharacterSelect,
        GameState::Overworld,
        GameState::Battle,
        GameState::GameOver,
        GameState::Victory,
    ];

    /// Whether a run is in progress (a player exists and the world is live).
    pub fn is_in_run(self) -> bool {
        matches!(self, GameState::Overworld | GameState::Battle)
    }
}
