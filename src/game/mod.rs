//! Game module - the run session and the top-level flow between screens.

mod cutscene;
pub mod flow;
mod menu;
mod overworld;
mod plugin;
mod session;

pub use cutscene::OpeningCutscene;
pub use flow::Transition;
pub use menu::{menu_entries, step_cursor, MenuEntry};
pub use overworld::OverworldEvent;
pub use plugin::GamePlugin;
pub use session::{GameRng, GameSession};
