//! Core game module - states, events, configuration, and input.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod error;
mod events;
mod fade;
mod input;
mod plugin;
mod states;
mod tween;

pub use config::{GameConfig, CONFIG_PATH};
pub use error::ConfigError;
pub use events::*;
pub use fade::{FadePhase, ScreenFade};
pub use input::{collect_keyboard_input, map_key, GameInput, PendingInput};
pub use plugin::CorePlugin;
pub use states::*;
pub use tween::EasedVec2;
