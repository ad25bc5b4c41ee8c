//! Enemies module - regular enemies, bosses, and their behavior.

mod ai;
mod components;
mod data;

pub use ai::{chase, CHASE_DELAY};
pub use components::*;
pub use data::spawn_table;
