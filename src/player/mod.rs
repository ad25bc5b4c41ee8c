//! Player module - character classes, stats, and progression.

mod class;
mod components;

pub use class::{ClassKind, ClassProfile, Flourish};
pub use components::*;
