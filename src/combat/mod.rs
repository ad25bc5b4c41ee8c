//! Combat module - the battle state machine, boss triggers, and shared stats.

mod battle;
mod boss;
mod components;

pub use battle::*;
pub use boss::{BossTrigger, BOSS_EXP, BOSS_SCORE};
pub use components::*;
