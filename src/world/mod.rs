//! World module - the 3x3 area grid, towns, pickups, and spawning.

mod area;
mod items;
pub mod layout;
mod map;
mod spawning;
mod town;

pub use area::{Area, Biome};
pub use items::{Item, ItemId, ItemKind, HEALTH_PICKUP, MANA_PICKUP};
pub use map::{biome_at, WorldMap};
pub use spawning::{spawn_enemy, SpawnController};
pub use town::{GuardPhase, Town, GUARD_OFFSET};
