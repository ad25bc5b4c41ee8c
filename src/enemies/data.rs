//! Enemy stat curves and per-biome spawn tables.

use bevy::math::Vec2;

use super::components::{Element, Enemy, EnemyKind};
use crate::world::Biome;

/// Elements that may spawn in a biome. Unlisted biomes allow all of them.
pub fn spawn_table(biome: Biome) -> &'static [Element] {
    use Element::*;
    match biome {
        Biome::Plains => &[Fiery, Shadow, Ice],
        Biome::Forest => &[Shadow, Ice],
        Biome::Mountain => &[Fiery, Ice],
        Biome::Desert => &[Fiery],
        Biome::Swamp => &[Shadow, Ice],
        Biome::Volcano => &[Fiery],
        Biome::Ice => &[Ice],
        Biome::Castle => &[Shadow, Fiery],
        Biome::Cave => &[Shadow, Ice],
        _ => &Element::ALL,
    }
}

impl Enemy {
    /// Regular enemy scaled to the player's level at spawn time.
    pub fn regular(element: Element, level: u32, position: Vec2) -> Self {
        let level = level.max(1) as i32;
        let mut enemy = Self::with_stats(
            EnemyKind::Regular(element),
            50 + 10 * level,
            8 + 2 * level,
            8 + 2 * level,
            3 + level / 3,
        );
        enemy.position = position;
        enemy
    }

    /// Dragon boss guarding the given level.
    pub fn progressive_boss(level: u32) -> Self {
        let l = level.max(1) as i32;
        Self::with_stats(
            EnemyKind::ProgressiveBoss { level },
            120 + 25 * l,
            10 + 3 * l,
            8 + 2 * l,
            4 + l / 2,
        )
    }

    /// Malakor.
    pub fn final_boss() -> Self {
        Self::with_stats(EnemyKind::FinalBoss, 300, 30, 20, 10)
    }
}
