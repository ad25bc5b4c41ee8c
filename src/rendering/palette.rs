//! Colors for everything drawn on screen.

use bevy::prelude::*;

use crate::enemies::{Element, EnemyKind};
use crate::player::ClassKind;
use crate::world::{Biome, ItemKind};

pub fn biome_ground(biome: Biome) -> Color {
    match biome {
        Biome::Plains => Color::srgb(0.36, 0.62, 0.30),
        Biome::Forest => Color::srgb(0.13, 0.40, 0.18),
        Biome::Mountain => Color::srgb(0.47, 0.45, 0.42),
        Biome::Desert => Color::srgb(0.86, 0.76, 0.48),
        Biome::Swamp => Color::srgb(0.27, 0.33, 0.22),
        Biome::Volcano => Color::srgb(0.35, 0.13, 0.08),
        Biome::Ice => Color::srgb(0.78, 0.88, 0.95),
        Biome::Castle => Color::srgb(0.30, 0.28, 0.33),
        Biome::Cave => Color::srgb(0.18, 0.16, 0.15),
        Biome::Beach => Color::srgb(0.93, 0.86, 0.62),
        Biome::Town => Color::srgb(0.55, 0.50, 0.40),
    }
}

/// Ambient particle color for a biome.
pub fn biome_particle(biome: Biome) -> Color {
    match biome {
        Biome::Volcano => Color::srgb(1.0, 0.45, 0.1),
        Biome::Ice | Biome::Mountain => Color::WHITE,
        Biome::Desert | Biome::Beach => Color::srgb(0.95, 0.85, 0.55),
        Biome::Swamp => Color::srgb(0.5, 0.7, 0.3),
        Biome::Forest => Color::srgb(0.4, 0.8, 0.3),
        _ => Color::srgba(1.0, 1.0, 1.0, 0.6),
    }
}

pub fn class_color(class: ClassKind) -> Color {
    match class {
        ClassKind::Warrior => Color::srgb(0.8, 0.2, 0.2),
        ClassKind::Mage => Color::srgb(0.3, 0.4, 0.95),
        ClassKind::Rogue => Color::srgb(0.2, 0.75, 0.35),
    }
}

pub fn enemy_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Regular(Element::Fiery) => Color::srgb(1.0, 0.4, 0.1),
        EnemyKind::Regular(Element::Shadow) => Color::srgb(0.45, 0.2, 0.6),
        EnemyKind::Regular(Element::Ice) => Color::srgb(0.5, 0.85, 1.0),
        EnemyKind::ProgressiveBoss { .. } => Color::srgb(0.75, 0.1, 0.1),
        EnemyKind::FinalBoss => Color::srgb(0.2, 0.0, 0.25),
    }
}

pub fn item_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Health => Color::srgb(0.9, 0.15, 0.2),
        ItemKind::Mana => Color::srgb(0.2, 0.4, 1.0),
    }
}

pub const BUILDING: Color = Color::srgb(0.45, 0.28, 0.16);
pub const GUARD: Color = Color::srgb(0.75, 0.75, 0.8);
pub const FIREBALL: Color = Color::srgb(1.0, 0.55, 0.0);
pub const MAP_UNVISITED: Color = Color::srgb(0.15, 0.15, 0.15);
pub const MAP_CURSOR: Color = Color::srgb(1.0, 0.9, 0.2);
pub const BATTLE_FLOOR: Color = Color::srgb(0.12, 0.1, 0.14);
