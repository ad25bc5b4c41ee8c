//! Timer-driven enemy and item spawning into the current area.

use bevy::math::Vec2;
use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use super::area::Area;
use super::items::{Item, ItemId, ItemKind};
use super::layout::{AREA_HEIGHT, AREA_WIDTH, SPAWN_MARGIN};
use crate::core::GameConfig;
use crate::enemies::{spawn_table, Element, Enemy};

/// Spawn timers and the item id counter for one run.
#[derive(Debug, Clone, Default)]
pub struct SpawnController {
    pub enemy_timer: u32,
    pub item_timer: u32,
    next_item_id: u64,
}

impl SpawnController {
    pub fn advance_timers(&mut self) {
        self.enemy_timer += 1;
        self.item_timer += 1;
    }

    /// Spawn whatever is due this tick and reset the timers that fired.
    pub fn spawn_due(
        &mut self,
        area: &mut Area,
        player_level: u32,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) {
        if self.enemy_timer >= config.enemy_spawn_interval {
            spawn_enemy(area, player_level, config.max_enemies_per_area, rng);
            self.enemy_timer = 0;
        }
        if self.item_timer >= config.item_spawn_interval {
            self.spawn_item(area, config.max_items_per_area, rng);
            self.item_timer = 0;
        }
    }

    /// Add one random item unless the area is full.
    pub fn spawn_item(&mut self, area: &mut Area, cap: usize, rng: &mut impl Rng) -> bool {
        if area.items.len() >= cap {
            return false;
        }
        let kind = *ItemKind::ALL.choose(rng).unwrap_or(&ItemKind::Health);
        let id = ItemId(self.next_item_id);
        self.next_item_id += 1;
        let item = Item::new(id, kind, interior_point(area, rng));
        debug!("Spawned {:?} item {:?} in {:?}", kind, id, area.coord);
        area.items.push(item);
        true
    }
}

/// Add one enemy scaled to `player_level` unless the area is a town or full.
pub fn spawn_enemy(area: &mut Area, player_level: u32, cap: usize, rng: &mut impl Rng) -> bool {
    if area.is_town() || area.enemies.len() >= cap {
        return false;
    }
    let element = *spawn_table(area.biome).choose(rng).unwrap_or(&Element::Fiery);
    let enemy = Enemy::regular(element, player_level, interior_point(area, rng));
    debug!("Spawned {} in {:?}", enemy.name, area.coord);
    area.enemies.push(enemy);
    true
}

/// Uniform point inside the area, inset by the spawn margin on every edge.
fn interior_point(area: &Area, rng: &mut impl Rng) -> Vec2 {
    let origin = area.origin();
    origin
        + Vec2::new(
            rng.gen_range(SPAWN_MARGIN..=AREA_WIDTH - SPAWN_MARGIN).round(),
            rng.gen_range(SPAWN_MARGIN..=AREA_HEIGHT - SPAWN_MARGIN).round(),
        )
}
