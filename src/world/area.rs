//! A single screen of the overworld.

use bevy::math::{IVec2, Rect, Vec2};

use super::items::Item;
use super::layout::{area_bounds, area_origin, boxes_overlap};
use super::town::Town;
use crate::enemies::Enemy;

/// Thematic type of an area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Biome {
    Plains,
    Forest,
    Mountain,
    Desert,
    Swamp,
    Volcano,
    Ice,
    Castle,
    Cave,
    Beach,
    Town,
}

impl Biome {
    pub const fn name(self) -> &'static str {
        match self {
            Biome::Plains => "Plains",
            Biome::Forest => "Forest",
            Biome::Mountain => "Mountain",
            Biome::Desert => "Desert",
            Biome::Swamp => "Swamp",
            Biome::Volcano => "Volcano",
            Biome::Ice => "Ice Fields",
            Biome::Castle => "Castle",
            Biome::Cave => "Cave",
            Biome::Beach => "Beach",
            Biome::Town => "Town",
        }
    }

    /// Ticks between ambient particle bursts.
    pub const fn particle_interval(self) -> u32 {
        match self {
            Biome::Volcano | Biome::Desert => 10,
            Biome::Ice | Biome::Forest => 15,
            Biome::Swamp => 20,
            _ => 30,
        }
    }
}

/// One cell of the world grid with everything living in it.
#[derive(Debug, Clone)]
pub struct Area {
    pub coord: IVec2,
    pub biome: Biome,
    pub enemies: Vec<Enemy>,
    pub items: Vec<Item>,
    pub visited: bool,
    pub particle_timer: u32,
    pub particle_interval: u32,
    /// Present only for town areas
    pub town: Option<Town>,
}

impl Area {
    pub fn new(coord: IVec2, biome: Biome) -> Self {
        Self {
            coord,
            biome,
            enemies: Vec::new(),
            items: Vec::new(),
            visited: false,
            particle_timer: 0,
            particle_interval: biome.particle_interval(),
            town: (biome == Biome::Town).then(Town::default),
        }
    }

    pub fn is_town(&self) -> bool {
        self.biome == Biome::Town
    }

    pub fn origin(&self) -> Vec2 {
        area_origin(self.coord)
    }

    pub fn bounds(&self) -> Rect {
        area_bounds(self.coord)
    }

    /// True when `rect` overlaps a solid building.
    pub fn blocks(&self, rect: Rect) -> bool {
        self.town.is_some()
            && Town::buildings(self.origin()).any(|(_, building)| boxes_overlap(building, rect))
    }

    /// Advance the ambient particle clock. Returns true when a burst is due.
    pub fn tick_particles(&mut self) -> bool {
        self.particle_timer += 1;
        if self.particle_timer >= self.particle_interval {
            self.particle_timer = 0;
            return true;
        }
        false
    }

    /// Remove and return the first enemy overlapping `rect`.
    pub fn take_enemy_touching(&mut self, rect: Rect) -> Option<Enemy> {
        let index = self
            .enemies
            .iter()
            .position(|enemy| boxes_overlap(enemy.bounding_box(), rect))?;
        Some(self.enemies.remove(index))
    }

    /// Remove and return the first item overlapping `rect`.
    pub fn take_item_touching(&mut self, rect: Rect) -> Option<Item> {
        let index = self
            .items
            .iter()
            .position(|item| boxes_overlap(item.bounding_box(), rect))?;
        Some(self.items.remove(index))
    }
}
