//! Pickups lying around the overworld.

use bevy::math::{Rect, Vec2};

use crate::player::Player;
use crate::world::layout::{sprite_box, ITEM_SIZE};

pub const HEALTH_PICKUP: i32 = 30;
pub const MANA_PICKUP: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Health,
    Mana,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Health, ItemKind::Mana];
}

/// Unique per run, so a pickup can be identified after the lists change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub kind: ItemKind,
    /// Top-left corner in world coordinates
    pub position: Vec2,
    /// Ticks alive, drives the hover bob
    pub age: u32,
}

impl Item {
    pub fn new(id: ItemId, kind: ItemKind, position: Vec2) -> Self {
        Self {
            id,
            kind,
            position,
            age: 0,
        }
    }

    pub fn tick(&mut self) {
        self.age = self.age.wrapping_add(1);
    }

    /// Vertical hover offset in pixels.
    pub fn bob(&self) -> f32 {
        (self.age as f32 * 0.1).sin() * 3.0
    }

    pub fn bounding_box(&self) -> Rect {
        sprite_box(self.position, ITEM_SIZE)
    }

    /// Restore the player. Returns the amount actually restored.
    pub fn apply(&self, player: &mut Player) -> i32 {
        player.items_collected += 1;
        match self.kind {
            ItemKind::Health => player.health.restore(HEALTH_PICKUP),
            ItemKind::Mana => player.mana.restore(MANA_PICKUP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::ClassKind;

    #[test]
    fn pickups_restore_and_count() {
        let mut player = Player::new(ClassKind::Mage);
        player.health.take(50);
        player.mana.take(10);

        let potion = Item::new(ItemId(1), ItemKind::Health, Vec2::ZERO);
        assert_eq!(potion.apply(&mut player), 30);
        let ether = Item::new(ItemId(2), ItemKind::Mana, Vec2::ZERO);
        assert_eq!(ether.apply(&mut player), 10);

        assert_eq!(player.health.current, 60);
        assert_eq!(player.mana.current, 120);
        assert_eq!(player.items_collected, 2);
    }
}
