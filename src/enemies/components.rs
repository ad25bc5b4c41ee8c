//! Enemy and boss records.

use bevy::math::{Rect, Vec2};
use std::fmt;

use crate::combat::{AnimationCounters, Pool};
use crate::world::layout::{sprite_box, ENEMY_SIZE};

/// Elemental flavor of a regular enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Fiery,
    Shadow,
    Ice,
}

impl Element {
    pub const ALL: [Element; 3] = [Element::Fiery, Element::Shadow, Element::Ice];

    pub const fn name(self) -> &'static str {
        match self {
            Element::Fiery => "Fiery",
            Element::Shadow => "Shadow",
            Element::Ice => "Ice",
        }
    }
}

/// What an opponent is. Boss handling keys off this, never off names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Regular(Element),
    /// Dragon guarding a level-up, scaled to that level
    ProgressiveBoss { level: u32 },
    /// Malakor, the unique final dragon
    FinalBoss,
}

impl EnemyKind {
    pub fn is_boss(self) -> bool {
        !matches!(self, EnemyKind::Regular(_))
    }

    pub fn is_final_boss(self) -> bool {
        matches!(self, EnemyKind::FinalBoss)
    }

    pub fn element(self) -> Option<Element> {
        match self {
            EnemyKind::Regular(element) => Some(element),
            _ => None,
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnemyKind::Regular(element) => write!(f, "{} Enemy", element.name()),
            EnemyKind::ProgressiveBoss { level } => write!(f, "Dragon Boss Lv.{level}"),
            EnemyKind::FinalBoss => f.write_str("Malakor"),
        }
    }
}

/// One opponent, either roaming an area or locked in battle.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub name: String,
    pub health: Pool,
    pub strength: i32,
    pub defense: i32,
    pub speed: i32,
    /// Top-left corner in world coordinates
    pub position: Vec2,
    pub animation: AnimationCounters,
    /// Ticks until the next chase step
    pub move_cooldown: u32,
}

impl Enemy {
    pub(crate) fn with_stats(
        kind: EnemyKind,
        health: i32,
        strength: i32,
        defense: i32,
        speed: i32,
    ) -> Self {
        Self {
            kind,
            name: kind.to_string(),
            health: Pool::new(health),
            strength,
            defense,
            speed,
            position: Vec2::ZERO,
            animation: AnimationCounters::new(15, 10),
            move_cooldown: 0,
        }
    }

    /// Amount of defense subtracted from incoming player damage.
    pub fn defense_factor(&self) -> i32 {
        self.defense / 2
    }

    pub fn is_boss(&self) -> bool {
        self.kind.is_boss()
    }

    pub fn bounding_box(&self) -> Rect {
        sprite_box(self.position, ENEMY_SIZE)
    }
}
