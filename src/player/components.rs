//! The player record.

use bevy::math::{IVec2, Rect, Vec2};

use super::class::ClassKind;
use crate::combat::{AnimationCounters, Pool};
use crate::world::layout::{clamp_sprite, sprite_box, world_bounds, GRID_SIZE, PLAYER_SIZE};

/// Experience needed for level 2.
pub const STARTING_EXP_TO_LEVEL: u32 = 100;
/// Extra experience required for each level after that.
pub const EXP_CURVE_STEP: u32 = 25;

/// Per-level stat growth.
const HEALTH_PER_LEVEL: i32 = 10;
const MANA_PER_LEVEL: i32 = 5;
const STRENGTH_PER_LEVEL: i32 = 2;
const DEFENSE_PER_LEVEL: i32 = 1;
const SPEED_PER_LEVEL: i32 = 1;

/// The player character for one run.
#[derive(Debug, Clone)]
pub struct Player {
    class: ClassKind,
    pub level: u32,
    pub exp: u32,
    pub exp_to_level: u32,
    pub health: Pool,
    pub mana: Pool,
    pub strength: i32,
    pub defense: i32,
    pub speed: i32,
    /// Top-left corner in world coordinates
    pub position: Vec2,
    pub kills: u32,
    pub items_collected: u32,
    /// Set by a level-up, consumed by the boss trigger or an escape
    pub just_leveled_up: bool,
    /// Blocks boss triggers while a boss encounter is pending resolution
    pub boss_cooldown: bool,
    pub last_boss_level: u32,
    pub animation: AnimationCounters,
}

impl Player {
    pub fn new(class: ClassKind) -> Self {
        let profile = class.profile();
        Self {
            class,
            level: 1,
            exp: 0,
            exp_to_level: STARTING_EXP_TO_LEVEL,
            health: Pool::new(profile.max_health),
            mana: Pool::new(profile.max_mana),
            strength: profile.strength,
            defense: profile.defense,
            speed: profile.speed,
            position: Vec2::ZERO,
            kills: 0,
            items_collected: 0,
            just_leveled_up: false,
            boss_cooldown: false,
            last_boss_level: 0,
            animation: AnimationCounters::new(10, 5),
        }
    }

    pub fn class(&self) -> ClassKind {
        self.class
    }

    /// Fireball damage before the target's defense.
    pub fn spell_power(&self) -> i32 {
        self.class.profile().spell_power + 3 * self.level as i32
    }

    /// Add experience and apply any level-ups it pays for.
    ///
    /// Each level fully restores health and mana. Returns the number of levels
    /// gained.
    pub fn gain_exp(&mut self, amount: u32) -> u32 {
        self.exp += amount;
        let mut gained = 0;
        while self.exp >= self.exp_to_level {
            self.exp -= self.exp_to_level;
            self.level += 1;
            self.exp_to_level += EXP_CURVE_STEP;
            self.health.grow(HEALTH_PER_LEVEL);
            self.mana.grow(MANA_PER_LEVEL);
            self.strength += STRENGTH_PER_LEVEL;
            self.defense += DEFENSE_PER_LEVEL;
            self.speed += SPEED_PER_LEVEL;
            self.health.refill();
            self.mana.refill();
            self.just_leveled_up = true;
            gained += 1;
        }
        gained
    }

    /// Position after one grid step, kept inside the world.
    pub fn step_target(&self, direction: IVec2) -> Vec2 {
        let target = self.position + direction.as_vec2() * GRID_SIZE;
        clamp_sprite(target, PLAYER_SIZE, world_bounds())
    }

    pub fn bounding_box(&self) -> Rect {
        sprite_box(self.position, PLAYER_SIZE)
    }
}
