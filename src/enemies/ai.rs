//! Enemy behavior - slow, periodic chase toward the player.

use bevy::math::{Rect, Vec2};

use super::components::Enemy;
use crate::world::layout::{clamp_sprite, ENEMY_SIZE};

/// Ticks an enemy waits between chase steps.
pub const CHASE_DELAY: u32 = 60;

/// Advance one tick of chase behavior.
///
/// When the cooldown has run out the enemy moves `speed` pixels straight at
/// `target`, stays inside `bounds`, and waits [`CHASE_DELAY`] ticks again.
/// Returns true if the enemy moved this tick.
pub fn chase(enemy: &mut Enemy, target: Vec2, bounds: Rect) -> bool {
    if enemy.move_cooldown > 0 {
        enemy.move_cooldown -= 1;
        return false;
    }

    let delta = target - enemy.position;
    let moved = if let Some(direction) = delta.try_normalize() {
        let next = enemy.position + direction * enemy.speed as f32;
        enemy.position = clamp_sprite(next, ENEMY_SIZE, bounds);
        true
    } else {
        false
    };

    enemy.move_cooldown = CHASE_DELAY;
    moved
}
