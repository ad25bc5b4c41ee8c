//! Exponential easing for 2D positions.

use bevy::prelude::*;

/// A point that eases toward a target a fixed fraction per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedVec2 {
    pub current: Vec2,
    pub target: Vec2,
    /// Fraction of the remaining distance covered each tick (0..=1)
    pub rate: f32,
}

impl Default for EasedVec2 {
    fn default() -> Self {
        Self {
            current: Vec2::ZERO,
            target: Vec2::ZERO,
            rate: 0.15,
        }
    }
}

impl EasedVec2 {
    pub fn new(at: Vec2, rate: f32) -> Self {
        Self {
            current: at,
            target: at,
            rate,
        }
    }

    /// Jump straight to `at` without easing.
    pub fn snap(&mut self, at: Vec2) {
        self.current = at;
        self.target = at;
    }

    pub fn step(&mut self) {
        let t = self.rate.clamp(0.0, 1.0);
        self.current = self.current.lerp(self.target, t);
        // Settle once sub-pixel
        if self.current.distance_squared(self.target) < 0.25 {
            self.current = self.target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}
