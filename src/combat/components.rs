//! Combat-related building blocks shared by players, enemies and bosses.

use rand::Rng;

/// A bounded integer resource such as health or mana.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    pub current: i32,
    pub maximum: i32,
}

impl Pool {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Remove up to `amount`, never going below zero. Returns what was removed.
    pub fn take(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current.max(0));
        self.current -= actual;
        actual
    }

    /// Add up to `amount`, never exceeding the maximum. Returns what was added.
    pub fn restore(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, (self.maximum - self.current).max(0));
        self.current += actual;
        actual
    }

    pub fn refill(&mut self) {
        self.current = self.maximum;
    }

    /// Raise the maximum without touching the current value.
    pub fn grow(&mut self, amount: i32) {
        self.maximum += amount;
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    pub fn fraction(&self) -> f32 {
        if self.maximum <= 0 {
            return 0.0;
        }
        self.current as f32 / self.maximum as f32
    }
}

/// Attack and hit animation countdowns, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationCounters {
    pub attack: u32,
    pub hit: u32,
    attack_length: u32,
    hit_length: u32,
}

impl AnimationCounters {
    pub const fn new(attack_length: u32, hit_length: u32) -> Self {
        Self {
            attack: 0,
            hit: 0,
            attack_length,
            hit_length,
        }
    }

    pub fn start_attack(&mut self) {
        self.attack = self.attack_length;
    }

    pub fn start_hit(&mut self) {
        self.hit = self.hit_length;
    }

    pub fn tick(&mut self) {
        self.attack = self.attack.saturating_sub(1);
        self.hit = self.hit.saturating_sub(1);
    }

    /// Attack progress in 0.0..=1.0, zero when idle.
    pub fn attack_progress(&self) -> f32 {
        if self.attack == 0 || self.attack_length == 0 {
            return 0.0;
        }
        1.0 - self.attack as f32 / self.attack_length as f32
    }

    pub fn is_idle(&self) -> bool {
        self.attack == 0 && self.hit == 0
    }
}

/// Battle camera shake.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenShake {
    pub remaining: u32,
    pub intensity: f32,
}

impl ScreenShake {
    /// Start or extend a shake. Overlapping shakes keep the stronger values.
    pub fn shake(&mut self, ticks: u32, intensity: f32) {
        self.remaining = self.remaining.max(ticks);
        self.intensity = self.intensity.max(intensity);
    }

    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.intensity = 0.0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Random pixel offset for this frame.
    pub fn offset(&self, rng: &mut impl Rng) -> (f32, f32) {
        if !self.is_active() || self.intensity <= 0.0 {
            return (0.0, 0.0);
        }
        (
            rng.gen_range(-self.intensity..=self.intensity),
            rng.gen_range(-self.intensity..=self.intensity),
        )
    }
}
