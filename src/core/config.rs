//! Gameplay tuning loaded from an external RON file.
//!
//! Every field has a default, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

use super::error::ConfigError;

/// Location of the tuning file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Gameplay configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed simulation rate
    pub tick_rate_hz: f64,
    // Spawning
    pub enemy_spawn_interval: u32,
    pub item_spawn_interval: u32,
    pub max_enemies_per_area: usize,
    pub max_items_per_area: usize,
    pub initial_enemies: usize,
    pub initial_items: usize,
    // Overworld
    pub movement_delay: u32,
    pub fade_speed: u8,
    pub cutscene_page_ticks: u32,
    pub guard_line_ticks: u32,
    // Battle
    pub action_delay: u32,
    pub magic_cost: i32,
    pub potion_heal: i32,
    /// Probability in [0, 1] that Run succeeds
    pub escape_chance: f64,
    pub fireball_ticks: u32,
    pub final_boss_level: u32,
    // Presentation
    pub victory_fallback_ticks: u32,
    pub touch_controls: bool,
    pub muted: bool,
    pub master_volume: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60.0,
            enemy_spawn_interval: 300,
            item_spawn_interval: 600,
            max_enemies_per_area: 3,
            max_items_per_area: 2,
            initial_enemies: 3,
            initial_items: 2,
            movement_delay: 10,
            fade_speed: 10,
            cutscene_page_ticks: 240,
            guard_line_ticks: 240,
            action_delay: 30,
            magic_cost: 20,
            potion_heal: 30,
            escape_chance: 1.0,
            fireball_ticks: 30,
            final_boss_level: 10,
            victory_fallback_ticks: 600,
            touch_controls: false,
            muted: false,
            master_volume: 0.6,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text.
    pub fn from_ron_str(path: &str, contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_hz.is_nan() || self.tick_rate_hz <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "tick_rate_hz",
                reason: format!("must be positive, got {}", self.tick_rate_hz),
            });
        }
        if self.fade_speed == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fade_speed",
                reason: "must be at least 1 or fades never finish".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.escape_chance) {
            return Err(ConfigError::InvalidValue {
                field: "escape_chance",
                reason: format!("must be within [0, 1], got {}", self.escape_chance),
            });
        }
        if self.magic_cost < 0 || self.potion_heal < 0 {
            return Err(ConfigError::InvalidValue {
                field: "magic_cost",
                reason: "costs and heals cannot be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Load config from the RON file, falling back to defaults.
    pub fn load() -> Self {
        match Self::read(CONFIG_PATH) {
            Ok(config) => {
                info!("Loaded game config from {}", CONFIG_PATH);
                config
            }
            Err(e @ ConfigError::ReadError { .. }) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    fn read(path: &str) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_string(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(path, &contents)
    }
}
