//! The explicit game context threaded through every update.

use bevy::math::Vec2;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cutscene::OpeningCutscene;
use crate::combat::{BattleSession, BossTrigger};
use crate::core::{GameConfig, ScreenFade};
use crate::player::{ClassKind, Player};
use crate::world::layout::{area_origin, AREA_HEIGHT, AREA_WIDTH, START_AREA};
use crate::world::{spawn_enemy, SpawnController, WorldMap};

/// Everything that lives for one run, plus the menu-side bits around it.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameSession {
    pub player: Option<Player>,
    pub world: WorldMap,
    pub spawner: SpawnController,
    pub boss: BossTrigger,
    pub battle: Option<BattleSession>,
    pub score: u32,
    /// Overworld ticks this run
    pub game_time: u64,
    pub movement_cooldown: u32,
    pub show_world_map: bool,
    /// Highlighted entry on the current menu screen
    pub menu_cursor: usize,
    pub cutscene: OpeningCutscene,
    pub fade: ScreenFade,
    pub victory_music_finished: bool,
    pub victory_ticks_left: u32,
}

/// Randomness for spawns and escapes.
#[derive(Resource)]
pub struct GameRng(pub StdRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl GameSession {
    /// Begin a fresh run with a new player of `class`.
    pub fn start_game(&mut self, class: ClassKind, config: &GameConfig, rng: &mut impl Rng) {
        let mut player = Player::new(class);
        player.position = area_origin(START_AREA) + Vec2::new(AREA_WIDTH / 2.0, AREA_HEIGHT / 2.0);

        self.world = WorldMap::new();
        self.spawner = SpawnController::default();
        self.boss = BossTrigger::default();
        self.battle = None;
        self.score = 0;
        self.game_time = 0;
        self.movement_cooldown = 0;
        self.show_world_map = false;

        let area = self.world.current_area_mut();
        for _ in 0..config.initial_enemies {
            spawn_enemy(area, player.level, config.max_enemies_per_area, rng);
        }
        for _ in 0..config.initial_items {
            self.spawner.spawn_item(area, config.max_items_per_area, rng);
        }

        info!("New {} run started", class);
        self.player = Some(player);
    }

    /// Forget the current run.
    pub fn end_run(&mut self) {
        self.player = None;
        self.battle = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_game_populates_the_plains() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = GameSession::default();
        session.score = 99;
        session.start_game(ClassKind::Rogue, &config, &mut rng);

        let player = session.player.as_ref().unwrap();
        assert_eq!(player.position, Vec2::new(1500.0, 1050.0));
        assert_eq!(player.class(), ClassKind::Rogue);
        assert_eq!(session.score, 0);
        let area = session.world.current_area();
        assert_eq!(area.enemies.len(), 3);
        assert_eq!(area.items.len(), 2);
    }

    #[test]
    fn restart_replaces_previous_run() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut session = GameSession::default();
        session.start_game(ClassKind::Warrior, &config, &mut rng);
        session.player.as_mut().unwrap().level = 7;
        session.boss.encounters = 3;

        session.start_game(ClassKind::Mage, &config, &mut rng);
        assert_eq!(session.player.as_ref().unwrap().level, 1);
        assert_eq!(session.boss.encounters, 0);
        assert_eq!(session.world.current_area().enemies.len(), 3);
    }
}
