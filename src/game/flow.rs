//! The top-level game state machine.
//!
//! Pure functions over [`GameSession`]: given the active state and an input
//! or a tick, decide what happens and which state comes next. The Bevy
//! system in `plugin.rs` only feeds inputs in and applies the result.

use bevy::prelude::*;
use rand::Rng;

use super::menu::{menu_entries, step_cursor, MenuEntry};
use super::overworld;
use super::session::GameSession;
use crate::combat::{BattleResult, BOSS_SCORE};
use crate::core::{GameConfig, GameInput, GameState, Sfx};

pub const BATTLE_EXP: u32 = 25;
pub const BATTLE_SCORE: u32 = 10;

/// Outcome of handling an input or a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(GameState),
    Quit,
}

/// Run every queued input and then one tick, applying transitions as they
/// happen. Returns true if the game asked to quit.
pub fn step(
    state: &mut GameState,
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut impl Rng,
    inputs: &[GameInput],
    cues: &mut Vec<Sfx>,
) -> bool {
    for input in inputs {
        match handle_input(*state, *input, session, config, rng, cues) {
            Some(Transition::Quit) => return true,
            Some(Transition::To(next)) => enter(state, next, session, config, cues),
            None => {}
        }
    }

    session.fade.tick(config.fade_speed);
    match tick(*state, session, config, rng, cues) {
        Some(Transition::Quit) => true,
        Some(Transition::To(next)) => {
            enter(state, next, session, config, cues);
            false
        }
        None => false,
    }
}

/// Make `next` the active state and run its entry effects.
fn enter(
    state: &mut GameState,
    next: GameState,
    session: &mut GameSession,
    config: &GameConfig,
    cues: &mut Vec<Sfx>,
) {
    if *state == next {
        return;
    }
    *state = next;
    session.menu_cursor = 0;
    match next {
        GameState::StartMenu => session.end_run(),
        GameState::OpeningCutscene => session.cutscene = Default::default(),
        GameState::GameOver => cues.push(Sfx::GameOver),
        GameState::Victory => {
            cues.push(Sfx::Victory);
            session.victory_music_finished = false;
            session.victory_ticks_left = config.victory_fallback_ticks;
        }
        GameState::CharacterSelect | GameState::Overworld | GameState::Battle => {}
    }
}

/// React to one input in the active state.
pub fn handle_input(
    state: GameState,
    input: GameInput,
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut impl Rng,
    cues: &mut Vec<Sfx>,
) -> Option<Transition> {
    match state {
        GameState::StartMenu
        | GameState::CharacterSelect
        | GameState::GameOver
        | GameState::Victory => {
            menu_input(state, input, session, config, rng, cues)
        }
        GameState::OpeningCutscene => {
            session.cutscene.skip();
            Some(Transition::To(GameState::CharacterSelect))
        }
        GameState::Overworld => overworld_input(input, session, config, cues),
        GameState::Battle => {
            if let (Some(battle), Some(player)) =
                (session.battle.as_mut(), session.player.as_ref())
            {
                battle.handle_input(input, player, config, cues);
            }
            None
        }
    }
}

fn menu_input(
    state: GameState,
    input: GameInput,
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut impl Rng,
    cues: &mut Vec<Sfx>,
) -> Option<Transition> {
    let entries = menu_entries(state);
    let chosen = match input {
        GameInput::Up | GameInput::Left => {
            session.menu_cursor = step_cursor(session.menu_cursor, entries.len(), false);
            cues.push(Sfx::Arrow);
            None
        }
        GameInput::Down | GameInput::Right => {
            session.menu_cursor = step_cursor(session.menu_cursor, entries.len(), true);
            cues.push(Sfx::Arrow);
            None
        }
        GameInput::Confirm | GameInput::Advance => entries.get(session.menu_cursor).copied(),
        GameInput::Select(index) => entries.get(index).copied(),
        GameInput::Cancel => {
            // The victory screen waits for its music instead
            return match state {
                GameState::StartMenu | GameState::Victory => None,
                _ => Some(Transition::To(GameState::StartMenu)),
            };
        }
        GameInput::ToggleMap | GameInput::AnyKey => None,
    }?;

    cues.push(Sfx::Click);
    let transition = match chosen {
        MenuEntry::Start => Transition::To(GameState::OpeningCutscene),
        MenuEntry::Quit => Transition::Quit,
        MenuEntry::Class(class) => {
            session.start_game(class, config, rng);
            Transition::To(GameState::Overworld)
        }
        MenuEntry::Back | MenuEntry::MainMenu => Transition::To(GameState::StartMenu),
        MenuEntry::Restart => Transition::To(GameState::CharacterSelect),
    };
    Some(transition)
}

fn overworld_input(
    input: GameInput,
    session: &mut GameSession,
    config: &GameConfig,
    cues: &mut Vec<Sfx>,
) -> Option<Transition> {
    match input {
        GameInput::Cancel => return Some(Transition::To(GameState::GameOver)),
        GameInput::ToggleMap => session.show_world_map = !session.show_world_map,
        GameInput::Advance => {
            overworld::advance_dialogue(session);
        }
        other => {
            if let Some(direction) = other.direction() {
                overworld::try_move(session, direction, config, cues);
            }
        }
    }
    None
}

/// Advance the active state by one tick.
pub fn tick(
    state: GameState,
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut impl Rng,
    cues: &mut Vec<Sfx>,
) -> Option<Transition> {
    match state {
        GameState::StartMenu | GameState::CharacterSelect | GameState::GameOver => None,
        GameState::OpeningCutscene => session
            .cutscene
            .tick(config.cutscene_page_ticks)
            .then_some(Transition::To(GameState::CharacterSelect)),
        GameState::Overworld => {
            if session.player.is_none() {
                warn!("Overworld without a player, returning to the menu");
                return Some(Transition::To(GameState::StartMenu));
            }
            overworld::tick(session, config, rng, cues).map(|_| Transition::To(GameState::Battle))
        }
        GameState::Battle => battle_tick(session, config, rng, cues),
        GameState::Victory => {
            session.victory_ticks_left = session.victory_ticks_left.saturating_sub(1);
            (session.victory_music_finished || session.victory_ticks_left == 0)
                .then_some(Transition::To(GameState::StartMenu))
        }
    }
}

fn battle_tick(
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut impl Rng,
    cues: &mut Vec<Sfx>,
) -> Option<Transition> {
    let (Some(battle), Some(player)) = (session.battle.as_mut(), session.player.as_mut()) else {
        warn!("Battle state without a battle session");
        return Some(Transition::To(GameState::Overworld));
    };
    let result = battle.tick(player, config, rng)?;
    Some(Transition::To(resolve_battle(session, result, cues)))
}

/// Apply rewards and penalties for a finished battle and pick the next state.
pub fn resolve_battle(
    session: &mut GameSession,
    result: BattleResult,
    cues: &mut Vec<Sfx>,
) -> GameState {
    let Some(battle) = session.battle.take() else {
        return GameState::Overworld;
    };
    let Some(player) = session.player.as_mut() else {
        return GameState::StartMenu;
    };
    let kind = battle.enemy.kind;
    info!("Battle against {} ended: {:?}", battle.enemy.name, result);

    if kind.is_boss() {
        return match result {
            BattleResult::Win => {
                let levels = session.boss.resolve_win(player);
                session.score += BOSS_SCORE;
                if levels > 0 {
                    cues.push(Sfx::LevelUp);
                }
                if kind.is_final_boss() {
                    GameState::Victory
                } else {
                    session.fade.start();
                    GameState::Overworld
                }
            }
            BattleResult::Lose => {
                session.boss.resolve_loss(player);
                GameState::GameOver
            }
            BattleResult::Escape => {
                session.boss.resolve_escape(player);
                GameState::Overworld
            }
        };
    }

    match result {
        BattleResult::Win => {
            player.kills += 1;
            if player.gain_exp(BATTLE_EXP) > 0 {
                info!("Reached level {}", player.level);
                cues.push(Sfx::LevelUp);
            }
            session.score += BATTLE_SCORE;
            session.fade.start();
            GameState::Overworld
        }
        BattleResult::Lose => GameState::GameOver,
        BattleResult::Escape => {
            player.exp = 0;
            player.just_leveled_up = false;
            GameState::Overworld
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::BattleSession;
    use crate::enemies::{Element, Enemy};
    use crate::player::ClassKind;
    use bevy::math::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Harness {
        state: GameState,
        session: GameSession,
        config: GameConfig,
        rng: StdRng,
        cues: Vec<Sfx>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: GameState::StartMenu,
                session: GameSession::default(),
                config: GameConfig {
                    initial_enemies: 0,
                    initial_items: 0,
                    ..GameConfig::default()
                },
                rng: StdRng::seed_from_u64(42),
                cues: Vec::new(),
            }
        }

        fn press(&mut self, inputs: &[GameInput]) -> bool {
            step(
                &mut self.state,
                &mut self.session,
                &self.config,
                &mut self.rng,
                inputs,
                &mut self.cues,
            )
        }

        fn idle(&mut self, ticks: usize) {
            for _ in 0..ticks {
                self.press(&[]);
            }
        }

        fn in_overworld(class_index: usize) -> Self {
            let mut harness = Self::new();
            harness.press(&[GameInput::Confirm]);
            harness.press(&[GameInput::Cancel]);
            harness.press(&[GameInput::Select(class_index)]);
            assert_eq!(harness.state, GameState::Overworld);
            harness
        }

        fn start_battle(&mut self, enemy: Enemy) {
            self.session.battle = Some(BattleSession::new(enemy));
            self.state = GameState::Battle;
        }
    }

    #[test]
    fn title_to_overworld() {
        let mut h = Harness::new();
        h.press(&[GameInput::Confirm]);
        assert_eq!(h.state, GameState::OpeningCutscene);
        h.press(&[GameInput::Advance]);
        assert_eq!(h.state, GameState::CharacterSelect);
        h.press(&[GameInput::Down, GameInput::Confirm]);
        assert_eq!(h.state, GameState::Overworld);
        assert_eq!(h.session.player.as_ref().unwrap().class(), ClassKind::Mage);
    }

    #[test]
    fn quit_from_title() {
        let mut h = Harness::new();
        assert!(h.press(&[GameInput::Select(1)]));
    }

    #[test]
    fn any_key_skips_the_cutscene() {
        let keys = [
            GameInput::Down,
            GameInput::ToggleMap,
            GameInput::Select(3),
            GameInput::AnyKey,
        ];
        for key in keys {
            let mut h = Harness::new();
            h.press(&[GameInput::Confirm]);
            assert_eq!(h.state, GameState::OpeningCutscene);
            h.press(&[key]);
            assert_eq!(h.state, GameState::CharacterSelect, "{key:?} should skip");
            assert_eq!(h.session.menu_cursor, 0);
        }
    }

    #[test]
    fn cutscene_finishes_on_its_own() {
        let mut h = Harness::new();
        h.config.cutscene_page_ticks = 5;
        h.press(&[GameInput::Select(0)]);
        h.idle(4 * 5);
        assert_eq!(h.state, GameState::CharacterSelect);
    }

    #[test]
    fn character_select_back_returns_to_title() {
        let mut h = Harness::new();
        h.press(&[GameInput::Confirm, GameInput::Cancel]);
        h.press(&[GameInput::Select(3)]);
        assert_eq!(h.state, GameState::StartMenu);
    }

    #[test]
    fn escape_in_overworld_is_game_over() {
        let mut h = Harness::in_overworld(0);
        h.press(&[GameInput::Cancel]);
        assert_eq!(h.state, GameState::GameOver);
        assert!(h.cues.contains(&Sfx::GameOver));
        h.press(&[GameInput::Select(0)]);
        assert_eq!(h.state, GameState::CharacterSelect);
        h.press(&[GameInput::Cancel]);
        assert_eq!(h.state, GameState::StartMenu);
        assert!(h.session.player.is_none());
    }

    #[test]
    fn map_toggle() {
        let mut h = Harness::in_overworld(0);
        h.press(&[GameInput::ToggleMap]);
        assert!(h.session.show_world_map);
        h.press(&[GameInput::ToggleMap]);
        assert!(!h.session.show_world_map);
    }

    #[test]
    fn regular_win_rewards_player() {
        let mut h = Harness::in_overworld(0);
        let mut enemy = Enemy::regular(Element::Ice, 1, Vec2::ZERO);
        enemy.health.current = 0;
        h.start_battle(enemy);
        h.idle(1);
        assert_eq!(h.state, GameState::Overworld);
        let player = h.session.player.as_ref().unwrap();
        assert_eq!(player.kills, 1);
        assert_eq!(player.exp, 25);
        assert_eq!(h.session.score, 10);
        assert!(h.session.battle.is_none());
    }

    #[test]
    fn regular_escape_wipes_exp() {
        let mut h = Harness::in_overworld(2);
        h.session.player.as_mut().unwrap().exp = 80;
        h.start_battle(Enemy::regular(Element::Shadow, 1, Vec2::ZERO));
        h.press(&[GameInput::Select(3)]);
        h.idle(2);
        assert_eq!(h.state, GameState::Overworld);
        assert_eq!(h.session.player.as_ref().unwrap().exp, 0);
    }

    #[test]
    fn losing_any_battle_is_game_over() {
        let mut h = Harness::in_overworld(1);
        h.session.player.as_mut().unwrap().health.current = 0;
        h.start_battle(Enemy::progressive_boss(3));
        h.idle(1);
        assert_eq!(h.state, GameState::GameOver);
    }

    #[test]
    fn level_up_from_battle_summons_boss_next_tick() {
        let mut h = Harness::in_overworld(0);
        h.session.player.as_mut().unwrap().exp = 90;
        let mut enemy = Enemy::regular(Element::Fiery, 1, Vec2::ZERO);
        enemy.health.current = 0;
        h.start_battle(enemy);
        h.idle(1);
        assert_eq!(h.state, GameState::Overworld);
        assert!(h.cues.contains(&Sfx::LevelUp));

        h.idle(1);
        assert_eq!(h.state, GameState::Battle);
        let battle = h.session.battle.as_ref().unwrap();
        assert!(battle.is_boss());
        assert_eq!(battle.enemy.name, "Dragon Boss Lv.2");
    }

    #[test]
    fn beating_the_final_boss_is_victory_then_menu() {
        let mut h = Harness::in_overworld(0);
        h.config.victory_fallback_ticks = 3;
        let mut boss = Enemy::final_boss();
        boss.health.current = 0;
        h.start_battle(boss);
        h.idle(1);
        assert_eq!(h.state, GameState::Victory);

        h.idle(3);
        assert_eq!(h.state, GameState::StartMenu);
    }

    #[test]
    fn escape_is_ignored_on_the_victory_screen() {
        let mut h = Harness::in_overworld(0);
        let mut boss = Enemy::final_boss();
        boss.health.current = 0;
        h.start_battle(boss);
        h.idle(1);
        h.press(&[GameInput::Cancel]);
        assert_eq!(h.state, GameState::Victory);
        assert!(h.session.player.is_some());
    }

    #[test]
    fn victory_music_end_returns_to_menu() {
        let mut h = Harness::in_overworld(0);
        let mut boss = Enemy::final_boss();
        boss.health.current = 0;
        h.start_battle(boss);
        h.idle(1);
        h.session.victory_music_finished = true;
        h.idle(1);
        assert_eq!(h.state, GameState::StartMenu);
    }

    #[test]
    fn progressive_boss_win_returns_to_overworld() {
        let mut h = Harness::in_overworld(0);
        let player = h.session.player.as_mut().unwrap();
        player.level = 3;
        player.boss_cooldown = true;
        let mut boss = Enemy::progressive_boss(3);
        boss.health.current = 0;
        h.start_battle(boss);
        h.idle(1);
        assert_eq!(h.state, GameState::Overworld);
        let player = h.session.player.as_ref().unwrap();
        assert_eq!(player.last_boss_level, 3);
        assert!(!player.boss_cooldown);
        assert_eq!(h.session.score, 25);
    }
}
