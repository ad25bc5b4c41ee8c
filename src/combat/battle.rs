//! Turn-based battle between the player and one opponent.
//!
//! A battle is a small state machine advanced once per tick. Player choices
//! become a queue of [`ActionStep`]s that run one per tick, so a single
//! action plays out over several frames. Cooldowns stand in for animation
//! time. Nothing here blocks.

use rand::Rng;
use std::collections::VecDeque;

use super::components::ScreenShake;
use crate::core::{GameConfig, GameInput, Sfx};
use crate::enemies::Enemy;
use crate::player::Player;

/// Log lines kept in memory; the UI only shows the tail.
const MAX_LOG: usize = 50;
/// Cooldown after a fireball lands.
const FIREBALL_SETTLE: u32 = 2;
/// Ticks a damage number stays on screen.
const HIT_MARKER_TICKS: u32 = 20;
const EXPLOSION_TICKS: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleResult {
    Win,
    Lose,
    Escape,
}

/// The four commands on the 2x2 battle menu, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleAction {
    Attack,
    Magic,
    Item,
    Run,
}

impl BattleAction {
    pub const ALL: [BattleAction; 4] = [
        BattleAction::Attack,
        BattleAction::Magic,
        BattleAction::Item,
        BattleAction::Run,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub const fn label(self) -> &'static str {
        match self {
            BattleAction::Attack => "Attack",
            BattleAction::Magic => "Magic",
            BattleAction::Item => "Item",
            BattleAction::Run => "Run",
        }
    }
}

/// One unit of a queued action, executed on its own tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionStep {
    Log(&'static str),
    AttackAnimation,
    MagicAnimation,
    ResolveAttack,
    LaunchFireball,
    ResolveItem,
    ResolveRun,
}

/// A spell in flight toward the enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fireball {
    pub elapsed: u32,
    pub duration: u32,
}

impl Fireball {
    /// Flight progress in 0.0..=1.0.
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        (self.elapsed as f32 / self.duration as f32).min(1.0)
    }
}

/// Recent damage, shown as a floating number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitMarker {
    pub on_player: bool,
    pub amount: i32,
    pub remaining: u32,
}

/// State of one battle. The player is passed in on every call so the game
/// session stays its single owner.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub enemy: Enemy,
    pub turn: Turn,
    pub steps: VecDeque<ActionStep>,
    pub ended: bool,
    pub result: Option<BattleResult>,
    /// Highlighted menu entry, 0..4
    pub selected: usize,
    pub log: Vec<String>,
    pub action_cooldown: u32,
    pub fireball: Option<Fireball>,
    /// Ticks left on the explosion effect
    pub explosion: u32,
    pub shake: ScreenShake,
    pub hit_marker: Option<HitMarker>,
}

/// Player attack damage with the one-point floor.
pub fn attack_damage(strength: i32, defense_factor: i32) -> i32 {
    (strength - defense_factor).max(1)
}

/// Enemy attack damage: a third of the player's defense is absorbed.
pub fn enemy_damage(strength: i32, defense: i32) -> i32 {
    (strength - defense / 3).max(1)
}

impl BattleSession {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            turn: Turn::Player,
            steps: VecDeque::new(),
            ended: false,
            result: None,
            selected: 0,
            log: vec!["Battle started!".to_string(), "It's your turn!".to_string()],
            action_cooldown: 0,
            fireball: None,
            explosion: 0,
            shake: ScreenShake::default(),
            hit_marker: None,
        }
    }

    pub fn is_boss(&self) -> bool {
        self.enemy.is_boss()
    }

    pub fn is_busy(&self) -> bool {
        !self.steps.is_empty() || self.fireball.is_some()
    }

    /// Whether menu input is accepted right now.
    pub fn accepts_input(&self) -> bool {
        self.turn == Turn::Player && !self.ended && self.action_cooldown == 0 && !self.is_busy()
    }

    pub fn selected_action(&self) -> BattleAction {
        BattleAction::from_index(self.selected)
    }

    pub fn add_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
        if self.log.len() > MAX_LOG {
            let excess = self.log.len() - MAX_LOG;
            self.log.drain(..excess);
        }
    }

    /// Last `count` log lines, oldest first.
    pub fn recent_log(&self, count: usize) -> &[String] {
        let start = self.log.len().saturating_sub(count);
        &self.log[start..]
    }

    /// Route one input to the battle menu.
    pub fn handle_input(
        &mut self,
        input: GameInput,
        player: &Player,
        config: &GameConfig,
        cues: &mut Vec<Sfx>,
    ) {
        if !self.accepts_input() {
            return;
        }
        match input {
            GameInput::Right => self.move_cursor(1, cues),
            GameInput::Left => self.move_cursor(3, cues),
            GameInput::Up | GameInput::Down => self.move_cursor(2, cues),
            GameInput::Confirm | GameInput::Advance => {
                cues.push(Sfx::Enter);
                self.choose(player, config, cues);
            }
            GameInput::Select(index) if index < BattleAction::ALL.len() => {
                self.selected = index;
                cues.push(Sfx::Enter);
                self.choose(player, config, cues);
            }
            _ => {}
        }
    }

    fn move_cursor(&mut self, delta: usize, cues: &mut Vec<Sfx>) {
        self.selected = (self.selected + delta) % BattleAction::ALL.len();
        cues.push(Sfx::Arrow);
    }

    /// Queue the steps for the highlighted action.
    fn choose(&mut self, player: &Player, config: &GameConfig, cues: &mut Vec<Sfx>) {
        let steps: &[ActionStep] = match self.selected_action() {
            BattleAction::Attack => {
                cues.push(Sfx::Attack);
                &[
                    ActionStep::Log("You attack!"),
                    ActionStep::AttackAnimation,
                    ActionStep::ResolveAttack,
                ]
            }
            BattleAction::Magic => {
                if player.mana.current < config.magic_cost {
                    cues.push(Sfx::Click);
                    self.add_log("Not enough mana!");
                    return;
                }
                cues.push(Sfx::Magic);
                &[
                    ActionStep::Log("You cast a fireball!"),
                    ActionStep::MagicAnimation,
                    ActionStep::LaunchFireball,
                ]
            }
            BattleAction::Item => {
                cues.push(Sfx::Item);
                &[ActionStep::Log("You used a health potion!"), ActionStep::ResolveItem]
            }
            BattleAction::Run => {
                cues.push(Sfx::Click);
                &[ActionStep::Log("You attempt to escape..."), ActionStep::ResolveRun]
            }
        };
        self.steps.extend(steps.iter().cloned());
    }

    /// Advance the battle by one tick.
    ///
    /// Returns the result once the battle has ended.
    pub fn tick(
        &mut self,
        player: &mut Player,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Option<BattleResult> {
        if self.ended {
            return self.result;
        }

        player.animation.tick();
        self.enemy.animation.tick();
        self.shake.tick();
        self.explosion = self.explosion.saturating_sub(1);
        if let Some(marker) = &mut self.hit_marker {
            marker.remaining = marker.remaining.saturating_sub(1);
            if marker.remaining == 0 {
                self.hit_marker = None;
            }
        }

        self.advance_fireball(player);

        if self.action_cooldown > 0 {
            self.action_cooldown -= 1;
            return None;
        }

        // Enemy defeat wins ties
        if self.enemy.health.is_empty() {
            self.finish(BattleResult::Win, "You defeated the enemy!");
            return self.result;
        }
        if player.health.is_empty() {
            self.finish(BattleResult::Lose, "You were defeated...");
            return self.result;
        }

        if let Some(step) = self.steps.pop_front() {
            self.execute(step, player, config, rng);
            return if self.ended { self.result } else { None };
        }

        if self.turn == Turn::Enemy {
            self.enemy_attack(player, config);
        }
        None
    }

    fn finish(&mut self, result: BattleResult, line: &str) {
        self.ended = true;
        self.result = Some(result);
        self.steps.clear();
        self.add_log(line);
    }

    fn advance_fireball(&mut self, player: &Player) {
        let Some(fireball) = &mut self.fireball else {
            return;
        };
        fireball.elapsed += 1;
        if fireball.elapsed < fireball.duration {
            return;
        }

        self.fireball = None;
        let damage = attack_damage(player.spell_power(), self.enemy.defense_factor());
        self.enemy.health.take(damage);
        self.enemy.animation.start_hit();
        self.explosion = EXPLOSION_TICKS;
        self.shake.shake(6, 4.0);
        self.mark_hit(false, damage);
        self.add_log(format!("The fireball hits for {damage} damage!"));
        self.turn = Turn::Enemy;
        self.action_cooldown = FIREBALL_SETTLE;
    }

    fn execute(
        &mut self,
        step: ActionStep,
        player: &mut Player,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) {
        match step {
            ActionStep::Log(line) => self.add_log(line),
            ActionStep::AttackAnimation | ActionStep::MagicAnimation => {
                player.animation.start_attack()
            }
            ActionStep::ResolveAttack => {
                let damage = attack_damage(player.strength, self.enemy.defense_factor());
                self.enemy.health.take(damage);
                self.enemy.animation.start_hit();
                self.shake.shake(5, 3.0);
                self.mark_hit(false, damage);
                self.add_log(format!("You deal {damage} damage!"));
                self.end_player_turn(config);
            }
            ActionStep::LaunchFireball => {
                player.mana.take(config.magic_cost);
                self.fireball = Some(Fireball {
                    elapsed: 0,
                    duration: config.fireball_ticks,
                });
            }
            ActionStep::ResolveItem => {
                let healed = player.health.restore(config.potion_heal);
                self.add_log(format!("You recover {healed} HP."));
                self.end_player_turn(config);
            }
            ActionStep::ResolveRun => {
                if rng.gen_bool(config.escape_chance) {
                    self.finish(BattleResult::Escape, "You escaped!");
                } else {
                    self.add_log("Couldn't escape!");
                    self.end_player_turn(config);
                }
            }
        }
    }

    fn end_player_turn(&mut self, config: &GameConfig) {
        self.turn = Turn::Enemy;
        self.action_cooldown = config.action_delay;
    }

    fn enemy_attack(&mut self, player: &mut Player, config: &GameConfig) {
        let damage = enemy_damage(self.enemy.strength, player.defense);
        player.health.take(damage);
        self.add_log(format!("{} attacks for {} damage!", self.enemy.name, damage));
        self.enemy.animation.start_attack();
        player.animation.start_hit();
        self.shake.shake(5, 3.0);
        self.mark_hit(true, damage);
        self.turn = Turn::Player;
        self.add_log("It's your turn!");
        self.action_cooldown = config.action_delay;
    }

    fn mark_hit(&mut self, on_player: bool, amount: i32) {
        self.hit_marker = Some(HitMarker {
            on_player,
            amount,
            remaining: HIT_MARKER_TICKS,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::Element;
    use crate::player::ClassKind;
    use bevy::math::Vec2;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup(class: ClassKind) -> (BattleSession, Player, GameConfig, StdRng) {
        let enemy = Enemy::regular(Element::Fiery, 1, Vec2::ZERO);
        (
            BattleSession::new(enemy),
            Player::new(class),
            GameConfig::default(),
            StdRng::seed_from_u64(11),
        )
    }

    fn run_ticks(
        battle: &mut BattleSession,
        player: &mut Player,
        config: &GameConfig,
        rng: &mut StdRng,
        n: usize,
    ) {
        for _ in 0..n {
            battle.tick(player, config, rng);
        }
    }

    #[test]
    fn starts_on_player_turn_with_greeting() {
        let (battle, ..) = setup(ClassKind::Warrior);
        assert_eq!(battle.turn, Turn::Player);
        assert_eq!(battle.log, vec!["Battle started!", "It's your turn!"]);
        assert!(battle.accepts_input());
    }

    #[test]
    fn warrior_attack_deals_ten() {
        let (mut battle, mut player, config, mut rng) = setup(ClassKind::Warrior);
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Confirm, &player, &config, &mut cues);
        assert_eq!(cues, vec![Sfx::Enter, Sfx::Attack]);
        assert_eq!(battle.steps.len(), 3);
        assert!(!battle.accepts_input());

        run_ticks(&mut battle, &mut player, &config, &mut rng, 3);
        assert_eq!(battle.enemy.health.current, 50);
        assert_eq!(battle.turn, Turn::Enemy);
        assert_eq!(battle.action_cooldown, config.action_delay);
        assert!(battle.log.contains(&"You attack!".to_string()));
    }

    #[test]
    fn attack_damage_has_floor() {
        assert_eq!(attack_damage(15, 5), 10);
        assert_eq!(attack_damage(3, 40), 1);
        assert_eq!(enemy_damage(10, 9), 7);
        assert_eq!(enemy_damage(2, 90), 1);
    }

    #[test]
    fn magic_without_mana_only_logs() {
        let (mut battle, mut player, config, _) = setup(ClassKind::Warrior);
        player.mana.current = 15;
        battle.selected = 1;
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Confirm, &player, &config, &mut cues);

        assert_eq!(battle.log.last().map(String::as_str), Some("Not enough mana!"));
        assert!(battle.steps.is_empty());
        assert_eq!(battle.turn, Turn::Player);
        assert_eq!(player.mana.current, 15);
        assert!(battle.accepts_input());
        assert_eq!(cues.last(), Some(&Sfx::Click));
    }

    #[test]
    fn fireball_lands_after_flight() {
        let (mut battle, mut player, config, mut rng) = setup(ClassKind::Mage);
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Select(1), &player, &config, &mut cues);

        // log, animation, launch
        run_ticks(&mut battle, &mut player, &config, &mut rng, 3);
        assert_eq!(player.mana.current, 100);
        assert!(battle.fireball.is_some());
        assert!(!battle.accepts_input());

        run_ticks(&mut battle, &mut player, &config, &mut rng, config.fireball_ticks as usize);
        assert!(battle.fireball.is_none());
        // 30 + 3 - 5
        assert_eq!(battle.enemy.health.current, 60 - 28);
        assert_eq!(battle.turn, Turn::Enemy);
        assert!(battle.explosion > 0);
    }

    #[test]
    fn enemy_turn_hits_back_and_returns_control() {
        let (mut battle, mut player, config, mut rng) = setup(ClassKind::Warrior);
        battle.enemy.strength = 10;
        player.defense = 9;
        battle.turn = Turn::Enemy;

        battle.tick(&mut player, &config, &mut rng);
        assert_eq!(player.health.current, 120 - 7);
        assert_eq!(battle.turn, Turn::Player);
        assert_eq!(battle.log.last().map(String::as_str), Some("It's your turn!"));
        assert_eq!(battle.action_cooldown, config.action_delay);
        assert!(!battle.accepts_input());

        run_ticks(&mut battle, &mut player, &config, &mut rng, config.action_delay as usize);
        assert!(battle.accepts_input());
    }

    #[test]
    fn double_knockout_is_a_win() {
        let (mut battle, mut player, config, mut rng) = setup(ClassKind::Rogue);
        battle.enemy.health.current = 0;
        player.health.current = 0;
        assert_eq!(battle.tick(&mut player, &config, &mut rng), Some(BattleResult::Win));
        assert!(battle.ended);
    }

    #[test]
    fn ended_battle_does_nothing_more() {
        let (mut battle, mut player, config, mut rng) = setup(ClassKind::Rogue);
        player.health.current = 0;
        battle.turn = Turn::Enemy;
        assert_eq!(battle.tick(&mut player, &config, &mut rng), Some(BattleResult::Lose));
        let log_len = battle.log.len();
        assert_eq!(battle.tick(&mut player, &config, &mut rng), Some(BattleResult::Lose));
        assert_eq!(battle.log.len(), log_len);
        assert!(!battle.accepts_input());
    }

    #[test]
    fn run_escapes_by_default() {
        let (mut battle, mut player, config, mut rng) = setup(ClassKind::Rogue);
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Select(3), &player, &config, &mut cues);
        assert_eq!(battle.tick(&mut player, &config, &mut rng), None);
        assert_eq!(battle.tick(&mut player, &config, &mut rng), Some(BattleResult::Escape));
    }

    #[test]
    fn failed_escape_hands_turn_to_enemy() {
        let (mut battle, mut player, mut config, mut rng) = setup(ClassKind::Rogue);
        config.escape_chance = 0.0;
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Select(3), &player, &config, &mut cues);
        run_ticks(&mut battle, &mut player, &config, &mut rng, 2);
        assert!(!battle.ended);
        assert_eq!(battle.turn, Turn::Enemy);
    }

    #[test]
    fn potion_heals_and_passes_turn() {
        let (mut battle, mut player, config, mut rng) = setup(ClassKind::Mage);
        player.health.take(50);
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Select(2), &player, &config, &mut cues);
        run_ticks(&mut battle, &mut player, &config, &mut rng, 2);
        assert_eq!(player.health.current, 60);
        assert_eq!(battle.turn, Turn::Enemy);
    }

    #[test]
    fn cursor_follows_two_column_grid() {
        let (mut battle, player, config, _) = setup(ClassKind::Warrior);
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Right, &player, &config, &mut cues);
        assert_eq!(battle.selected_action(), BattleAction::Magic);
        battle.handle_input(GameInput::Down, &player, &config, &mut cues);
        assert_eq!(battle.selected_action(), BattleAction::Run);
        battle.handle_input(GameInput::Left, &player, &config, &mut cues);
        assert_eq!(battle.selected_action(), BattleAction::Item);
        battle.handle_input(GameInput::Up, &player, &config, &mut cues);
        assert_eq!(battle.selected_action(), BattleAction::Attack);
        battle.handle_input(GameInput::Left, &player, &config, &mut cues);
        assert_eq!(battle.selected_action(), BattleAction::Run);
        assert!(cues.iter().all(|cue| *cue == Sfx::Arrow));
    }

    #[test]
    fn input_ignored_while_busy() {
        let (mut battle, player, config, _) = setup(ClassKind::Warrior);
        let mut cues = Vec::new();
        battle.handle_input(GameInput::Confirm, &player, &config, &mut cues);
        let queued = battle.steps.len();
        battle.handle_input(GameInput::Confirm, &player, &config, &mut cues);
        battle.handle_input(GameInput::Right, &player, &config, &mut cues);
        assert_eq!(battle.steps.len(), queued);
        assert_eq!(battle.selected, 0);
    }

    #[test]
    fn log_is_bounded() {
        let (mut battle, ..) = setup(ClassKind::Warrior);
        for i in 0..200 {
            battle.add_log(format!("line {i}"));
        }
        assert_eq!(battle.log.len(), MAX_LOG);
        assert_eq!(battle.recent_log(1), ["line 199".to_string()]);
    }

    proptest! {
        #[test]
        fn damage_is_never_below_one(strength in -50i32..500, defense in -50i32..500) {
            prop_assert!(attack_damage(strength, defense) >= 1);
            prop_assert!(enemy_damage(strength, defense) >= 1);
        }

        #[test]
        fn cursor_stays_on_menu(moves in prop::collection::vec(0u8..4, 0..50)) {
            let (mut battle, player, config, _) = setup(ClassKind::Warrior);
            let mut cues = Vec::new();
            for m in moves {
                let input = match m {
                    0 => GameInput::Up,
                    1 => GameInput::Down,
                    2 => GameInput::Left,
                    _ => GameInput::Right,
                };
                battle.handle_input(input, &player, &config, &mut cues);
                prop_assert!(battle.selected < 4);
            }
        }
    }
}
