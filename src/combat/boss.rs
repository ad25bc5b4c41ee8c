//! Boss encounters triggered by leveling up.

use bevy::prelude::*;

use crate::enemies::Enemy;
use crate::player::Player;

pub const BOSS_EXP: u32 = 45;
pub const BOSS_SCORE: u32 = 25;

/// Decides when a level-up turns into a boss fight and settles the aftermath.
#[derive(Debug, Clone, Default)]
pub struct BossTrigger {
    /// Bosses faced this run
    pub encounters: u32,
}

impl BossTrigger {
    /// Whether the player currently qualifies for a boss.
    pub fn is_eligible(player: &Player) -> bool {
        player.just_leveled_up
            && player.level > 1
            && !player.boss_cooldown
            && player.level > player.last_boss_level
    }

    /// Check and accept a boss encounter in one step.
    ///
    /// On success the player is put under cooldown and the level-up flag is
    /// consumed, so the same level-up can never fire twice.
    pub fn try_trigger(&mut self, player: &mut Player, final_boss_level: u32) -> Option<Enemy> {
        if !Self::is_eligible(player) {
            return None;
        }
        player.boss_cooldown = true;
        player.just_leveled_up = false;
        self.encounters += 1;

        let boss = if player.level == final_boss_level {
            Enemy::final_boss()
        } else {
            Enemy::progressive_boss(player.level)
        };
        info!("Boss triggered at level {}: {}", player.level, boss.name);
        Some(boss)
    }

    /// Settle a won boss fight. Returns levels gained from the reward.
    pub fn resolve_win(&mut self, player: &mut Player) -> u32 {
        player.just_leveled_up = false;
        player.kills += 1;
        let levels = player.gain_exp(BOSS_EXP);
        self.close_encounter(player);
        levels
    }

    /// Settle an escaped boss fight. Progress toward the next level is lost.
    pub fn resolve_escape(&mut self, player: &mut Player) {
        player.exp = 0;
        player.just_leveled_up = false;
        self.close_encounter(player);
    }

    pub fn resolve_loss(&mut self, player: &mut Player) {
        self.close_encounter(player);
    }

    fn close_encounter(&mut self, player: &mut Player) {
        player.last_boss_level = player.level;
        player.boss_cooldown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::EnemyKind;
    use crate::player::ClassKind;
    use proptest::prelude::*;

    fn leveled_player(level: u32) -> Player {
        let mut player = Player::new(ClassKind::Warrior);
        player.level = level;
        player.just_leveled_up = true;
        player
    }

    #[test]
    fn level_one_never_triggers() {
        let mut trigger = BossTrigger::default();
        let mut player = leveled_player(1);
        assert!(trigger.try_trigger(&mut player, 10).is_none());
    }

    #[test]
    fn progressive_boss_matches_level() {
        let mut trigger = BossTrigger::default();
        let mut player = leveled_player(3);
        let boss = trigger.try_trigger(&mut player, 10).unwrap();
        assert_eq!(boss.kind, EnemyKind::ProgressiveBoss { level: 3 });
        assert!(player.boss_cooldown);
        assert!(!player.just_leveled_up);
    }

    #[test]
    fn level_ten_brings_the_final_boss() {
        let mut trigger = BossTrigger::default();
        let mut player = Player::new(ClassKind::Mage);
        player.level = 9;
        player.last_boss_level = 9;
        player.exp = player.exp_to_level;
        assert_eq!(player.gain_exp(0), 1);
        assert_eq!(player.level, 10);
        assert!(player.just_leveled_up);

        let boss = trigger.try_trigger(&mut player, 10).unwrap();
        assert_eq!(boss.kind, EnemyKind::FinalBoss);
    }

    #[test]
    fn same_level_cannot_trigger_twice() {
        let mut trigger = BossTrigger::default();
        let mut player = leveled_player(4);
        assert!(trigger.try_trigger(&mut player, 10).is_some());
        assert!(trigger.try_trigger(&mut player, 10).is_none());

        trigger.resolve_escape(&mut player);
        assert_eq!(player.last_boss_level, 4);
        assert!(!player.boss_cooldown);
        // A stale flag at the same level stays blocked.
        player.just_leveled_up = true;
        assert!(trigger.try_trigger(&mut player, 10).is_none());
    }

    #[test]
    fn win_rewards_and_records_level() {
        let mut trigger = BossTrigger::default();
        let mut player = leveled_player(2);
        player.exp_to_level = 125;
        let boss = trigger.try_trigger(&mut player, 10).unwrap();
        assert!(!boss.kind.is_final_boss());
        let levels = trigger.resolve_win(&mut player);
        assert_eq!(levels, 0);
        assert_eq!(player.exp, 45);
        assert_eq!(player.kills, 1);
        assert_eq!(player.last_boss_level, 2);
        assert_eq!(trigger.encounters, 1);
    }

    #[test]
    fn reward_level_up_does_not_chain_a_boss() {
        let mut trigger = BossTrigger::default();
        let mut player = leveled_player(3);
        player.exp = player.exp_to_level - 10;
        let boss = trigger.try_trigger(&mut player, 10).unwrap();
        assert_eq!(trigger.resolve_win(&mut player), 1);
        assert_eq!(player.level, 4);
        assert_eq!(player.last_boss_level, 4);
        assert!(trigger.try_trigger(&mut player, 10).is_none());
    }

    #[test]
    fn escape_wipes_progress() {
        let mut trigger = BossTrigger::default();
        let mut player = leveled_player(5);
        player.exp = 60;
        trigger.try_trigger(&mut player, 10);
        trigger.resolve_escape(&mut player);
        assert_eq!(player.exp, 0);
        assert_eq!(player.level, 5);
    }

    proptest! {
        #[test]
        fn fires_at_most_once_per_level(gains in prop::collection::vec(0u32..200, 1..60)) {
            let mut trigger = BossTrigger::default();
            let mut player = Player::new(ClassKind::Rogue);
            let mut fired_levels = Vec::new();
            for gain in gains {
                player.gain_exp(gain);
                if let Some(_boss) = trigger.try_trigger(&mut player, 10) {
                    prop_assert!(!fired_levels.contains(&player.level));
                    fired_levels.push(player.level);
                    trigger.resolve_escape(&mut player);
                }
            }
        }
    }
}
