//! Per-tick overworld update and player movement.

use bevy::math::{IVec2, Vec2};
use bevy::prelude::*;
use rand::Rng;

use super::session::GameSession;
use crate::combat::BattleSession;
use crate::core::{GameConfig, Sfx};
use crate::enemies::chase;
use crate::world::layout::{sprite_box, AREA_WIDTH, PLAYER_SIZE, TOWN_GATE_OFFSET_Y};

/// What the overworld tick decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverworldEvent {
    /// A boss stepped in after a level-up
    BossEncounter,
    /// The player walked into an enemy
    EnemyEncounter,
}

/// Advance the overworld by one tick.
///
/// Returns an event when the tick ended in a battle. The boss check runs
/// before collisions and ends the tick when it fires.
pub fn tick(
    session: &mut GameSession,
    config: &GameConfig,
    rng: &mut impl Rng,
    cues: &mut Vec<Sfx>,
) -> Option<OverworldEvent> {
    let GameSession {
        player,
        world,
        spawner,
        boss,
        battle,
        game_time,
        movement_cooldown,
        ..
    } = session;
    let player = player.as_mut()?;

    *game_time += 1;
    spawner.advance_timers();
    *movement_cooldown = movement_cooldown.saturating_sub(1);
    player.animation.tick();

    world.update();
    if let Some(coord) = world.check_area_transition(player.position) {
        let area = world.current_area_mut();
        info!("Entered {} at {:?}", area.biome.name(), coord);
        let origin = area.origin();
        if let Some(town) = area.town.as_mut() {
            player.position = area_gate(origin);
            if town.greet() {
                debug!("Town guard greeting started");
            }
        }
    }

    let area = world.current_area_mut();
    area.tick_particles();
    if let Some(town) = area.town.as_mut() {
        town.tick(config.guard_line_ticks);
    }
    for item in area.items.iter_mut() {
        item.tick();
    }

    spawner.spawn_due(area, player.level, config, rng);

    let bounds = area.bounds();
    for enemy in area.enemies.iter_mut() {
        chase(enemy, player.position, bounds);
        enemy.animation.tick();
    }

    if let Some(dragon) = boss.try_trigger(player, config.final_boss_level) {
        *battle = Some(BattleSession::new(dragon));
        return Some(OverworldEvent::BossEncounter);
    }

    let hitbox = player.bounding_box();
    if let Some(enemy) = area.take_enemy_touching(hitbox) {
        info!("Encountered {}", enemy.name);
        *battle = Some(BattleSession::new(enemy));
        return Some(OverworldEvent::EnemyEncounter);
    }

    while let Some(item) = area.take_item_touching(hitbox) {
        let restored = item.apply(player);
        debug!("Picked up {:?} item, restored {}", item.kind, restored);
        cues.push(Sfx::Item);
    }

    None
}

/// Where town arrivals are placed.
fn area_gate(origin: Vec2) -> Vec2 {
    origin + Vec2::new(AREA_WIDTH / 2.0, TOWN_GATE_OFFSET_Y)
}

/// Try one grid step. Returns true if the player moved.
pub fn try_move(
    session: &mut GameSession,
    direction: IVec2,
    config: &GameConfig,
    cues: &mut Vec<Sfx>,
) -> bool {
    if session.movement_cooldown > 0 {
        return false;
    }
    let Some(player) = session.player.as_mut() else {
        return false;
    };
    cues.push(Sfx::Arrow);

    let target = player.step_target(direction);
    if session.world.current_area().blocks(sprite_box(target, PLAYER_SIZE)) {
        return false;
    }
    player.position = target;
    session.movement_cooldown = config.movement_delay;
    true
}

/// Space in the overworld: move the town guard's dialogue along.
pub fn advance_dialogue(session: &mut GameSession) -> bool {
    match session.world.current_area_mut().town.as_mut() {
        Some(town) if town.is_talking() => {
            town.advance();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::{Element, Enemy, EnemyKind};
    use crate::player::ClassKind;
    use crate::world::layout::{area_origin, GRID_SIZE};
    use crate::world::{GuardPhase, Item, ItemId, ItemKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A run in an empty plains area with the player at its center.
    fn quiet_session(class: ClassKind) -> (GameSession, GameConfig, StdRng) {
        let config = GameConfig {
            initial_enemies: 0,
            initial_items: 0,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(21);
        let mut session = GameSession::default();
        session.start_game(class, &config, &mut rng);
        (session, config, rng)
    }

    #[test]
    fn walking_into_an_enemy_starts_a_battle() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Warrior);
        let at = session.player.as_ref().unwrap().position;
        session
            .world
            .current_area_mut()
            .enemies
            .push(Enemy::regular(Element::Ice, 1, at + Vec2::new(10.0, 0.0)));

        let mut cues = Vec::new();
        let event = tick(&mut session, &config, &mut rng, &mut cues);
        assert_eq!(event, Some(OverworldEvent::EnemyEncounter));
        assert!(session.world.current_area().enemies.is_empty());
        let kind = session.battle.as_ref().map(|b| b.enemy.kind);
        assert_eq!(kind, Some(EnemyKind::Regular(Element::Ice)));
    }

    #[test]
    fn boss_trigger_preempts_collision() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Warrior);
        let player = session.player.as_mut().unwrap();
        player.gain_exp(100);
        let at = player.position;
        session
            .world
            .current_area_mut()
            .enemies
            .push(Enemy::regular(Element::Fiery, 1, at));

        let mut cues = Vec::new();
        let event = tick(&mut session, &config, &mut rng, &mut cues);
        assert_eq!(event, Some(OverworldEvent::BossEncounter));
        // The touching enemy is left alone this tick
        assert_eq!(session.world.current_area().enemies.len(), 1);
        assert!(session.battle.as_ref().unwrap().is_boss());
    }

    #[test]
    fn item_is_collected_once() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Mage);
        let player = session.player.as_mut().unwrap();
        player.health.take(40);
        let at = player.position;
        session
            .world
            .current_area_mut()
            .items
            .push(Item::new(ItemId(77), ItemKind::Health, at));

        let mut cues = Vec::new();
        tick(&mut session, &config, &mut rng, &mut cues);
        tick(&mut session, &config, &mut rng, &mut cues);

        let player = session.player.as_ref().unwrap();
        assert_eq!(player.items_collected, 1);
        assert_eq!(player.health.current, 70);
        assert!(session.world.current_area().items.iter().all(|item| item.id != ItemId(77)));
        assert_eq!(cues, vec![Sfx::Item]);
    }

    #[test]
    fn stacked_items_are_all_collected_in_one_tick() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Mage);
        let player = session.player.as_mut().unwrap();
        player.health.take(40);
        player.mana.take(50);
        let at = player.position;
        let items = &mut session.world.current_area_mut().items;
        items.push(Item::new(ItemId(1), ItemKind::Health, at));
        items.push(Item::new(ItemId(2), ItemKind::Mana, at + Vec2::new(5.0, 5.0)));

        let mut cues = Vec::new();
        tick(&mut session, &config, &mut rng, &mut cues);

        let player = session.player.as_ref().unwrap();
        assert_eq!(player.items_collected, 2);
        assert_eq!(player.health.current, 70);
        assert_eq!(player.mana.current, 110);
        assert!(session.world.current_area().items.is_empty());
        assert_eq!(cues, vec![Sfx::Item, Sfx::Item]);
    }

    #[test]
    fn movement_respects_cooldown() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Rogue);
        let start = session.player.as_ref().unwrap().position;
        let mut cues = Vec::new();

        assert!(try_move(&mut session, IVec2::new(1, 0), &config, &mut cues));
        assert!(!try_move(&mut session, IVec2::new(1, 0), &config, &mut cues));
        for _ in 0..config.movement_delay {
            tick(&mut session, &config, &mut rng, &mut cues);
        }
        assert!(try_move(&mut session, IVec2::new(1, 0), &config, &mut cues));
        let position = session.player.as_ref().unwrap().position;
        assert_eq!(position, start + Vec2::new(2.0 * GRID_SIZE, 0.0));
    }

    #[test]
    fn entering_town_snaps_to_gate_and_greets() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Warrior);
        let town_origin = area_origin(IVec2::new(1, 2));
        session.player.as_mut().unwrap().position = town_origin + Vec2::new(200.0, 0.0);

        let mut cues = Vec::new();
        tick(&mut session, &config, &mut rng, &mut cues);
        let player = session.player.as_ref().unwrap();
        assert_eq!(player.position, town_origin + Vec2::new(500.0, 260.0));
        let town = session.world.current_area().town.as_ref().unwrap();
        assert_eq!(town.phase, GuardPhase::Talking);

        assert!(advance_dialogue(&mut session));
        assert_eq!(session.world.current_area().town.as_ref().unwrap().line, 1);
    }

    #[test]
    fn buildings_block_steps() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Warrior);
        let town_origin = area_origin(IVec2::new(1, 2));
        session.player.as_mut().unwrap().position = town_origin + Vec2::new(500.0, 260.0);
        let mut cues = Vec::new();
        tick(&mut session, &config, &mut rng, &mut cues);

        // Walk left toward the inn row until blocked
        session.player.as_mut().unwrap().position = town_origin + Vec2::new(300.0, 150.0);
        assert!(!try_move(&mut session, IVec2::new(-1, 0), &config, &mut cues));
        let position = session.player.as_ref().unwrap().position;
        assert_eq!(position, town_origin + Vec2::new(300.0, 150.0));
        assert_eq!(session.movement_cooldown, 0);
    }

    #[test]
    fn towns_stay_free_of_enemies() {
        let (mut session, config, mut rng) = quiet_session(ClassKind::Warrior);
        let town_origin = area_origin(IVec2::new(1, 2));
        session.player.as_mut().unwrap().position = town_origin + Vec2::new(500.0, 10.0);
        let mut cues = Vec::new();
        for _ in 0..(config.enemy_spawn_interval * 4) {
            tick(&mut session, &config, &mut rng, &mut cues);
        }
        let area = session.world.current_area();
        assert!(area.is_town());
        assert!(area.enemies.is_empty());
        let collected = session.player.as_ref().unwrap().items_collected;
        assert!(!area.items.is_empty() || collected > 0);
    }
}
