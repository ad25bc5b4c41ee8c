//! Battle scene drawing. The menu, log and bars live in the UI layer.

use bevy::prelude::*;

use super::palette;
use super::shapes::{circle, fill_rect, line, outline_rect};
use crate::combat::BattleSession;
use crate::game::{GameRng, GameSession};
use crate::player::{Flourish, Player};

const PLAYER_SPOT: Vec2 = Vec2::new(220.0, 300.0);
const ENEMY_SPOT: Vec2 = Vec2::new(680.0, 200.0);
const PLAYER_SIZE: Vec2 = Vec2::new(80.0, 80.0);

pub fn draw_battle(
    session: Res<GameSession>,
    mut rng: ResMut<GameRng>,
    mut gizmos: Gizmos,
    mut clear: ResMut<ClearColor>,
) {
    let (Some(battle), Some(player)) = (session.battle.as_ref(), session.player.as_ref()) else {
        return;
    };
    clear.0 = palette::BATTLE_FLOOR;
    let (dx, dy) = battle.shake.offset(&mut rng.0);
    let shake = Vec2::new(dx, dy);

    draw_enemy(&mut gizmos, battle, shake);
    draw_player(&mut gizmos, player, shake);

    if let Some(fireball) = battle.fireball {
        let from = PLAYER_SPOT + PLAYER_SIZE / 2.0;
        let to = ENEMY_SPOT + enemy_size(battle) / 2.0;
        let at = from.lerp(to, fireball.progress());
        circle(&mut gizmos, at + shake, 14.0, palette::FIREBALL);
        circle(&mut gizmos, at + shake, 8.0, Color::srgb(1.0, 0.9, 0.3));
    }
    if battle.explosion > 0 {
        let center = ENEMY_SPOT + enemy_size(battle) / 2.0 + shake;
        let radius = 20.0 + (20 - battle.explosion.min(20)) as f32 * 4.0;
        circle(&mut gizmos, center, radius, palette::FIREBALL);
    }
}

fn enemy_size(battle: &BattleSession) -> Vec2 {
    if battle.is_boss() {
        Vec2::new(180.0, 150.0)
    } else {
        Vec2::new(100.0, 100.0)
    }
}

fn draw_enemy(gizmos: &mut Gizmos, battle: &BattleSession, shake: Vec2) {
    let enemy = &battle.enemy;
    let size = enemy_size(battle);
    // Lunge toward the player while attacking
    let swing = (enemy.animation.attack_progress() * std::f32::consts::PI).sin();
    let lunge = Vec2::new(-40.0 * swing, 0.0);
    let at = ENEMY_SPOT + lunge + shake;
    let color = if enemy.animation.hit > 0 && enemy.animation.hit % 4 < 2 {
        Color::WHITE
    } else {
        palette::enemy_color(enemy.kind)
    };
    fill_rect(gizmos, at, size, color);
    if enemy.is_boss() {
        // Wings
        let top = at + Vec2::new(size.x / 2.0, 10.0);
        line(gizmos, top, at + Vec2::new(-40.0, -30.0), color);
        line(gizmos, top, at + Vec2::new(size.x + 40.0, -30.0), color);
    }
}

fn draw_player(gizmos: &mut Gizmos, player: &Player, shake: Vec2) {
    let at = PLAYER_SPOT + shake;
    let color = if player.animation.hit > 0 && player.animation.hit % 4 < 2 {
        Color::WHITE
    } else {
        palette::class_color(player.class())
    };
    fill_rect(gizmos, at, PLAYER_SIZE, color);
    outline_rect(gizmos, at, PLAYER_SIZE, Color::BLACK);

    let progress = player.animation.attack_progress();
    if progress > 0.0 {
        draw_flourish(gizmos, player.class().flourish(), at + PLAYER_SIZE / 2.0, progress);
    }
}

/// Class-specific accent over the attack animation.
fn draw_flourish(gizmos: &mut Gizmos, flourish: Flourish, center: Vec2, progress: f32) {
    match flourish {
        Flourish::SwordArc => {
            let angle = progress * std::f32::consts::PI;
            let tip = center + Vec2::new(70.0 * angle.sin(), -70.0 * angle.cos());
            line(gizmos, center, tip, Color::srgb(0.9, 0.9, 0.95));
        }
        Flourish::ArcaneBurst => {
            circle(gizmos, center, 20.0 + 40.0 * progress, Color::srgb(0.6, 0.5, 1.0));
        }
        Flourish::ThrownKnife => {
            let from = center + Vec2::new(300.0 * progress, -40.0 * progress);
            line(gizmos, from, from + Vec2::new(20.0, 0.0), Color::srgb(0.8, 0.8, 0.8));
        }
    }
}
