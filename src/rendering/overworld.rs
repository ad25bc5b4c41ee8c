//! Overworld drawing: the current area, its occupants, and the world map.

use bevy::prelude::*;

use super::palette;
use super::shapes::{circle, fill_rect, outline_rect};
use crate::game::GameSession;
use crate::world::layout::{
    area_origin, AREA_HEIGHT, AREA_WIDTH, ENEMY_SIZE, GRID_COLUMNS, GRID_ROWS, ITEM_SIZE,
    PLAYER_SIZE,
};
use crate::world::{Area, Town, WorldMap, GUARD_OFFSET};

/// Draw everything in the area the player stands in.
pub fn draw_overworld(
    session: Res<GameSession>,
    mut gizmos: Gizmos,
    mut clear: ResMut<ClearColor>,
) {
    let Some(player) = session.player.as_ref() else {
        return;
    };
    let world = &session.world;
    let area = world.current_area();
    clear.0 = palette::biome_ground(area.biome);

    draw_particles(&mut gizmos, area, session.game_time);
    if area.is_town() {
        draw_town(&mut gizmos, world, area);
    }

    for item in &area.items {
        let at = world.world_to_screen(item.position) + Vec2::new(0.0, item.bob());
        let half = ITEM_SIZE / 2.0;
        circle(&mut gizmos, at + Vec2::splat(half), half, palette::item_color(item.kind));
    }

    for enemy in &area.enemies {
        let at = world.world_to_screen(enemy.position);
        let mut color = palette::enemy_color(enemy.kind);
        if enemy.animation.hit > 0 {
            color = Color::WHITE;
        }
        fill_rect(&mut gizmos, at, Vec2::splat(ENEMY_SIZE), color);
    }

    let at = world.world_to_screen(player.position);
    fill_rect(&mut gizmos, at, Vec2::splat(PLAYER_SIZE), palette::class_color(player.class()));
    outline_rect(&mut gizmos, at, Vec2::splat(PLAYER_SIZE), Color::BLACK);
}

fn draw_town(gizmos: &mut Gizmos, world: &WorldMap, area: &Area) {
    for (_, building) in Town::buildings(area.origin()) {
        let at = world.world_to_screen(building.min);
        fill_rect(gizmos, at, building.size(), palette::BUILDING);
    }
    let guard = world.world_to_screen(area.origin() + GUARD_OFFSET);
    fill_rect(gizmos, guard, Vec2::new(30.0, 50.0), palette::GUARD);
}

/// Drifting ambient specks; denser in biomes with short particle intervals.
fn draw_particles(gizmos: &mut Gizmos, area: &Area, game_time: u64) {
    let count = (600 / area.particle_interval.max(1)) as u64;
    let color = palette::biome_particle(area.biome);
    for i in 0..count {
        let seed = i.wrapping_mul(2_654_435_761) % 1000;
        let x = (seed as f32 * 7.3 + game_time as f32 * 0.4) % AREA_WIDTH;
        let y = (seed as f32 * 0.7 + i as f32 * 37.0 + game_time as f32 * 0.6) % AREA_HEIGHT;
        circle(gizmos, Vec2::new(x, y), 1.5, color);
    }
}

/// The 3x3 overview shown with M.
pub fn draw_world_map(session: Res<GameSession>, mut gizmos: Gizmos) {
    if !session.show_world_map {
        return;
    }
    let cell = Vec2::new(120.0, 84.0);
    let grid = cell * Vec2::new(GRID_COLUMNS as f32, GRID_ROWS as f32);
    let corner = (Vec2::new(AREA_WIDTH, AREA_HEIGHT) - grid) / 2.0;
    let current = session.world.current_coord();

    for area in session.world.areas() {
        let at = corner + cell * area.coord.as_vec2();
        let color = if area.visited {
            palette::biome_ground(area.biome)
        } else {
            palette::MAP_UNVISITED
        };
        fill_rect(&mut gizmos, at, cell, color);
        outline_rect(&mut gizmos, at, cell, Color::BLACK);
        if area.coord == current {
            outline_rect(
                &mut gizmos,
                at + Vec2::splat(4.0),
                cell - Vec2::splat(8.0),
                palette::MAP_CURSOR,
            );
        }
    }

    // Player dot relative to the current cell
    if let Some(player) = session.player.as_ref() {
        let within = (player.position - area_origin(current)) / Vec2::new(AREA_WIDTH, AREA_HEIGHT);
        let dot = corner + cell * (current.as_vec2() + within.clamp(Vec2::ZERO, Vec2::ONE));
        circle(&mut gizmos, dot, 4.0, Color::WHITE);
    }
}
