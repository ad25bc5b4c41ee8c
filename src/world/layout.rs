//! World dimensions and coordinate helpers.
//!
//! World coordinates are in pixels with the origin at the top-left of area
//! (0, 0) and y growing downwards. Each area is exactly one screen.

use bevy::math::{IVec2, Rect, Vec2};

pub const AREA_WIDTH: f32 = 1000.0;
pub const AREA_HEIGHT: f32 = 700.0;
pub const GRID_COLUMNS: i32 = 3;
pub const GRID_ROWS: i32 = 3;
pub const WORLD_WIDTH: f32 = AREA_WIDTH * GRID_COLUMNS as f32;
pub const WORLD_HEIGHT: f32 = AREA_HEIGHT * GRID_ROWS as f32;

/// One player step.
pub const GRID_SIZE: f32 = 50.0;
pub const PLAYER_SIZE: f32 = 50.0;
pub const ENEMY_SIZE: f32 = 50.0;
pub const ITEM_SIZE: f32 = 30.0;
/// Spawns keep this far from every area edge.
pub const SPAWN_MARGIN: f32 = 100.0;
/// Town arrivals are placed this far below the area's top edge.
pub const TOWN_GATE_OFFSET_Y: f32 = 260.0;

/// Area the player starts a run in.
pub const START_AREA: IVec2 = IVec2::new(1, 1);

/// Top-left corner of an area in world coordinates.
pub fn area_origin(coord: IVec2) -> Vec2 {
    Vec2::new(coord.x as f32 * AREA_WIDTH, coord.y as f32 * AREA_HEIGHT)
}

/// Pixel bounds of an area.
pub fn area_bounds(coord: IVec2) -> Rect {
    let origin = area_origin(coord);
    Rect::from_corners(origin, origin + Vec2::new(AREA_WIDTH, AREA_HEIGHT))
}

pub fn world_bounds() -> Rect {
    Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT)
}

/// Grid coordinate of the area containing `position`, clamped onto the grid.
pub fn area_at(position: Vec2) -> IVec2 {
    let x = (position.x / AREA_WIDTH).floor() as i32;
    let y = (position.y / AREA_HEIGHT).floor() as i32;
    IVec2::new(x.clamp(0, GRID_COLUMNS - 1), y.clamp(0, GRID_ROWS - 1))
}

pub fn in_grid(coord: IVec2) -> bool {
    (0..GRID_COLUMNS).contains(&coord.x) && (0..GRID_ROWS).contains(&coord.y)
}

/// Axis-aligned box for a square sprite whose top-left corner is `position`.
pub fn sprite_box(position: Vec2, size: f32) -> Rect {
    Rect::from_corners(position, position + Vec2::splat(size))
}

/// Overlap test with touching edges not counting as a hit.
pub fn boxes_overlap(a: Rect, b: Rect) -> bool {
    let overlap = a.intersect(b);
    overlap.width() > 0.0 && overlap.height() > 0.0
}

/// Keep a square sprite of `size` fully inside `bounds`.
pub fn clamp_sprite(position: Vec2, size: f32, bounds: Rect) -> Vec2 {
    let max = (bounds.max - Vec2::splat(size)).max(bounds.min);
    position.clamp(bounds.min, max)
}
