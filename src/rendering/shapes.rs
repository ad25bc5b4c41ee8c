//! Screen-space drawing helpers on top of gizmos.
//!
//! Game logic works in screen pixels with the origin at the top-left corner
//! and y pointing down. The 2D camera sits at the window center with y up.

use bevy::prelude::*;

use crate::world::layout::{AREA_HEIGHT, AREA_WIDTH};

/// Convert a screen pixel to a camera-space point.
pub fn to_world(screen: Vec2) -> Vec2 {
    Vec2::new(screen.x - AREA_WIDTH / 2.0, AREA_HEIGHT / 2.0 - screen.y)
}

/// Solid rectangle from its top-left corner, drawn as packed scanlines.
pub fn fill_rect(gizmos: &mut Gizmos, top_left: Vec2, size: Vec2, color: Color) {
    let rows = (size.y / 2.0).ceil().max(1.0) as u32;
    for row in 0..rows {
        let y = top_left.y + row as f32 * 2.0;
        gizmos.line_2d(
            to_world(Vec2::new(top_left.x, y)),
            to_world(Vec2::new(top_left.x + size.x, y)),
            color,
        );
    }
}

/// Rectangle outline from its top-left corner.
pub fn outline_rect(gizmos: &mut Gizmos, top_left: Vec2, size: Vec2, color: Color) {
    gizmos.rect_2d(to_world(top_left + size / 2.0), size, color);
}

pub fn circle(gizmos: &mut Gizmos, center: Vec2, radius: f32, color: Color) {
    gizmos.circle_2d(to_world(center), radius, color);
}

pub fn line(gizmos: &mut Gizmos, from: Vec2, to: Vec2, color: Color) {
    gizmos.line_2d(to_world(from), to_world(to), color);
}

/// Horizontal bar filled to `fraction`.
pub fn bar(gizmos: &mut Gizmos, top_left: Vec2, size: Vec2, fraction: f32, color: Color) {
    fill_rect(gizmos, top_left, Vec2::new(size.x * fraction.clamp(0.0, 1.0), size.y), color);
    outline_rect(gizmos, top_left, size, Color::WHITE);
}
