//! The 3x3 world grid, current-area tracking and the camera.

use bevy::math::{IVec2, Vec2};

use super::area::{Area, Biome};
use super::layout::{area_at, area_origin, in_grid, GRID_COLUMNS, GRID_ROWS, START_AREA};
use crate::core::EasedVec2;

/// Alpha drop per tick for the area-change overlay.
const TRANSITION_FADE_STEP: u8 = 15;
/// Camera easing rate between areas.
const CAMERA_RATE: f32 = 0.18;

/// Biome of every grid cell, indexed `[y][x]`.
const LAYOUT: [[Biome; 3]; 3] = [
    [Biome::Mountain, Biome::Ice, Biome::Volcano],
    [Biome::Forest, Biome::Plains, Biome::Desert],
    [Biome::Swamp, Biome::Town, Biome::Castle],
];

pub fn biome_at(coord: IVec2) -> Option<Biome> {
    in_grid(coord).then(|| LAYOUT[coord.y as usize][coord.x as usize])
}

/// All areas plus the pointer to the one the player is in.
#[derive(Debug, Clone)]
pub struct WorldMap {
    areas: Vec<Area>,
    current: IVec2,
    pub camera: EasedVec2,
    /// Overlay alpha after an area change, fades to zero
    pub transition_alpha: u8,
}

impl Default for WorldMap {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldMap {
    pub fn new() -> Self {
        let mut areas = Vec::with_capacity((GRID_COLUMNS * GRID_ROWS) as usize);
        for (y, row) in LAYOUT.iter().enumerate() {
            for (x, biome) in row.iter().enumerate() {
                areas.push(Area::new(IVec2::new(x as i32, y as i32), *biome));
            }
        }
        let mut map = Self {
            areas,
            current: START_AREA,
            camera: EasedVec2::new(area_origin(START_AREA), CAMERA_RATE),
            transition_alpha: 0,
        };
        map.current_area_mut().visited = true;
        map
    }

    fn index(coord: IVec2) -> usize {
        (coord.y * GRID_COLUMNS + coord.x) as usize
    }

    pub fn current_coord(&self) -> IVec2 {
        self.current
    }

    pub fn current_area(&self) -> &Area {
        &self.areas[Self::index(self.current)]
    }

    pub fn current_area_mut(&mut self) -> &mut Area {
        let index = Self::index(self.current);
        &mut self.areas[index]
    }

    pub fn area(&self, coord: IVec2) -> Option<&Area> {
        in_grid(coord).then(|| &self.areas[Self::index(coord)])
    }

    pub fn areas(&self) -> impl Iterator<Item = &Area> {
        self.areas.iter()
    }

    /// Switch the current area if `position` has left it.
    ///
    /// Returns the new area's coordinate on a change.
    pub fn check_area_transition(&mut self, position: Vec2) -> Option<IVec2> {
        let coord = area_at(position);
        if coord == self.current {
            return None;
        }
        self.current = coord;
        self.current_area_mut().visited = true;
        self.camera.target = area_origin(coord);
        self.transition_alpha = u8::MAX;
        Some(coord)
    }

    /// Ease the camera and fade the transition overlay.
    pub fn update(&mut self) {
        self.camera.target = area_origin(self.current);
        self.camera.step();
        self.transition_alpha = self.transition_alpha.saturating_sub(TRANSITION_FADE_STEP);
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_alpha > 0 || !self.camera.is_settled()
    }

    /// World position relative to the camera's top-left corner.
    pub fn world_to_screen(&self, position: Vec2) -> Vec2 {
        position - self.camera.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::layout::{AREA_HEIGHT, AREA_WIDTH};

    #[test]
    fn starts_in_visited_plains() {
        let map = WorldMap::new();
        assert_eq!(map.current_coord(), IVec2::new(1, 1));
        assert_eq!(map.current_area().biome, Biome::Plains);
        assert!(map.current_area().visited);
        assert_eq!(map.areas().filter(|a| a.visited).count(), 1);
        assert_eq!(map.areas().filter(|a| a.is_town()).count(), 1);
    }

    #[test]
    fn crossing_an_edge_changes_area() {
        let mut map = WorldMap::new();
        assert_eq!(map.check_area_transition(Vec2::new(1500.0, 1000.0)), None);
        let moved = map.check_area_transition(Vec2::new(1500.0, 2.0 * AREA_HEIGHT));
        assert_eq!(moved, Some(IVec2::new(1, 2)));
        assert_eq!(map.current_area().biome, Biome::Town);
        assert!(map.is_transitioning());

        for _ in 0..200 {
            map.update();
        }
        assert!(!map.is_transitioning());
        assert_eq!(map.camera.current, Vec2::new(AREA_WIDTH, 2.0 * AREA_HEIGHT));
    }

    #[test]
    fn layout_corners() {
        assert_eq!(biome_at(IVec2::new(0, 0)), Some(Biome::Mountain));
        assert_eq!(biome_at(IVec2::new(2, 2)), Some(Biome::Castle));
        assert_eq!(biome_at(IVec2::new(3, 0)), None);
    }
}
