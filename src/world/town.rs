//! The town: solid buildings and the gate guard's greeting.

use bevy::math::{Rect, Vec2};

/// Building footprints relative to the town area's top-left corner.
const BUILDINGS: [(&str, Rect); 4] = [
    ("Inn", Rect { min: Vec2::new(100.0, 80.0), max: Vec2::new(300.0, 230.0) }),
    ("Shop", Rect { min: Vec2::new(700.0, 80.0), max: Vec2::new(900.0, 230.0) }),
    ("Smithy", Rect { min: Vec2::new(100.0, 450.0), max: Vec2::new(300.0, 620.0) }),
    ("Chapel", Rect { min: Vec2::new(700.0, 450.0), max: Vec2::new(900.0, 620.0) }),
];

const GUARD_LINES: [&str; 5] = [
    "Halt, traveler! Welcome to the last free town.",
    "Dragons have been seen in every corner of the land.",
    "Each time you grow stronger, one of them comes for you.",
    "Malakor himself waits for those who reach level ten.",
    "Rest if you must. Then go, and keep your blade sharp.",
];

/// Guard offset from the area origin, just inside the gate.
pub const GUARD_OFFSET: Vec2 = Vec2::new(560.0, 260.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardPhase {
    /// Player has not arrived yet
    #[default]
    Waiting,
    Talking,
    Done,
}

/// Per-town state.
#[derive(Debug, Clone, Default)]
pub struct Town {
    pub phase: GuardPhase,
    pub line: usize,
    /// Ticks the current line has been shown
    pub line_timer: u32,
}

impl Town {
    pub fn buildings(origin: Vec2) -> impl Iterator<Item = (&'static str, Rect)> {
        BUILDINGS.iter().map(move |(name, rect)| {
            (*name, Rect::from_corners(rect.min + origin, rect.max + origin))
        })
    }

    pub fn current_line(&self) -> Option<&'static str> {
        match self.phase {
            GuardPhase::Talking => GUARD_LINES.get(self.line).copied(),
            _ => None,
        }
    }

    /// Start the greeting the first time the player arrives.
    pub fn greet(&mut self) -> bool {
        if self.phase != GuardPhase::Waiting {
            return false;
        }
        self.phase = GuardPhase::Talking;
        self.line = 0;
        self.line_timer = 0;
        true
    }

    pub fn is_talking(&self) -> bool {
        self.phase == GuardPhase::Talking
    }

    /// Move to the next line, ending the conversation after the last one.
    pub fn advance(&mut self) {
        if !self.is_talking() {
            return;
        }
        self.line += 1;
        self.line_timer = 0;
        if self.line >= GUARD_LINES.len() {
            self.phase = GuardPhase::Done;
        }
    }

    /// Lines step forward on their own after `line_ticks`.
    pub fn tick(&mut self, line_ticks: u32) {
        if !self.is_talking() {
            return;
        }
        self.line_timer += 1;
        if self.line_timer >= line_ticks {
            self.advance();
        }
    }
}
