//! Character classes and their fixed stat tables.

use std::fmt;

/// Starting numbers for a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassProfile {
    pub max_health: i32,
    pub max_mana: i32,
    pub strength: i32,
    pub defense: i32,
    pub speed: i32,
    /// Base fireball damage before level scaling
    pub spell_power: i32,
}

/// Visual accent played with the class's attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flourish {
    SwordArc,
    ArcaneBurst,
    ThrownKnife,
}

/// The three playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Warrior,
    Mage,
    Rogue,
}

impl ClassKind {
    /// Order shown on the selection screen.
    pub const ALL: [ClassKind; 3] = [ClassKind::Warrior, ClassKind::Mage, ClassKind::Rogue];

    pub const fn profile(self) -> ClassProfile {
        match self {
            ClassKind::Warrior => ClassProfile {
                max_health: 120,
                max_mana: 50,
                strength: 15,
                defense: 10,
                speed: 7,
                spell_power: 18,
            },
            ClassKind::Mage => ClassProfile {
                max_health: 80,
                max_mana: 120,
                strength: 8,
                defense: 6,
                speed: 8,
                spell_power: 30,
            },
            ClassKind::Rogue => ClassProfile {
                max_health: 100,
                max_mana: 70,
                strength: 12,
                defense: 8,
                speed: 12,
                spell_power: 22,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ClassKind::Warrior => "Warrior",
            ClassKind::Mage => "Mage",
            ClassKind::Rogue => "Rogue",
        }
    }

    /// One-line pitch for the selection screen.
    pub const fn blurb(self) -> &'static str {
        match self {
            ClassKind::Warrior => "Heavy armor, high health, strong blows",
            ClassKind::Mage => "Fragile, vast mana, devastating fireballs",
            ClassKind::Rogue => "Quick and balanced, fights with knives",
        }
    }

    pub const fn flourish(self) -> Flourish {
        match self {
            ClassKind::Warrior => Flourish::SwordArc,
            ClassKind::Mage => Flourish::ArcaneBurst,
            ClassKind::Rogue => Flourish::ThrownKnife,
        }
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
