//! Unit class archetypes

use crate::skill::Skill;

/// Static template for a unit class. Multipliers scale the equipment a
/// unit carries; they never change during a match.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitClass {
    pub name: &'static str,
    pub max_health: f64,
    pub max_stamina: f64,
    /// Scales rolled weapon damage
    pub attack: f64,
    /// Scales stamina spent on swings and blocks
    pub stamina: f64,
    /// Scales armor defence when blocking
    pub armor: f64,
    pub skill: Skill,
}

pub static WARRIOR: UnitClass = UnitClass {
    name: "Warrior",
    max_health: 60.0,
    max_stamina: 30.0,
    attack: 0.8,
    stamina: 0.9,
    armor: 1.2,
    skill: Skill::FuryPunch,
};

pub static THIEF: UnitClass = UnitClass {
    name: "Thief",
    max_health: 50.0,
    max_stamina: 25.0,
    attack: 1.5,
    stamina: 1.2,
    armor: 1.0,
    skill: Skill::HardShot,
};

static UNIT_CLASSES: [&UnitClass; 2] = [&WARRIOR, &THIEF];

/// All built-in classes, in selection order
pub fn unit_classes() -> &'static [&'static UnitClass] {
    &UNIT_CLASSES
}

/// Look up a class by exact name
pub fn find_unit_class(name: &str) -> Option<&'static UnitClass> {
    UNIT_CLASSES.iter().copied().find(|c| c.name == name)
}

pub fn unit_class_names() -> Vec<&'static str> {
    UNIT_CLASSES.iter().map(|c| c.name).collect()
}
