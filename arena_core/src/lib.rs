//! arena_core - Turn-based duel resolution
//!
//! This library provides:
//! - UnitClass: static archetypes (Warrior, Thief) with stat multipliers and a skill
//! - Skill: once-per-match special actions
//! - Combatant: a unit in battle, either player controlled or automated
//! - resolve_strike: the damage pipeline shared by weapon hits and skills
//! - MatchEngine: turn sequencing, stamina regeneration and end-of-battle detection
//! - Arena: name-based front door combining the engine with an equipment catalog
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use arena_core::prelude::*;
//!
//! let catalog = EquipmentCatalog::load(Path::new("data/equipment.json"))?;
//! let mut arena = Arena::new(catalog);
//! arena.start_match(
//!     &Loadout::new("Hero", "Warrior", "Axe", "Chainmail"),
//!     &Loadout::new("Bandit", "Thief", "Knife", "Leather jacket"),
//! )?;
//! let report = arena.player_attack()?;
//! println!("{}", report.narrative);
//! ```
//!
//! The engine holds exactly one match at a time and every action runs to
//! completion synchronously. Hosts that share an `Arena` between threads must
//! wrap it in a lock.

pub mod arena;
pub mod class;
pub mod combat;
pub mod combatant;
pub mod engine;
pub mod prelude;
pub mod skill;

pub use arena::{Arena, Loadout, SelectionOptions};
pub use class::{find_unit_class, unit_class_names, unit_classes, UnitClass, THIEF, WARRIOR};
pub use combat::{resolve_strike, Strike, StrikeOutcome};
pub use combatant::{Combatant, Control};
pub use engine::{BattleOutcome, BattleState, CombatantStatus, MatchEngine, MatchStatus, TurnReport};
pub use skill::Skill;

pub use equipment_core::{Armor, CatalogError, EquipmentCatalog, Weapon};

use thiserror::Error;

/// Which equipment slot a combatant is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Weapon,
    Armor,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Slot::Weapon => write!(f, "weapon"),
            Slot::Armor => write!(f, "armor"),
        }
    }
}

/// Errors surfaced by the arena. Combat outcomes such as running out of
/// stamina or a blocked hit are narrative, not errors.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("Unknown unit class: {0}")]
    UnknownClass(String),
    #[error("Unknown weapon: {0}")]
    UnknownWeapon(String),
    #[error("Unknown armor: {0}")]
    UnknownArmor(String),
    #[error("{combatant} has no {slot} equipped")]
    Unequipped { combatant: String, slot: Slot },
    #[error("No match in progress")]
    NoMatchInProgress,
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
