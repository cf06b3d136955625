//! Prelude module for convenient imports
//!
//! ```rust
//! use arena_core::prelude::*;
//! ```

// Front door
pub use crate::arena::{Arena, Loadout, SelectionOptions};

// Match engine
pub use crate::engine::{BattleOutcome, BattleState, MatchEngine, MatchStatus, TurnReport};

// Units
pub use crate::class::{find_unit_class, UnitClass};
pub use crate::combatant::{Combatant, Control};
pub use crate::skill::Skill;

pub use crate::ArenaError;

// Re-exports from equipment_core
pub use equipment_core::{Armor, EquipmentCatalog, Weapon};
