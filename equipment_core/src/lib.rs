//! equipment_core - Weapon and armor definitions for arena combat
//!
//! Equipment is loaded once from a JSON document of the form
//! `{ "weapons": [...], "armors": [...] }` and looked up by display name.
//!
//! ```rust,ignore
//! use equipment_core::EquipmentCatalog;
//!
//! let catalog = EquipmentCatalog::load(Path::new("data/equipment.json"))?;
//! let axe = catalog.find_weapon("Axe").ok_or("no axe")?;
//! let damage = axe.roll_damage(&mut rand::thread_rng());
//! ```

mod catalog;
mod config;
mod types;

pub use catalog::EquipmentCatalog;
pub use types::{Armor, Weapon};

use std::path::PathBuf;
use thiserror::Error;

/// Error loading the equipment catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: serde_json::Error,
        path: Option<PathBuf>,
    },
    #[error("Validation error in '{path:?}': {error}")]
    Validation {
        error: InvalidEntry,
        path: Option<PathBuf>,
    },
}

/// A catalog entry that parsed but makes no sense for combat
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidEntry {
    #[error("{kind} #{id} has an empty name")]
    EmptyName { kind: &'static str, id: u32 },
    #[error("{kind} '{name}': {field} must be finite and non-negative, got {value}")]
    BadNumber {
        kind: &'static str,
        name: String,
        field: &'static str,
        value: f64,
    },
    #[error("weapon '{name}': min_damage {min} exceeds max_damage {max}")]
    DamageRange { name: String, min: f64, max: f64 },
}
