//! Arena - name-based entry point for front ends

use crate::class::{find_unit_class, unit_class_names};
use crate::combatant::{Combatant, Control};
use crate::engine::{BattleState, MatchEngine, TurnReport};
use crate::ArenaError;
use equipment_core::EquipmentCatalog;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A unit as picked on a selection screen: every field is a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    pub name: String,
    pub class: String,
    pub weapon: String,
    pub armor: String,
}

impl Loadout {
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        weapon: impl Into<String>,
        armor: impl Into<String>,
    ) -> Self {
        Loadout {
            name: name.into(),
            class: class.into(),
            weapon: weapon.into(),
            armor: armor.into(),
        }
    }
}

/// Everything a hero selection screen offers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOptions {
    pub classes: Vec<String>,
    pub weapons: Vec<String>,
    pub armors: Vec<String>,
}

/// Equipment catalog plus the match engine
#[derive(Debug)]
pub struct Arena<R = ChaCha8Rng> {
    catalog: EquipmentCatalog,
    engine: MatchEngine<R>,
}

impl Arena<ChaCha8Rng> {
    pub fn new(catalog: EquipmentCatalog) -> Self {
        Self::with_engine(catalog, MatchEngine::new())
    }

    /// Load the equipment catalog from a JSON file
    pub fn load(equipment_path: &Path) -> Result<Self, ArenaError> {
        Ok(Self::new(EquipmentCatalog::load(equipment_path)?))
    }
}

impl<R: Rng> Arena<R> {
    pub fn with_engine(catalog: EquipmentCatalog, engine: MatchEngine<R>) -> Self {
        Arena { catalog, engine }
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &MatchEngine<R> {
        &self.engine
    }

    pub fn selection_options(&self) -> SelectionOptions {
        SelectionOptions {
            classes: unit_class_names().into_iter().map(String::from).collect(),
            weapons: self.catalog.weapon_names().into_iter().map(String::from).collect(),
            armors: self.catalog.armor_names().into_iter().map(String::from).collect(),
        }
    }

    /// Build a fully equipped combatant from display names
    pub fn build_combatant(&self, loadout: &Loadout, control: Control) -> Result<Combatant, ArenaError> {
        let class = find_unit_class(&loadout.class)
            .ok_or_else(|| ArenaError::UnknownClass(loadout.class.clone()))?;
        let weapon = self
            .catalog
            .find_weapon(&loadout.weapon)
            .ok_or_else(|| ArenaError::UnknownWeapon(loadout.weapon.clone()))?;
        let armor = self
            .catalog
            .find_armor(&loadout.armor)
            .ok_or_else(|| ArenaError::UnknownArmor(loadout.armor.clone()))?;

        let mut unit = Combatant::new(loadout.name.clone(), class, control);
        let equipped_weapon = unit.equip_weapon(weapon.clone());
        let equipped_armor = unit.equip_armor(armor.clone());
        tracing::debug!("{}; {}", equipped_weapon, equipped_armor);
        Ok(unit)
    }

    /// Start a match. Name lookups all happen before the engine is touched,
    /// so a bad loadout leaves any previous match as it was.
    pub fn start_match(&mut self, player: &Loadout, enemy: &Loadout) -> Result<BattleState, ArenaError> {
        let player = self.build_combatant(player, Control::Player)?;
        let enemy = self.build_combatant(enemy, Control::Automated)?;
        self.engine.start(player, enemy)
    }

    pub fn player_attack(&mut self) -> Result<TurnReport, ArenaError> {
        self.engine.player_attack()
    }

    pub fn player_use_skill(&mut self) -> Result<TurnReport, ArenaError> {
        self.engine.player_use_skill()
    }

    pub fn pass_turn(&mut self) -> Result<TurnReport, ArenaError> {
        self.engine.advance_turn()
    }

    pub fn battle_state(&self) -> BattleState {
        self.engine.state()
    }

    /// Abandon the current match
    pub fn end_match(&mut self) {
        self.engine.reset();
    }
}
