//! Combatant - one side of a duel

use crate::class::UnitClass;
use crate::combat::{display_value, resolve_strike, round1, weapon_strike};
use crate::{ArenaError, Slot};
use equipment_core::{Armor, Weapon};
use rand::Rng;

/// Chance per turn that an automated unit reaches for its skill
pub const AUTOMATED_SKILL_CHANCE: f64 = 0.1;

/// Who decides what a combatant does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Acts only when the player asks
    Player,
    /// Responds on its own and may fire its skill unprompted
    Automated,
}

/// A unit in battle
///
/// Health and stamina are kept unclamped internally and may go negative;
/// use [`health_points`](Self::health_points) and
/// [`stamina_points`](Self::stamina_points) for display.
#[derive(Debug, Clone)]
pub struct Combatant {
    pub(crate) name: String,
    pub(crate) class: &'static UnitClass,
    pub(crate) health: f64,
    pub(crate) stamina: f64,
    pub(crate) weapon: Option<Weapon>,
    pub(crate) armor: Option<Armor>,
    pub(crate) skill_used: bool,
    pub(crate) control: Control,
}

impl Combatant {
    /// A fresh unit at full health and stamina with nothing equipped
    pub fn new(name: impl Into<String>, class: &'static UnitClass, control: Control) -> Self {
        Combatant {
            name: name.into(),
            class,
            health: class.max_health,
            stamina: class.max_stamina,
            weapon: None,
            armor: None,
            skill_used: false,
            control,
        }
    }

    pub fn player(name: impl Into<String>, class: &'static UnitClass) -> Self {
        Self::new(name, class, Control::Player)
    }

    pub fn automated(name: impl Into<String>, class: &'static UnitClass) -> Self {
        Self::new(name, class, Control::Automated)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &'static UnitClass {
        self.class
    }

    pub fn control(&self) -> Control {
        self.control
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&Armor> {
        self.armor.as_ref()
    }

    pub fn skill_used(&self) -> bool {
        self.skill_used
    }

    /// Raw health, possibly negative
    pub fn health(&self) -> f64 {
        self.health
    }

    /// Raw stamina, possibly negative
    pub fn stamina(&self) -> f64 {
        self.stamina
    }

    pub fn health_points(&self) -> f64 {
        display_value(self.health)
    }

    pub fn stamina_points(&self) -> f64 {
        display_value(self.stamina)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_equipped(&self) -> bool {
        self.weapon.is_some() && self.armor.is_some()
    }

    pub fn equip_weapon(&mut self, weapon: Weapon) -> String {
        let message = format!("{} equipped {}", self.name, weapon.name);
        self.weapon = Some(weapon);
        message
    }

    pub fn equip_armor(&mut self, armor: Armor) -> String {
        let message = format!("{} put on {}", self.name, armor.name);
        self.armor = Some(armor);
        message
    }

    pub(crate) fn require_weapon(&self) -> Result<&Weapon, ArenaError> {
        self.weapon.as_ref().ok_or_else(|| ArenaError::Unequipped {
            combatant: self.name.clone(),
            slot: Slot::Weapon,
        })
    }

    pub(crate) fn require_armor(&self) -> Result<&Armor, ArenaError> {
        self.armor.as_ref().ok_or_else(|| ArenaError::Unequipped {
            combatant: self.name.clone(),
            slot: Slot::Armor,
        })
    }

    /// Take damage that already went through mitigation. Non-positive
    /// damage leaves health alone. Returns the damage taken, rounded.
    pub fn receive_damage(&mut self, damage: f64) -> f64 {
        if damage > 0.0 {
            self.health -= damage;
            round1(damage)
        } else {
            0.0
        }
    }

    /// Recover stamina, never past the class maximum
    pub fn regenerate(&mut self, amount: f64) {
        if self.stamina < self.class.max_stamina {
            self.stamina = (self.stamina + amount).min(self.class.max_stamina);
        }
    }

    /// Use the class skill on `target`. Latches on the first call; later
    /// calls only report that the skill is spent.
    pub fn use_skill(&mut self, target: &mut Combatant) -> Result<String, ArenaError> {
        if self.skill_used {
            return Ok("The skill has already been used.".to_string());
        }
        target.require_armor()?;
        self.skill_used = true;
        let skill = self.class.skill;
        skill.apply(self, target)
    }

    /// Attack `target` with the equipped weapon
    ///
    /// Automated units first get a chance to fire their skill instead, as long
    /// as it is unused and affordable.
    pub fn hit(&mut self, target: &mut Combatant, rng: &mut impl Rng) -> Result<String, ArenaError> {
        let weapon = self.require_weapon()?;
        let weapon_name = weapon.name.clone();
        let stamina_per_hit = weapon.stamina_per_hit;
        let armor_name = target.require_armor()?.name.clone();

        if self.control == Control::Automated
            && !self.skill_used
            && self.stamina >= self.class.skill.stamina_cost()
            && rng.gen_bool(AUTOMATED_SKILL_CHANCE)
        {
            return self.use_skill(target);
        }

        if self.stamina * self.class.stamina < stamina_per_hit {
            return Ok(format!(
                "{} tried to use {}, but lacked the stamina to attack.",
                self.name, weapon_name
            ));
        }

        let strike = weapon_strike(self, rng)?;
        let outcome = resolve_strike(self, target, strike)?;

        let text = match (self.control, outcome.damage > 0.0) {
            (Control::Player, true) => format!(
                "{} swings {}, breaks through the opponent's {} and deals {} damage.",
                self.name, weapon_name, armor_name, outcome.damage
            ),
            (Control::Player, false) => format!(
                "{} swings {}, but the opponent's {} stops it.",
                self.name, weapon_name, armor_name
            ),
            (Control::Automated, true) => format!(
                "{} swings {}, breaks through your {} and strikes you for {} damage.",
                self.name, weapon_name, armor_name, outcome.damage
            ),
            (Control::Automated, false) => format!(
                "{} swings {}, but your {} stops it.",
                self.name, weapon_name, armor_name
            ),
        };
        Ok(text)
    }
}
