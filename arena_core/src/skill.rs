//! Special skills - one use per combatant per match

use crate::combat::{resolve_strike, Strike};
use crate::combatant::Combatant;
use crate::ArenaError;

/// A class skill. Skills deal flat damage that the defender may still block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    FuryPunch,
    HardShot,
}

impl Skill {
    pub fn name(&self) -> &'static str {
        match self {
            Skill::FuryPunch => "Fury Punch",
            Skill::HardShot => "Hard Shot",
        }
    }

    /// Stamina the user must have, and pays, to perform the skill
    pub fn stamina_cost(&self) -> f64 {
        match self {
            Skill::FuryPunch => 6.0,
            Skill::HardShot => 5.0,
        }
    }

    /// Raw damage before the defender's block
    pub fn damage(&self) -> f64 {
        match self {
            Skill::FuryPunch => 12.0,
            Skill::HardShot => 15.0,
        }
    }

    /// Human readable summary for selection screens
    pub fn description(&self) -> String {
        format!(
            "{}: {} damage for {} stamina, once per fight",
            self.name(),
            self.damage(),
            self.stamina_cost()
        )
    }

    /// Perform the skill. Does nothing beyond reporting when `user` is short
    /// on stamina. The single-use latch lives in [`Combatant::use_skill`].
    pub fn apply(&self, user: &mut Combatant, target: &mut Combatant) -> Result<String, ArenaError> {
        let armor_name = target.require_armor()?.name.clone();

        if user.stamina < self.stamina_cost() {
            return Ok(format!(
                "{} tried to use {}, but lacked the stamina.",
                user.name,
                self.name()
            ));
        }

        let strike = Strike {
            stamina_cost: self.stamina_cost(),
            raw_damage: self.damage(),
        };
        let outcome = resolve_strike(user, target, strike)?;
        tracing::debug!(user = %user.name, skill = self.name(), damage = outcome.damage, "skill used");

        if outcome.damage > 0.0 {
            Ok(format!(
                "{} uses {} and deals {} damage to {}.",
                user.name,
                self.name(),
                outcome.damage,
                target.name
            ))
        } else {
            Ok(format!(
                "{} uses {}, but {}'s {} absorbs the blow.",
                user.name,
                self.name(),
                target.name,
                armor_name
            ))
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{THIEF, WARRIOR};
    use equipment_core::{Armor, Weapon};

    fn armor(defence: f64, stamina_per_turn: f64) -> Armor {
        Armor {
            id: 1,
            name: "Leather".to_string(),
            defence,
            stamina_per_turn,
        }
    }

    fn unit(name: &str, class: &'static crate::UnitClass, armor: Armor) -> Combatant {
        let mut unit = Combatant::player(name, class);
        unit.equip_weapon(Weapon {
            id: 1,
            name: "Stick".to_string(),
            min_damage: 1.0,
            max_damage: 1.0,
            stamina_per_hit: 1.0,
        });
        unit.equip_armor(armor);
        unit
    }

    #[test]
    fn test_description() {
        assert_eq!(
            Skill::HardShot.description(),
            "Hard Shot: 15 damage for 5 stamina, once per fight"
        );
    }

    #[test]
    fn test_fury_punch_unblocked() {
        let mut user = unit("Hero", &WARRIOR, armor(0.0, 0.0));
        let mut target = unit("Bandit", &THIEF, armor(3.0, 2.0));
        target.stamina = 0.0;

        let text = Skill::FuryPunch.apply(&mut user, &mut target).unwrap();

        assert!((target.health - 38.0).abs() < 1e-9);
        assert!((user.stamina - 24.0).abs() < 1e-9);
        assert!(text.contains("Fury Punch"));
        assert!(text.contains("12"));
    }

    #[test]
    fn test_hard_shot_partially_blocked() {
        let mut user = unit("Bandit", &THIEF, armor(0.0, 0.0));
        let mut target = unit("Hero", &WARRIOR, armor(5.0, 2.0));

        Skill::HardShot.apply(&mut user, &mut target).unwrap();

        // 15 - 5 * 1.2 = 9; block costs 2 * 0.9
        assert!((target.health - 51.0).abs() < 1e-9);
        assert!((target.stamina - 28.2).abs() < 1e-9);
        assert!((user.stamina - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_not_enough_stamina_is_noop() {
        let mut user = unit("Hero", &WARRIOR, armor(0.0, 0.0));
        let mut target = unit("Bandit", &THIEF, armor(0.0, 0.0));
        user.stamina = 5.9;

        let text = Skill::FuryPunch.apply(&mut user, &mut target).unwrap();

        assert!(text.contains("lacked the stamina"));
        assert_eq!(user.stamina, 5.9);
        assert_eq!(target.health, THIEF.max_health);
    }

    #[test]
    fn test_fully_absorbed() {
        let mut user = unit("Hero", &WARRIOR, armor(0.0, 0.0));
        let mut target = unit("Bandit", &THIEF, armor(20.0, 1.0));

        let text = Skill::FuryPunch.apply(&mut user, &mut target).unwrap();

        assert_eq!(target.health, THIEF.max_health);
        assert!(text.contains("absorbs"));
    }
}
