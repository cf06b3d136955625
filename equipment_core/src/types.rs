use crate::config::{ArmorConfig, WeaponConfig};
use crate::InvalidEntry;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A weapon definition. Damage is rolled at the moment of each hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: u32,
    pub name: String,
    pub min_damage: f64,
    pub max_damage: f64,
    /// Stamina the wielder spends per swing, before class scaling
    pub stamina_per_hit: f64,
}

/// An armor definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub id: u32,
    pub name: String,
    /// Flat damage absorbed by a successful block, before class scaling
    pub defence: f64,
    /// Stamina the wearer spends to block one hit, before class scaling
    pub stamina_per_turn: f64,
}

impl Weapon {
    /// Roll raw weapon damage uniformly in `[min_damage, max_damage]`,
    /// rounded to one decimal place
    pub fn roll_damage(&self, rng: &mut impl Rng) -> f64 {
        if self.min_damage >= self.max_damage {
            self.max_damage
        } else {
            let rolled = rng.gen_range(self.min_damage..=self.max_damage);
            (rolled * 10.0).round() / 10.0
        }
    }

    pub(crate) fn from_config(config: WeaponConfig) -> Result<Self, InvalidEntry> {
        check_name("weapon", config.id, &config.name)?;
        check_number("weapon", &config.name, "min_damage", config.min_damage)?;
        check_number("weapon", &config.name, "max_damage", config.max_damage)?;
        check_number("weapon", &config.name, "stamina_per_hit", config.stamina_per_hit)?;
        if config.min_damage > config.max_damage {
            return Err(InvalidEntry::DamageRange {
                name: config.name,
                min: config.min_damage,
                max: config.max_damage,
            });
        }

        Ok(Weapon {
            id: config.id,
            name: config.name,
            min_damage: config.min_damage,
            max_damage: config.max_damage,
            stamina_per_hit: config.stamina_per_hit,
        })
    }
}

impl Armor {
    pub(crate) fn from_config(config: ArmorConfig) -> Result<Self, InvalidEntry> {
        check_name("armor", config.id, &config.name)?;
        check_number("armor", &config.name, "defence", config.defence)?;
        check_number("armor", &config.name, "stamina_per_turn", config.stamina_per_turn)?;

        Ok(Armor {
            id: config.id,
            name: config.name,
            defence: config.defence,
            stamina_per_turn: config.stamina_per_turn,
        })
    }
}

fn check_name(kind: &'static str, id: u32, name: &str) -> Result<(), InvalidEntry> {
    if name.trim().is_empty() {
        return Err(InvalidEntry::EmptyName { kind, id });
    }
    Ok(())
}

fn check_number(
    kind: &'static str,
    name: &str,
    field: &'static str,
    value: f64,
) -> Result<(), InvalidEntry> {
    if !value.is_finite() || value < 0.0 {
        return Err(InvalidEntry::BadNumber {
            kind,
            name: name.to_string(),
            field,
            value,
        });
    }
    Ok(())
}
