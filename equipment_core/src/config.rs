use serde::Deserialize;

/// JSON layout of an equipment file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EquipmentFileConfig {
    pub weapons: Vec<WeaponConfig>,
    pub armors: Vec<ArmorConfig>,
}

/// A weapon as written in the equipment file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeaponConfig {
    pub id: u32,
    pub name: String,
    pub min_damage: f64,
    pub max_damage: f64,
    pub stamina_per_hit: f64,
}

/// An armor as written in the equipment file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArmorConfig {
    pub id: u32,
    pub name: String,
    pub defence: f64,
    pub stamina_per_turn: f64,
}
