//! Strike resolution - apply one hit from an attacker to a defender

use super::round1;
use crate::combatant::Combatant;
use crate::ArenaError;
use rand::Rng;

/// A prepared hit: what it costs the attacker and how hard it lands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub stamina_cost: f64,
    pub raw_damage: f64,
}

/// What happened when a strike was resolved
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrikeOutcome {
    pub raw_damage: f64,
    /// Whether the defender had the stamina to raise their armor
    pub blocked: bool,
    /// Damage removed by armor (zero when not blocked)
    pub absorbed: f64,
    /// Health removed from the defender, rounded to one decimal
    pub damage: f64,
}

/// Build a weapon strike for `attacker`: the weapon's stamina cost scaled by
/// the class stamina multiplier, and a fresh damage roll scaled by attack.
pub fn weapon_strike(attacker: &Combatant, rng: &mut impl Rng) -> Result<Strike, ArenaError> {
    let weapon = attacker.require_weapon()?;
    Ok(Strike {
        stamina_cost: weapon.stamina_per_hit * attacker.class.stamina,
        raw_damage: weapon.roll_damage(rng) * attacker.class.attack,
    })
}

/// Resolve a strike against a defender
///
/// 1. The attacker pays the stamina cost, even if that leaves them negative
/// 2. If the defender's stamina exceeds their block cost, they pay it and
///    armor defence (scaled by class armor) is subtracted from the damage
/// 3. Positive damage is taken from the defender's health; otherwise the hit
///    is fully blocked and health is untouched
pub fn resolve_strike(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    strike: Strike,
) -> Result<StrikeOutcome, ArenaError> {
    let armor = defender.require_armor()?;
    let block_cost = armor.stamina_per_turn * defender.class.stamina;
    let defence = armor.defence * defender.class.armor;

    attacker.stamina -= strike.stamina_cost;

    let mut outcome = StrikeOutcome {
        raw_damage: strike.raw_damage,
        ..Default::default()
    };
    let mut damage = strike.raw_damage;

    if defender.stamina > block_cost {
        defender.stamina -= block_cost;
        damage -= defence;
        outcome.blocked = true;
        outcome.absorbed = defence.min(strike.raw_damage);
    }

    outcome.damage = defender.receive_damage(damage);

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        raw = round1(outcome.raw_damage),
        blocked = outcome.blocked,
        absorbed = round1(outcome.absorbed),
        damage = outcome.damage,
        "strike resolved"
    );

    Ok(outcome)
}
