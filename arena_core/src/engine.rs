//! Match engine - sequences turns between the player and the automated unit
//!
//! ```text
//! Idle --start--> Running --a side drops to 0 health--> Concluded
//!   ^                                                       |
//!   +----------------------- reset / start -----------------+
//! ```
//!
//! Once concluded, every action returns the latched result without touching
//! either combatant until the next `start`.

use crate::combatant::Combatant;
use crate::ArenaError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::fmt;

/// Stamina both sides recover at the start of each automated response
pub const STAMINA_PER_ROUND: f64 = 1.0;

/// Final result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BattleOutcome {
    PlayerWon,
    PlayerLost,
    Draw,
}

impl BattleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            BattleOutcome::PlayerWon => "Player won",
            BattleOutcome::PlayerLost => "Player lost",
            BattleOutcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for BattleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Idle,
    Running,
    Concluded,
}

/// Display readout of one combatant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombatantStatus {
    pub name: String,
    pub class: &'static str,
    pub health: f64,
    pub max_health: f64,
    pub stamina: f64,
    pub max_stamina: f64,
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub skill: &'static str,
    pub skill_used: bool,
}

impl CombatantStatus {
    pub fn of(unit: &Combatant) -> Self {
        CombatantStatus {
            name: unit.name().to_string(),
            class: unit.class().name,
            health: unit.health_points(),
            max_health: unit.class().max_health,
            stamina: unit.stamina_points(),
            max_stamina: unit.class().max_stamina,
            weapon: unit.weapon().map(|w| w.name.clone()),
            armor: unit.armor().map(|a| a.name.clone()),
            skill: unit.class().skill.name(),
            skill_used: unit.skill_used(),
        }
    }
}

/// Snapshot of the engine for front ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattleState {
    pub status: MatchStatus,
    pub running: bool,
    pub player: Option<CombatantStatus>,
    pub enemy: Option<CombatantStatus>,
    pub result: Option<String>,
}

impl BattleState {
    fn idle() -> Self {
        BattleState {
            status: MatchStatus::Idle,
            running: false,
            player: None,
            enemy: None,
            result: None,
        }
    }
}

/// Narrative of one action plus the state it left behind
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnReport {
    pub narrative: String,
    pub state: BattleState,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Running { player: Combatant, enemy: Combatant },
    Concluded { outcome: BattleOutcome, last: BattleState },
}

/// Holds the single active match
///
/// The random source is owned by the engine so that a seeded engine replays
/// a fight exactly.
#[derive(Debug)]
pub struct MatchEngine<R = ChaCha8Rng> {
    phase: Phase,
    rng: R,
}

impl MatchEngine<ChaCha8Rng> {
    /// Engine seeded from system entropy
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Engine with a reproducible random sequence
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for MatchEngine<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> MatchEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        MatchEngine {
            phase: Phase::Idle,
            rng,
        }
    }

    pub fn status(&self) -> MatchStatus {
        match self.phase {
            Phase::Idle => MatchStatus::Idle,
            Phase::Running { .. } => MatchStatus::Running,
            Phase::Concluded { .. } => MatchStatus::Concluded,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// The latched result, if the last match has concluded
    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.phase {
            Phase::Concluded { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn player(&self) -> Option<&Combatant> {
        match &self.phase {
            Phase::Running { player, .. } => Some(player),
            _ => None,
        }
    }

    pub fn enemy(&self) -> Option<&Combatant> {
        match &self.phase {
            Phase::Running { enemy, .. } => Some(enemy),
            _ => None,
        }
    }

    /// Begin a new match, discarding whatever came before
    ///
    /// Both sides must carry a weapon and armor. A side that is already
    /// down concludes the match on the spot, so the returned state is never
    /// `Running` with a combatant at or below zero health.
    pub fn start(&mut self, player: Combatant, enemy: Combatant) -> Result<BattleState, ArenaError> {
        for unit in [&player, &enemy] {
            unit.require_weapon()?;
            unit.require_armor()?;
        }

        tracing::info!(
            player = %player.name(),
            player_class = player.class().name,
            enemy = %enemy.name(),
            enemy_class = enemy.class().name,
            "match started"
        );
        self.phase = Phase::Running { player, enemy };
        self.check_termination();
        Ok(self.state())
    }

    /// Drop the current match, if any, and return to idle
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn state(&self) -> BattleState {
        match &self.phase {
            Phase::Idle => BattleState::idle(),
            Phase::Running { player, enemy } => BattleState {
                status: MatchStatus::Running,
                running: true,
                player: Some(CombatantStatus::of(player)),
                enemy: Some(CombatantStatus::of(enemy)),
                result: None,
            },
            Phase::Concluded { last, .. } => last.clone(),
        }
    }

    /// Check both sides' health and conclude the match if either is down
    ///
    /// Returns the latched result once concluded, `None` while both are
    /// standing or when idle.
    pub fn check_termination(&mut self) -> Option<BattleOutcome> {
        let outcome = match &self.phase {
            Phase::Idle => return None,
            Phase::Concluded { outcome, .. } => return Some(*outcome),
            Phase::Running { player, enemy } => match (player.is_alive(), enemy.is_alive()) {
                (true, true) => return None,
                (false, false) => BattleOutcome::Draw,
                (false, true) => BattleOutcome::PlayerLost,
                (true, false) => BattleOutcome::PlayerWon,
            },
        };

        let mut last = self.state();
        last.status = MatchStatus::Concluded;
        last.running = false;
        last.result = Some(outcome.to_string());

        tracing::info!(result = %outcome, "match concluded");
        self.phase = Phase::Concluded { outcome, last };
        Some(outcome)
    }

    fn regenerate_stamina(&mut self) {
        if let Phase::Running { player, enemy } = &mut self.phase {
            player.regenerate(STAMINA_PER_ROUND);
            enemy.regenerate(STAMINA_PER_ROUND);
            tracing::debug!(
                player = player.stamina_points(),
                enemy = enemy.stamina_points(),
                "stamina regenerated"
            );
        }
    }

    /// Let the automated side respond: regenerate stamina, then one enemy
    /// hit or skill. Also known as passing the turn.
    pub fn advance_turn(&mut self) -> Result<TurnReport, ArenaError> {
        let narrative = self.advance()?;
        Ok(self.report(narrative))
    }

    fn advance(&mut self) -> Result<String, ArenaError> {
        match self.phase {
            Phase::Idle => return Err(no_match("advance turn")),
            Phase::Concluded { outcome, .. } => return Ok(outcome.to_string()),
            Phase::Running { .. } => {}
        }

        if let Some(outcome) = self.check_termination() {
            return Ok(outcome.to_string());
        }

        self.regenerate_stamina();
        let line = match &mut self.phase {
            Phase::Running { player, enemy } => enemy.hit(player, &mut self.rng)?,
            _ => return Err(no_match("advance turn")),
        };

        match self.check_termination() {
            Some(outcome) => Ok(format!("{}\n{}", line, outcome)),
            None => Ok(line),
        }
    }

    /// Player swings their weapon, then the automated side responds
    pub fn player_attack(&mut self) -> Result<TurnReport, ArenaError> {
        if let Some(outcome) = self.outcome() {
            return Ok(self.report(outcome.to_string()));
        }
        let line = match &mut self.phase {
            Phase::Running { player, enemy } => player.hit(enemy, &mut self.rng)?,
            _ => return Err(no_match("attack")),
        };

        let turn = self.advance()?;
        Ok(self.report(format!("{}\n{}", line, turn)))
    }

    /// Player uses their class skill, then the automated side responds
    pub fn player_use_skill(&mut self) -> Result<TurnReport, ArenaError> {
        if let Some(outcome) = self.outcome() {
            return Ok(self.report(outcome.to_string()));
        }
        let line = match &mut self.phase {
            Phase::Running { player, enemy } => player.use_skill(enemy)?,
            _ => return Err(no_match("use skill")),
        };

        let turn = self.advance()?;
        Ok(self.report(format!("{} {}", line, turn)))
    }

    fn report(&self, narrative: String) -> TurnReport {
        TurnReport {
            narrative,
            state: self.state(),
        }
    }
}

fn no_match(action: &str) -> ArenaError {
    tracing::warn!(action, "no match in progress");
    ArenaError::NoMatchInProgress
}
