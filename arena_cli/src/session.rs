//! Interactive duel session over any line-based input and output

use crate::CliError;
use arena_core::{
    find_unit_class, Arena, ArenaError, BattleState, CombatantStatus, Loadout, MatchStatus,
};
use rand::Rng;
use std::io::{BufRead, Write};

enum Flow {
    NextFight,
    Quit,
}

pub struct Session<R, I, O> {
    arena: Arena<R>,
    input: I,
    output: O,
}

impl<R: Rng, I: BufRead, O: Write> Session<R, I, O> {
    pub fn new(arena: Arena<R>, input: I, output: O) -> Self {
        Session {
            arena,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "=== ARENA ===")?;
        loop {
            let Some(player) = self.choose_loadout("Choose your hero")? else {
                return Ok(());
            };
            let Some(enemy) = self.choose_loadout("Choose your enemy")? else {
                return Ok(());
            };

            match self.arena.start_match(&player, &enemy) {
                Ok(state) => self.print_state(&state)?,
                Err(e) => {
                    writeln!(self.output, "Cannot start the fight: {}", e)?;
                    continue;
                }
            }

            match self.fight()? {
                Flow::NextFight => continue,
                Flow::Quit => return Ok(()),
            }
        }
    }

    fn fight(&mut self) -> Result<Flow, CliError> {
        writeln!(
            self.output,
            "Commands: hit (h), skill (s), pass (p), status, end (e), quit (q)"
        )?;
        loop {
            let Some(command) = self.ask("> ")? else {
                return Ok(Flow::Quit);
            };
            let report = match command.as_str() {
                "hit" | "h" => self.arena.player_attack(),
                "skill" | "s" => self.arena.player_use_skill(),
                "pass" | "p" => self.arena.pass_turn(),
                "status" => {
                    let state = self.arena.battle_state();
                    self.print_state(&state)?;
                    continue;
                }
                "end" | "e" => {
                    self.arena.end_match();
                    return Ok(Flow::NextFight);
                }
                "quit" | "q" => return Ok(Flow::Quit),
                other => {
                    writeln!(self.output, "Unknown command '{}'", other)?;
                    continue;
                }
            };

            match report {
                Ok(report) => {
                    writeln!(self.output, "{}", report.narrative)?;
                    self.print_state(&report.state)?;
                    if report.state.status == MatchStatus::Concluded {
                        writeln!(self.output, "Type 'end' for a new fight or 'quit' to leave.")?;
                    }
                }
                Err(ArenaError::NoMatchInProgress) => {
                    writeln!(self.output, "No fight in progress.")?;
                    return Ok(Flow::NextFight);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn choose_loadout(&mut self, header: &str) -> Result<Option<Loadout>, CliError> {
        let options = self.arena.selection_options();
        writeln!(self.output, "--- {} ---", header)?;

        let Some(name) = self.ask("Name: ")? else {
            return Ok(None);
        };
        let skills: Vec<String> = options
            .classes
            .iter()
            .map(|name| {
                find_unit_class(name)
                    .map(|c| c.skill.description())
                    .unwrap_or_default()
            })
            .collect();
        let Some(class) = self.choose("Class", &options.classes, &skills)? else {
            return Ok(None);
        };
        let Some(weapon) = self.choose("Weapon", &options.weapons, &[])? else {
            return Ok(None);
        };
        let Some(armor) = self.choose("Armor", &options.armors, &[])? else {
            return Ok(None);
        };

        Ok(Some(Loadout::new(name, class, weapon, armor)))
    }

    /// Pick one of `options` by 1-based number or exact name. `details`
    /// lines up with `options` and may be shorter.
    fn choose(
        &mut self,
        label: &str,
        options: &[String],
        details: &[String],
    ) -> Result<Option<String>, CliError> {
        for (i, option) in options.iter().enumerate() {
            match details.get(i).filter(|d| !d.is_empty()) {
                Some(detail) => writeln!(self.output, "  {}) {} - {}", i + 1, option, detail)?,
                None => writeln!(self.output, "  {}) {}", i + 1, option)?,
            }
        }
        loop {
            let Some(answer) = self.ask(&format!("{}: ", label))? else {
                return Ok(None);
            };
            let picked = match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => Some(options[n - 1].clone()),
                _ => options.iter().find(|o| **o == answer).cloned(),
            };
            match picked {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "No such {}: '{}'", label.to_lowercase(), answer)?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_state(&mut self, state: &BattleState) -> Result<(), CliError> {
        for unit in [&state.player, &state.enemy].into_iter().flatten() {
            writeln!(self.output, "{}", readout(unit))?;
        }
        if let Some(result) = &state.result {
            writeln!(self.output, "Result: {}", result)?;
        }
        Ok(())
    }
}

fn readout(unit: &CombatantStatus) -> String {
    format!(
        "{} ({}): {}/{} HP, {}/{} stamina, skill {}{}",
        unit.name,
        unit.class,
        unit.health,
        unit.max_health,
        unit.stamina,
        unit.max_stamina,
        unit.skill,
        if unit.skill_used { " (used)" } else { "" }
    )
}
