use std::io::{
    BufRead,
    Write,
};

use anyhow::{
    Context,
    Result,
    bail,
};
use itertools::Itertools;
use monbattle::{
    Battle,
    BattleBuilder,
    BattleEngineOptions,
    BattleError,
    Combatant,
    DamageCalculation,
    ElementalType,
    Move,
    MoveKind,
    Side,
    StatTarget,
    TurnResult,
    TypeEffectiveness,
};

use crate::choice::{
    MoveChoice,
    TypeChoice,
};

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn stat_name(target: StatTarget) -> &'static str {
    match target {
        StatTarget::Atk => "attack",
        StatTarget::Def => "defense",
    }
}

fn describe_move(mov: &Move) -> String {
    match mov.kind() {
        MoveKind::Damage { typ, power, uses } | MoveKind::Mega { typ, power, uses } => {
            format!("{} (Power: {power}, Type: {typ}, Uses: {uses})", mov.name())
        }
        MoveKind::Stat { effect } => format!(
            "{} (Lowers {}, Type: {}, Uses: {})",
            mov.name(),
            stat_name(effect.target),
            mov.typ(),
            mov.uses()
        ),
    }
}

/// The interactive terminal shell around a [`Battle`].
///
/// The shell owns all I/O. It reads one answer per line from `input` and writes prompts and
/// narration to `output`. Invalid answers are reported and asked again.
pub struct Shell<R, W> {
    input: R,
    output: W,
    show_calculation: bool,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_calculation: false,
        }
    }

    /// Prints every factor of each damage calculation.
    pub fn with_show_calculation(mut self, show_calculation: bool) -> Self {
        self.show_calculation = show_calculation;
        self
    }

    /// Runs a full battle, from creating both combatants until one faints.
    ///
    /// Returns the winning side.
    pub fn run(&mut self, options: BattleEngineOptions) -> Result<Side> {
        writeln!(self.output, "Welcome to Mon Battle Simulator!\n")?;

        let mut builder = BattleBuilder::new(options);
        for player in 1..=2 {
            self.create_combatant(&mut builder, player)?;
        }
        let mut battle = builder.build()?;

        if let Some(first) = battle.active_combatant() {
            writeln!(self.output, "{} moves first!", first.name())?;
        }
        while !battle.ended() {
            let result = self.play_turn(&mut battle)?;
            self.print_turn_result(&battle, &result)?;
        }

        let winner = battle.winner().context("battle ended without a winner")?;
        writeln!(
            self.output,
            "\n{} wins the battle!",
            battle.combatant(winner).name()
        )?;
        self.output.flush()?;
        Ok(winner)
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut answer = String::new();
        if self
            .input
            .read_line(&mut answer)
            .context("failed to read input")?
            == 0
        {
            bail!("input closed before the battle finished");
        }
        Ok(answer.trim().to_owned())
    }

    fn create_combatant(&mut self, builder: &mut BattleBuilder, player: usize) -> Result<()> {
        let menu = builder
            .options()
            .move_catalog
            .selectable_types()
            .collect::<Vec<_>>();
        loop {
            let name = self.prompt_name(player)?;
            let typ = self.select_type(&menu)?;
            match builder.create_combatant(name, typ) {
                Ok(mon) => return self.print_combatant(mon),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn prompt_name(&mut self, player: usize) -> Result<String> {
        loop {
            let name = self.prompt(&format!("Enter name for Player {player}'s mon: "))?;
            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.output, "{}", BattleError::InvalidName)?;
        }
    }

    fn select_type(&mut self, menu: &[ElementalType]) -> Result<ElementalType> {
        writeln!(
            self.output,
            "Choose type: {}",
            menu.iter()
                .enumerate()
                .map(|(i, typ)| format!("{}. {}", i + 1, capitalize(&typ.to_string())))
                .join(" ")
        )?;
        loop {
            let answer = self.prompt("Enter type number: ")?;
            match answer
                .parse::<TypeChoice>()
                .ok()
                .and_then(|choice| choice.resolve(menu))
            {
                Some(typ) => return Ok(typ),
                None => {
                    log::debug!("rejected type choice {answer:?}");
                    writeln!(self.output, "{}", BattleError::InvalidTypeSelection(answer))?;
                }
            }
        }
    }

    fn print_combatant(&mut self, mon: &Combatant) -> Result<()> {
        let stats = mon.base_stats();
        writeln!(
            self.output,
            "\n{}'s Stats: Type: {}, HP: {}, Attack: {}, Defense: {}, Speed: {}",
            mon.name(),
            mon.typ(),
            stats.hp,
            stats.atk,
            stats.def,
            stats.spe
        )?;
        writeln!(
            self.output,
            "Moves: {}\n",
            mon.moves().iter().map(describe_move).join(", ")
        )?;
        Ok(())
    }

    fn play_turn(&mut self, battle: &mut Battle) -> Result<TurnResult> {
        let mon = battle
            .active_combatant()
            .context("no combatant is waiting on a move")?;
        writeln!(self.output, "{}'s turn! Choose a move:", mon.name())?;
        for (i, mov) in mon.moves().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, describe_move(mov))?;
        }
        let question = format!("Choose move (1-{}): ", mon.moves().len());
        loop {
            let answer = self.prompt(&question)?;
            let choice = match answer.parse::<MoveChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            match battle.execute_turn(choice.slot) {
                Ok(result) => return Ok(result),
                Err(err) => {
                    log::debug!("rejected move choice {choice}: {err}");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn print_turn_result(&mut self, battle: &Battle, result: &TurnResult) -> Result<()> {
        let attacker = battle.combatant(result.attacker);
        let defender = battle.combatant(result.defender);
        match (&result.stat_change, &result.calculation) {
            (Some(change), _) => writeln!(
                self.output,
                "\n{} used {}! {}'s {} fell from {} to {}.",
                attacker.name(),
                result.move_name,
                defender.name(),
                stat_name(change.target),
                change.from,
                change.to
            )?,
            (None, calculation) => {
                if let Some(calculation) = calculation.as_ref().filter(|_| self.show_calculation) {
                    self.print_calculation(calculation)?;
                }
                writeln!(
                    self.output,
                    "\n{} used {} and dealt {} damage to {}!",
                    attacker.name(),
                    result.move_name,
                    result.damage_dealt,
                    defender.name()
                )?;
                match result.effectiveness {
                    Some(TypeEffectiveness::Strong) => {
                        writeln!(self.output, "It's super effective!")?
                    }
                    Some(TypeEffectiveness::Weak) => {
                        writeln!(self.output, "It's not very effective...")?
                    }
                    _ => (),
                }
            }
        }
        writeln!(
            self.output,
            "{} has {}/{} health left.\n",
            defender.name(),
            result.defender_remaining_health,
            defender.max_health()
        )?;
        if result.fainted {
            writeln!(self.output, "{} fainted!", defender.name())?;
        }
        Ok(())
    }

    fn print_calculation(&mut self, calculation: &DamageCalculation) -> Result<()> {
        writeln!(self.output, "\nDamage Calculation:")?;
        writeln!(self.output, "Base Damage: {:.2}", calculation.base)?;
        writeln!(self.output, "Type Multiplier: {}", calculation.type_multiplier)?;
        writeln!(
            self.output,
            "Random Factor: {:.2}",
            calculation.random_multiplier
        )?;
        writeln!(
            self.output,
            "Attack/Defense Ratio: {:.2}",
            calculation.attack_defense_ratio
        )?;
        writeln!(
            self.output,
            "Move Power Factor: {:.2}",
            calculation.power_factor
        )?;
        writeln!(self.output, "Final Damage: {}", calculation.damage)?;
        Ok(())
    }
}
