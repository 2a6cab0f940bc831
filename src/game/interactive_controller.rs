//! Interactive controller for a human player
//!
//! Reads choices line by line and writes prompts to the terminal. The reader
//! and writer are generic so the same controller can be driven from a buffer.

use crate::game::controller::{AttackOrder, GameStateView, MenuChoice, PlayerController};
use crate::{Result, WarError};
use std::io::{self, BufRead, Stderr, StdinLock, Stdout, Write};

/// A controller that prompts a human player for decisions
pub struct InteractiveController<R, W> {
    input: R,
    output: W,
}

impl InteractiveController<StdinLock<'static>, Stdout> {
    /// Controller bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        InteractiveController::new(io::stdin().lock(), io::stdout())
    }
}

impl InteractiveController<StdinLock<'static>, Stderr> {
    /// Controller that prompts on stderr, leaving stdout to JSON lines
    pub fn stdin_with_stderr_prompts() -> Self {
        InteractiveController::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> InteractiveController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractiveController { input, output }
    }

    /// Consume the controller and return its writer
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one line; end of input is [`WarError::InputClosed`]
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(WarError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Keep prompting until the player types a whole number
    fn read_integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let line = self.read_line(prompt)?;
            match line.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Ask for the size of the map, re-prompting until it is at least 1
    pub fn prompt_territory_count(&mut self) -> Result<usize> {
        loop {
            let count = self.read_integer("Enter number of territories: ")?;
            match usize::try_from(count) {
                Ok(count) if count >= 1 => return Ok(count),
                _ => writeln!(
                    self.output,
                    "{}",
                    WarError::InvalidTerritoryCount(count)
                )?,
            }
        }
    }
}

impl<R: BufRead, W: Write> PlayerController for InteractiveController<R, W> {
    fn name(&self) -> &str {
        "tui"
    }

    fn choose_menu_option(&mut self, _view: &GameStateView) -> Result<MenuChoice> {
        let line = self.read_line("Choose an option: ")?;
        Ok(MenuChoice::parse(&line))
    }

    fn choose_attack(&mut self, view: &GameStateView) -> Result<AttackOrder> {
        let max = view.max_index();
        let attacker =
            self.read_integer(&format!("Choose the attacking territory (0 to {}): ", max))?;
        let defender =
            self.read_integer(&format!("Choose the defending territory (0 to {}): ", max))?;
        Ok(AttackOrder::new(attacker, defender))
    }

    fn acknowledge(&mut self, _view: &GameStateView) -> Result<()> {
        self.read_line("\nPress ENTER to continue...")?;
        Ok(())
    }
}
