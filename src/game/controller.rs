//! Player controller trait and game state view
//!
//! This module defines the interface between the menu loop and whoever is
//! making the decisions (a human at the terminal, a fixed script, or a random
//! driver). Controllers inspect a read-only view of the session to choose.

use crate::core::Mission;
use crate::game::{GameLogger, GameResult, GameSession};
use crate::Result;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`: attack a territory
    Attack,
    /// `2`: check whether the mission is complete
    CheckMission,
    /// `0`: leave the game
    Quit,
    /// Anything else
    Invalid,
}

impl MenuChoice {
    /// Map a numeric menu code to a choice
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => MenuChoice::Attack,
            2 => MenuChoice::CheckMission,
            0 => MenuChoice::Quit,
            _ => MenuChoice::Invalid,
        }
    }

    /// Parse one line of menu input; non-numeric input is an invalid option
    pub fn parse(input: &str) -> Self {
        input
            .trim()
            .parse::<i64>()
            .map(Self::from_code)
            .unwrap_or(MenuChoice::Invalid)
    }
}

/// Attacker and defender indices exactly as entered (not yet validated)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackOrder {
    pub attacker: i64,
    pub defender: i64,
}

impl AttackOrder {
    pub fn new(attacker: i64, defender: i64) -> Self {
        AttackOrder { attacker, defender }
    }
}

/// Read-only view of the session for controllers
pub struct GameStateView<'a> {
    session: &'a GameSession,
}

impl<'a> GameStateView<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        GameStateView { session }
    }

    pub fn territory_count(&self) -> usize {
        self.session.map.len()
    }

    /// Highest index the player may enter
    pub fn max_index(&self) -> usize {
        self.session.map.max_index()
    }

    pub fn mission(&self) -> Mission {
        self.session.mission()
    }

    pub fn logger(&self) -> &GameLogger {
        &self.session.logger
    }
}

/// Player controller trait
///
/// The menu loop calls these methods whenever it needs input. Returning
/// [`crate::WarError::InputClosed`] ends the game cleanly.
pub trait PlayerController {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Pick the next menu entry
    fn choose_menu_option(&mut self, view: &GameStateView) -> Result<MenuChoice>;

    /// Pick the attacking and defending territories
    fn choose_attack(&mut self, view: &GameStateView) -> Result<AttackOrder>;

    /// Wait for the player to acknowledge the end of a round
    fn acknowledge(&mut self, _view: &GameStateView) -> Result<()> {
        Ok(())
    }

    /// Called when the game ends (for cleanup/logging)
    fn on_game_end(&mut self, _view: &GameStateView, _result: &GameResult) {}
}
