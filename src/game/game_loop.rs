//! Menu loop
//!
//! Runs rounds until the player quits or completes the mission. Each round
//! renders the board, asks the controller for a menu choice, dispatches it,
//! and waits for an acknowledgement before the next round.

use crate::core::{Mission, MissionStatus};
use crate::game::controller::{GameStateView, MenuChoice, PlayerController};
use crate::game::GameSession;
use crate::{Result, WarError};
use serde::{Deserialize, Serialize};

/// Verbosity level for game output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - mission and game outcome only
    Minimal = 1,
    /// Normal - board, menu, battles and messages (default)
    #[default]
    Normal = 2,
    /// Verbose - also seeds, scripted inputs and rule notes
    Verbose = 3,
}

/// State of the menu loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Reason the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEndReason {
    /// The player chose `0` from the menu
    Quit,
    /// A mission check succeeded
    MissionComplete,
    /// Input ran out before the player quit
    InputClosed,
    /// The configured round limit was reached
    RoundLimit,
}

/// Result of running a game to completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub end_reason: GameEndReason,
    /// Rounds in which a menu choice was made
    pub rounds_played: u32,
    pub mission: Mission,
    /// Mission status at the moment the game ended
    pub mission_status: MissionStatus,
}

impl GameResult {
    pub fn won(&self) -> bool {
        self.end_reason == GameEndReason::MissionComplete
    }
}

/// Drives one session through its rounds
pub struct GameLoop<'a> {
    session: &'a mut GameSession,
    state: LoopState,
    end_reason: Option<GameEndReason>,
    rounds_played: u32,
    max_rounds: Option<u32>,
}

impl<'a> GameLoop<'a> {
    /// Create a new loop over a fully set up session
    pub fn new(session: &'a mut GameSession) -> Self {
        GameLoop {
            session,
            state: LoopState::Running,
            end_reason: None,
            rounds_played: 0,
            max_rounds: None,
        }
    }

    /// Stop after `max_rounds` rounds (None = no limit)
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    fn view(&self) -> GameStateView<'_> {
        GameStateView::new(&*self.session)
    }

    fn terminate(&mut self, reason: GameEndReason) {
        self.state = LoopState::Terminated;
        self.end_reason = Some(reason);
    }

    /// Turn closed input into a clean termination
    fn accept<T>(&mut self, input: Result<T>) -> Result<Option<T>> {
        match input {
            Ok(value) => Ok(Some(value)),
            Err(WarError::InputClosed) => {
                self.session.logger.verbose("input closed, ending the game");
                self.terminate(GameEndReason::InputClosed);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Show the assigned mission once, right after setup
    pub fn announce_mission(&self) {
        let logger = &self.session.logger;
        logger.verbose(&format!("session seed: {}", self.session.seed()));
        logger.log(
            VerbosityLevel::Minimal,
            Some("mission"),
            &format!("\n--- YOUR MISSION ---\n{}", self.session.mission()),
        );
    }

    /// Run rounds until the loop terminates
    pub fn run(&mut self, controller: &mut dyn PlayerController) -> Result<GameResult> {
        while self.state == LoopState::Running {
            if self.max_rounds.is_some_and(|max| self.rounds_played >= max) {
                self.session.logger.normal("\nRound limit reached.");
                self.terminate(GameEndReason::RoundLimit);
                break;
            }
            self.step(controller)?;
        }

        let result = self.result();
        controller.on_game_end(&self.view(), &result);
        self.session.logger.verbose(&format!(
            "{} controller finished after {} rounds: {:?}",
            controller.name(),
            result.rounds_played,
            result.end_reason
        ));
        Ok(result)
    }

    /// Play a single round
    pub fn step(&mut self, controller: &mut dyn PlayerController) -> Result<()> {
        if self.state == LoopState::Terminated {
            return Ok(());
        }

        self.render_round();

        let choice = controller.choose_menu_option(&self.view());
        let Some(choice) = self.accept(choice)? else {
            return Ok(());
        };
        self.rounds_played += 1;

        match choice {
            MenuChoice::Attack => self.attack_phase(controller)?,
            MenuChoice::CheckMission => self.check_mission(),
            MenuChoice::Quit => {
                self.session.logger.minimal("\nEnding the game...");
                self.terminate(GameEndReason::Quit);
            }
            MenuChoice::Invalid => self
                .session
                .logger
                .normal(&format!("\n{}", WarError::InvalidMenuOption)),
        }

        if self.state == LoopState::Running {
            let ack = controller.acknowledge(&self.view());
            self.accept(ack)?;
        }
        Ok(())
    }

    fn attack_phase(&mut self, controller: &mut dyn PlayerController) -> Result<()> {
        let order = controller.choose_attack(&self.view());
        let Some(order) = self.accept(order)? else {
            return Ok(());
        };

        self.session.logger.verbose(&format!(
            "attack order: {} -> {}",
            order.attacker, order.defender
        ));
        let message = match self.session.attack_raw(order.attacker, order.defender) {
            Ok(report) => report.to_string(),
            Err(e) if e.is_recoverable() => e.to_string(),
            Err(e) => return Err(e),
        };
        self.session
            .logger
            .log(VerbosityLevel::Normal, Some("battle"), &message);
        Ok(())
    }

    fn check_mission(&mut self) {
        let logger = &self.session.logger;
        match self.session.mission_status() {
            MissionStatus::Complete => {
                logger.log(
                    VerbosityLevel::Minimal,
                    Some("mission"),
                    "\nCongratulations! You completed your mission!",
                );
                self.terminate(GameEndReason::MissionComplete);
            }
            MissionStatus::Incomplete | MissionStatus::Unsupported => {
                logger.log(
                    VerbosityLevel::Normal,
                    Some("mission"),
                    "\nMission not yet completed.",
                );
                if !self.session.mission().is_supported() {
                    logger.verbose("this mission has no completion rule and cannot be completed");
                }
            }
        }
    }

    fn render_round(&self) {
        let logger = &self.session.logger;
        logger.log(
            VerbosityLevel::Normal,
            Some("board"),
            &format!("\n===== CURRENT MAP =====\n\n{}", self.session.map),
        );
        logger.log(
            VerbosityLevel::Normal,
            Some("mission"),
            &format!("\nMission: {}", self.session.mission()),
        );
        logger.log(
            VerbosityLevel::Normal,
            Some("menu"),
            "\n===== MENU =====\n1. Attack territory\n2. Check mission\n0. Quit",
        );
    }

    /// Snapshot of how the game ended so far
    pub fn result(&self) -> GameResult {
        GameResult {
            end_reason: self.end_reason.unwrap_or(GameEndReason::Quit),
            rounds_played: self.rounds_played,
            mission: self.session.mission(),
            mission_status: self.session.mission_status(),
        }
    }
}
