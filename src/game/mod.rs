//! Game engine: session state, battles, controllers and the menu loop

pub mod battle;
pub mod controller;
pub mod fixed_script_controller;
pub mod game_loop;
pub mod interactive_controller;
pub mod logger;
pub mod random_controller;
pub mod state;

pub use battle::{BattleOutcome, BattleReport};
pub use controller::{AttackOrder, GameStateView, MenuChoice, PlayerController};
pub use fixed_script_controller::FixedScriptController;
pub use game_loop::{GameEndReason, GameLoop, GameResult, LoopState, VerbosityLevel};
pub use interactive_controller::InteractiveController;
pub use logger::{GameLogger, LogEntry, OutputFormat};
pub use random_controller::RandomController;
pub use state::{seed_from_clock, GameConfig, GameSession};
