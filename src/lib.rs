//! Territory War - a text-menu territory conquest game
//!
//! A fixed map of territories split between two factions. The player attacks
//! territories to flip their ownership and tries to complete a randomly
//! assigned mission.

pub mod core;
pub mod error;
pub mod game;
pub mod map;

pub use error::{Result, WarError};
