//! Error types for the territory war game

use crate::core::Faction;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Error allocating memory for {0} territories!")]
    AllocationFailure(usize),

    #[error("Invalid number of territories: {0} (must be at least 1)")]
    InvalidTerritoryCount(i64),

    #[error("Territory map is already initialized")]
    AlreadyInitialized,

    #[error("Invalid indices! Territory {index} is not between 0 and {max}.")]
    InvalidIndex { index: i64, max: usize },

    #[error("Invalid indices! A territory cannot attack itself ({0}).")]
    SameTerritory(usize),

    #[error("You cannot attack a territory of your own faction ({0})!")]
    SameFaction(Faction),

    #[error("Invalid option!")]
    InvalidMenuOption,

    #[error("Invalid mission number: {0} (expected 1-5)")]
    InvalidMission(usize),

    #[error("Input stream closed")]
    InputClosed,

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl WarError {
    /// Errors the menu loop reports in place before carrying on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WarError::InvalidIndex { .. }
                | WarError::SameTerritory(_)
                | WarError::SameFaction(_)
                | WarError::InvalidMenuOption
        )
    }
}

pub type Result<T> = std::result::Result<T, WarError>;
