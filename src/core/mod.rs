//! Core game types: factions, territories and missions

pub mod faction;
pub mod mission;
pub mod territory;

pub use faction::{Faction, FactionCounts};
pub use mission::{Mission, MissionStatus, MISSION_CATALOG};
pub use territory::{Territory, TerritoryName, MAX_STARTING_TROOPS, MIN_STARTING_TROOPS};
