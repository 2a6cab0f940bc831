//! Territory representation

use crate::core::Faction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest troop count a freshly generated territory can have
pub const MIN_STARTING_TROOPS: u32 = 1;
/// Largest troop count a freshly generated territory can have
pub const MAX_STARTING_TROOPS: u32 = 10;

/// Display name of a territory, derived from its zero-based map index
///
/// Names are rendered on demand ("Territory 1", "Territory 2", ...) so a
/// territory record owns no heap memory of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerritoryName(pub usize);

impl fmt::Display for TerritoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("Territory {}", self.0 + 1))
    }
}

/// One ownable region of the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Position on the map
    pub index: usize,

    /// Current owner
    pub faction: Faction,

    /// Strength used in combat
    pub troops: u32,
}

impl Territory {
    pub fn new(index: usize, faction: Faction, troops: u32) -> Self {
        Territory {
            index,
            faction,
            troops,
        }
    }

    /// Build the territory that sits at `index` of a freshly generated map
    pub fn starting(index: usize, troops: u32) -> Self {
        Territory::new(index, Faction::for_index(index), troops)
    }

    pub fn name(&self) -> TerritoryName {
        TerritoryName(self.index)
    }

    /// Remove one troop after a failed attack; never goes below zero
    pub fn lose_troop(&mut self) {
        self.troops = self.troops.saturating_sub(1);
    }

    /// Hand the territory to `faction` with a fresh garrison
    pub fn capture(&mut self, faction: Faction, troops: u32) {
        self.faction = faction;
        self.troops = troops;
    }
}
