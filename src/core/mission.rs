//! Missions: the player's single victory condition
//!
//! Each mission is an explicit variant that carries both its display text and
//! its evaluation rule, so the text is never used to pick the rule.

use crate::core::{Faction, FactionCounts};
use crate::{Result, WarError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Territories the player must hold for [`Mission::ConquerTerritories`]
pub const CONQUEST_TARGET: usize = 3;

/// The fixed mission catalog, in selection order
pub const MISSION_CATALOG: [Mission; 5] = [
    Mission::ConquerTerritories,
    Mission::EliminateOpponent,
    Mission::DominateHalf,
    Mission::FortifiedTerritories,
    Mission::HoldTerritories,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mission {
    /// Hold at least three territories
    ConquerTerritories,
    /// Leave the opposing faction with no territories
    EliminateOpponent,
    /// Hold at least half of the map (rounded down)
    DominateHalf,
    /// Hold five territories with ten troops each (no evaluation rule)
    FortifiedTerritories,
    /// Keep every territory for three rounds (no evaluation rule)
    HoldTerritories,
}

/// Result of checking a mission against the current map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionStatus {
    Complete,
    Incomplete,
    /// The mission is part of the catalog but has no rule to evaluate it
    Unsupported,
}

impl MissionStatus {
    pub fn is_complete(self) -> bool {
        self == MissionStatus::Complete
    }
}

impl Mission {
    /// Draw one mission uniformly from the catalog
    pub fn assign<R: Rng + ?Sized>(rng: &mut R) -> Self {
        MISSION_CATALOG[rng.gen_range(0..MISSION_CATALOG.len())]
    }

    /// Look up a mission by its 1-based catalog number
    pub fn from_number(number: usize) -> Result<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| MISSION_CATALOG.get(idx))
            .copied()
            .ok_or(WarError::InvalidMission(number))
    }

    /// 1-based position in the catalog
    pub fn number(self) -> usize {
        match self {
            Mission::ConquerTerritories => 1,
            Mission::EliminateOpponent => 2,
            Mission::DominateHalf => 3,
            Mission::FortifiedTerritories => 4,
            Mission::HoldTerritories => 5,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mission::ConquerTerritories => "Conquer 3 territories.",
            Mission::EliminateOpponent => "Eliminate all Red territories.",
            Mission::DominateHalf => "Dominate half the map.",
            Mission::FortifiedTerritories => "Have at least 5 territories with 10 troops.",
            Mission::HoldTerritories => "Defend all your territories for 3 rounds.",
        }
    }

    /// Whether this mission has an evaluation rule at all
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            Mission::FortifiedTerritories | Mission::HoldTerritories
        )
    }

    /// Check the mission against per-faction territory counts
    ///
    /// Counts are taken from the player's point of view: the player is
    /// [`Faction::PLAYER`] and the opponent is its [`Faction::opponent`].
    pub fn evaluate(self, counts: &FactionCounts) -> MissionStatus {
        let player = counts.count(Faction::PLAYER);
        let opponent = counts.count(Faction::PLAYER.opponent());

        let complete = match self {
            Mission::ConquerTerritories => player >= CONQUEST_TARGET,
            Mission::EliminateOpponent => opponent == 0,
            Mission::DominateHalf => player >= counts.total() / 2,
            Mission::FortifiedTerritories | Mission::HoldTerritories => {
                return MissionStatus::Unsupported;
            }
        };

        if complete {
            MissionStatus::Complete
        } else {
            MissionStatus::Incomplete
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn counts(blue: usize, red: usize) -> FactionCounts {
        FactionCounts { blue, red }
    }

    #[test]
    fn test_conquer_needs_three_player_territories() {
        assert_eq!(
            Mission::ConquerTerritories.evaluate(&counts(2, 5)),
            MissionStatus::Incomplete
        );
        assert_eq!(
            Mission::ConquerTerritories.evaluate(&counts(3, 5)),
            MissionStatus::Complete
        );
    }

    #[test]
    fn test_eliminate_needs_zero_opponent_territories() {
        assert_eq!(
            Mission::EliminateOpponent.evaluate(&counts(5, 1)),
            MissionStatus::Incomplete
        );
        assert_eq!(
            Mission::EliminateOpponent.evaluate(&counts(6, 0)),
            MissionStatus::Complete
        );
    }

    #[test]
    fn test_eliminate_text_names_the_opponent() {
        let opponent = Faction::PLAYER.opponent().name();
        assert!(Mission::EliminateOpponent.description().contains(opponent));
    }

    #[test]
    fn test_dominate_half_rounds_down() {
        // 5 territories: half is 2
        assert_eq!(
            Mission::DominateHalf.evaluate(&counts(1, 4)),
            MissionStatus::Incomplete
        );
        assert_eq!(
            Mission::DominateHalf.evaluate(&counts(2, 3)),
            MissionStatus::Complete
        );
        // A single-territory map is trivially dominated
        assert_eq!(
            Mission::DominateHalf.evaluate(&counts(0, 1)),
            MissionStatus::Complete
        );
    }

    #[test]
    fn test_unsupported_missions_never_complete() {
        for mission in [Mission::FortifiedTerritories, Mission::HoldTerritories] {
            assert!(!mission.is_supported());
            assert_eq!(mission.evaluate(&counts(50, 0)), MissionStatus::Unsupported);
            assert!(!mission.evaluate(&counts(50, 0)).is_complete());
        }
    }

    #[test]
    fn test_catalog_numbers_round_trip() {
        for (idx, mission) in MISSION_CATALOG.iter().enumerate() {
            assert_eq!(mission.number(), idx + 1);
            assert_eq!(Mission::from_number(idx + 1).unwrap(), *mission);
        }
        assert!(matches!(
            Mission::from_number(0),
            Err(WarError::InvalidMission(0))
        ));
        assert!(matches!(
            Mission::from_number(6),
            Err(WarError::InvalidMission(6))
        ));
    }

    #[test]
    fn test_assign_covers_catalog() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Mission::assign(&mut rng));
        }
        assert_eq!(seen.len(), MISSION_CATALOG.len());
    }
}
