//! Faction ownership tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two armies a territory can belong to
///
/// `Blue` is the player's faction; `Red` is the opposing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Blue,
    Red,
}

impl Faction {
    /// The faction the human player fights for
    pub const PLAYER: Faction = Faction::Blue;

    /// Faction assigned to the territory at `index` during setup
    ///
    /// Even indices start Blue, odd indices start Red.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Faction::Blue
        } else {
            Faction::Red
        }
    }

    /// The other faction
    pub fn opponent(self) -> Self {
        match self {
            Faction::Blue => Faction::Red,
            Faction::Red => Faction::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Faction::Blue => "Blue",
            Faction::Red => "Red",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Number of territories held by each faction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionCounts {
    pub blue: usize,
    pub red: usize,
}

impl FactionCounts {
    /// Tally the owners of a sequence of territories
    pub fn tally(factions: impl IntoIterator<Item = Faction>) -> Self {
        let mut counts = FactionCounts::default();
        for faction in factions {
            match faction {
                Faction::Blue => counts.blue += 1,
                Faction::Red => counts.red += 1,
            }
        }
        counts
    }

    pub fn count(&self, faction: Faction) -> usize {
        match faction {
            Faction::Blue => self.blue,
            Faction::Red => self.red,
        }
    }

    pub fn total(&self) -> usize {
        self.blue + self.red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let counts = FactionCounts::tally([Faction::Blue, Faction::Red, Faction::Blue]);
        assert_eq!(counts.count(Faction::Blue), 2);
        assert_eq!(counts.count(Faction::Red), 1);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_parity_assignment() {
        assert_eq!(Faction::for_index(0), Faction::Blue);
        assert_eq!(Faction::for_index(1), Faction::Red);
        assert_eq!(Faction::for_index(2), Faction::Blue);
        assert_eq!(Faction::for_index(7), Faction::Red);
    }

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(Faction::Blue.opponent(), Faction::Red);
        assert_eq!(Faction::Red.opponent(), Faction::Blue);
        assert_eq!(Faction::PLAYER.opponent().opponent(), Faction::PLAYER);
    }

    #[test]
    fn test_display_uses_color_names() {
        // Board padding relies on Display honoring width flags
        assert_eq!(format!("{:<6}|", Faction::Red), "Red   |");
        assert_eq!(Faction::Blue.to_string(), "Blue");
    }
}
