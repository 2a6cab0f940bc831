//! Battle resolution between two territories
//!
//! One attack rolls a single die for each side. The attacker must roll
//! strictly higher to take the defending territory; ties go to the defender.

use crate::core::{Faction, Territory, TerritoryName};
use crate::{Result, WarError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of faces on each battle die
pub const DIE_SIDES: u8 = 6;

/// What happened to the two territories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    /// The defender changed hands and now holds `troops`
    Conquered { faction: Faction, troops: u32 },
    /// The defender held; the attacker is left with `attacker_troops`
    Repelled { attacker_troops: u32 },
}

/// Human-readable record of one attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    pub attacker: TerritoryName,
    pub defender: TerritoryName,
    pub attacker_roll: u8,
    pub defender_roll: u8,
    pub outcome: BattleOutcome,
}

impl BattleReport {
    pub fn attacker_won(&self) -> bool {
        matches!(self.outcome, BattleOutcome::Conquered { .. })
    }
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (attack) rolled {}", self.attacker, self.attacker_roll)?;
        writeln!(f, "{} (defense) rolled {}", self.defender, self.defender_roll)?;
        match self.outcome {
            BattleOutcome::Conquered { faction, troops } => write!(
                f,
                "The attacker won! {} now belongs to {} with {} troops.",
                self.defender, faction, troops
            ),
            BattleOutcome::Repelled { attacker_troops } => write!(
                f,
                "The defender held! {} is down to {} troops.",
                self.attacker, attacker_troops
            ),
        }
    }
}

/// Roll one battle die
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=DIE_SIDES)
}

/// Attack `defender` from `attacker`, rolling both dice from `rng`
///
/// Attacking a territory of the same faction is rejected before any dice are
/// drawn and leaves both territories untouched.
pub fn attack<R: Rng + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut R,
) -> Result<BattleReport> {
    check_factions(attacker, defender)?;

    let attacker_roll = roll_die(rng);
    let defender_roll = roll_die(rng);
    resolve(attacker, defender, attacker_roll, defender_roll)
}

/// Apply the outcome of an attack with known dice
pub fn resolve(
    attacker: &mut Territory,
    defender: &mut Territory,
    attacker_roll: u8,
    defender_roll: u8,
) -> Result<BattleReport> {
    check_factions(attacker, defender)?;

    let outcome = if attacker_roll > defender_roll {
        let troops = attacker.troops / 2;
        defender.capture(attacker.faction, troops);
        BattleOutcome::Conquered {
            faction: attacker.faction,
            troops,
        }
    } else {
        attacker.lose_troop();
        BattleOutcome::Repelled {
            attacker_troops: attacker.troops,
        }
    };

    Ok(BattleReport {
        attacker: attacker.name(),
        defender: defender.name(),
        attacker_roll,
        defender_roll,
        outcome,
    })
}

fn check_factions(attacker: &Territory, defender: &Territory) -> Result<()> {
    if attacker.faction == defender.faction {
        return Err(WarError::SameFaction(attacker.faction));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn blue(troops: u32) -> Territory {
        Territory::new(0, Faction::Blue, troops)
    }

    fn red(troops: u32) -> Territory {
        Territory::new(1, Faction::Red, troops)
    }

    #[test]
    fn test_higher_roll_conquers() {
        let mut attacker = blue(5);
        let mut defender = red(8);

        let report = resolve(&mut attacker, &mut defender, 6, 2).unwrap();

        assert!(report.attacker_won());
        assert_eq!(defender.faction, Faction::Blue);
        assert_eq!(defender.troops, 2);
        assert_eq!(attacker, blue(5));
    }

    #[test]
    fn test_tie_goes_to_defender() {
        let mut attacker = blue(5);
        let mut defender = red(8);

        let report = resolve(&mut attacker, &mut defender, 4, 4).unwrap();

        assert_eq!(
            report.outcome,
            BattleOutcome::Repelled { attacker_troops: 4 }
        );
        assert_eq!(defender, red(8));
    }

    #[test]
    fn test_repelled_attacker_never_goes_negative() {
        let mut attacker = red(0);
        let mut defender = blue(3);

        resolve(&mut attacker, &mut defender, 1, 6).unwrap();
        assert_eq!(attacker.troops, 0);
    }

    #[test]
    fn test_conquest_with_single_troop_leaves_empty_garrison() {
        let mut attacker = blue(1);
        let mut defender = red(10);

        resolve(&mut attacker, &mut defender, 3, 1).unwrap();
        assert_eq!(defender.faction, Faction::Blue);
        assert_eq!(defender.troops, 0);
    }

    #[test]
    fn test_same_faction_is_rejected_without_rolling() {
        let mut attacker = blue(5);
        let mut defender = Territory::new(2, Faction::Blue, 2);
        let mut rng = ChaCha12Rng::seed_from_u64(3);
        let mut untouched = rng.clone();

        let err = attack(&mut attacker, &mut defender, &mut rng).unwrap_err();

        assert!(matches!(err, WarError::SameFaction(Faction::Blue)));
        assert_eq!(attacker, blue(5));
        assert_eq!(defender.troops, 2);
        // No dice were consumed
        assert_eq!(roll_die(&mut rng), roll_die(&mut untouched));
    }

    #[test]
    fn test_dice_stay_in_range() {
        let mut rng = ChaCha12Rng::seed_from_u64(11);
        for _ in 0..1000 {
            let roll = roll_die(&mut rng);
            assert!((1..=DIE_SIDES).contains(&roll));
        }
    }

    #[test]
    fn test_report_text() {
        let mut attacker = blue(5);
        let mut defender = red(8);
        let report = resolve(&mut attacker, &mut defender, 2, 5).unwrap();

        let text = report.to_string();
        assert!(text.contains("Territory 1 (attack) rolled 2"));
        assert!(text.contains("Territory 2 (defense) rolled 5"));
        assert!(text.contains("The defender held!"));
    }
}
