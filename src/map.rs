//! Territory store: the fixed list of territories for one session

use crate::core::{Faction, FactionCounts, Territory, MAX_STARTING_TROOPS, MIN_STARTING_TROOPS};
use crate::{Result, WarError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The board: a contiguous, fixed-size collection of territories
///
/// Storage is reserved once by [`TerritoryMap::allocate`] and filled once by
/// [`TerritoryMap::initialize`]. Territories are only ever mutated in place
/// afterwards; none are added or removed. The storage is released when the
/// map is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryMap {
    territories: Vec<Territory>,
    /// Number of territories requested at allocation time
    size: usize,
}

impl TerritoryMap {
    /// Reserve storage for `count` territories
    ///
    /// Fails with [`WarError::InvalidTerritoryCount`] for an empty map and with
    /// [`WarError::AllocationFailure`] if the memory cannot be reserved.
    pub fn allocate(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(WarError::InvalidTerritoryCount(0));
        }

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(count)
            .map_err(|_| WarError::AllocationFailure(count))?;

        Ok(TerritoryMap {
            territories,
            size: count,
        })
    }

    /// Fill the reserved storage with starting territories
    ///
    /// Even indices start Blue, odd indices Red, each with a random garrison
    /// in `[MIN_STARTING_TROOPS, MAX_STARTING_TROOPS]`. May only run once.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        if !self.territories.is_empty() {
            return Err(WarError::AlreadyInitialized);
        }

        for index in 0..self.size {
            let troops = rng.gen_range(MIN_STARTING_TROOPS..=MAX_STARTING_TROOPS);
            self.territories.push(Territory::starting(index, troops));
        }
        Ok(())
    }

    /// Allocate and initialize in one step
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self> {
        let mut map = Self::allocate(count)?;
        map.initialize(rng)?;
        Ok(map)
    }

    /// Build a map with a predetermined layout
    ///
    /// Each territory's index is set to its position in `territories`.
    pub fn from_territories(mut territories: Vec<Territory>) -> Result<Self> {
        if territories.is_empty() {
            return Err(WarError::InvalidTerritoryCount(0));
        }
        for (index, territory) in territories.iter_mut().enumerate() {
            territory.index = index;
        }
        let size = territories.len();
        Ok(TerritoryMap { territories, size })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    /// Count the territories held by each faction
    pub fn faction_counts(&self) -> FactionCounts {
        FactionCounts::tally(self.territories.iter().map(|t| t.faction))
    }

    /// Count the territories held by one faction
    pub fn count_owned_by(&self, faction: Faction) -> usize {
        self.faction_counts().count(faction)
    }

    /// Highest valid index
    pub fn max_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Turn raw user input into an index on this map
    pub fn resolve_index(&self, raw: i64) -> Result<usize> {
        usize::try_from(raw)
            .ok()
            .filter(|&idx| idx < self.len())
            .ok_or(WarError::InvalidIndex {
                index: raw,
                max: self.max_index(),
            })
    }

    /// Borrow two distinct territories mutably at once
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Result<(&mut Territory, &mut Territory)> {
        for idx in [first, second] {
            if idx >= self.len() {
                return Err(WarError::InvalidIndex {
                    index: idx as i64,
                    max: self.max_index(),
                });
            }
        }
        if first == second {
            return Err(WarError::SameTerritory(first));
        }

        if first < second {
            let (head, tail) = self.territories.split_at_mut(second);
            Ok((&mut head[first], &mut tail[0]))
        } else {
            let (head, tail) = self.territories.split_at_mut(first);
            Ok((&mut tail[0], &mut head[second]))
        }
    }
}

impl<'a> IntoIterator for &'a TerritoryMap {
    type Item = &'a Territory;
    type IntoIter = std::slice::Iter<'a, Territory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TerritoryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<15} {:<12} {:<8}", "Name", "Faction", "Troops")?;
        write!(f, "{}", "-".repeat(34))?;
        for territory in &self.territories {
            write!(
                f,
                "\n{:<15} {:<12} {:<8}",
                territory.name(), territory.faction, territory.troops
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn layout(troops: &[u32]) -> TerritoryMap {
        let territories = troops
            .iter()
            .enumerate()
            .map(|(idx, &t)| Territory::starting(idx, t))
            .collect();
        TerritoryMap::from_territories(territories).unwrap()
    }

    #[test]
    fn test_allocate_rejects_empty_map() {
        assert!(matches!(
            TerritoryMap::allocate(0),
            Err(WarError::InvalidTerritoryCount(0))
        ));
    }

    #[test]
    fn test_allocate_reports_allocation_failure() {
        assert!(matches!(
            TerritoryMap::allocate(usize::MAX),
            Err(WarError::AllocationFailure(usize::MAX))
        ));
    }

    #[test]
    fn test_allocate_then_initialize() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let mut map = TerritoryMap::allocate(5).unwrap();
        assert!(map.is_empty());

        map.initialize(&mut rng).unwrap();
        assert_eq!(map.len(), 5);
        assert_eq!(map.get(0).unwrap().name().to_string(), "Territory 1");
        assert_eq!(map.get(4).unwrap().name().to_string(), "Territory 5");
    }

    #[test]
    fn test_initialize_stays_within_reservation() {
        let mut rng = ChaCha12Rng::seed_from_u64(4);
        let mut map = TerritoryMap::allocate(1_000).unwrap();
        let reserved = map.territories.capacity();

        map.initialize(&mut rng).unwrap();
        assert_eq!(map.territories.capacity(), reserved);
        assert_eq!(map.get(999).unwrap().name().to_string(), "Territory 1000");
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let mut map = TerritoryMap::generate(3, &mut rng).unwrap();
        let before = map.clone();

        assert!(matches!(
            map.initialize(&mut rng),
            Err(WarError::AlreadyInitialized)
        ));
        assert_eq!(map, before);
    }

    #[test]
    fn test_same_seed_same_map() {
        let a = TerritoryMap::generate(20, &mut ChaCha12Rng::seed_from_u64(99)).unwrap();
        let b = TerritoryMap::generate(20, &mut ChaCha12Rng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_index() {
        let map = layout(&[1, 2, 3, 4]);
        assert_eq!(map.resolve_index(0).unwrap(), 0);
        assert_eq!(map.resolve_index(3).unwrap(), 3);
        assert!(matches!(
            map.resolve_index(4),
            Err(WarError::InvalidIndex { index: 4, max: 3 })
        ));
        assert!(matches!(
            map.resolve_index(-1),
            Err(WarError::InvalidIndex { index: -1, max: 3 })
        ));
    }

    #[test]
    fn test_pair_mut_in_either_order() {
        let mut map = layout(&[1, 2, 3, 4]);

        let (a, b) = map.pair_mut(3, 1).unwrap();
        assert_eq!(a.index, 3);
        assert_eq!(b.index, 1);

        let (a, b) = map.pair_mut(0, 2).unwrap();
        assert_eq!(a.troops, 1);
        assert_eq!(b.troops, 3);
    }

    #[test]
    fn test_pair_mut_rejects_bad_indices() {
        let mut map = layout(&[1, 2]);
        assert!(matches!(map.pair_mut(1, 1), Err(WarError::SameTerritory(1))));
        assert!(matches!(
            map.pair_mut(0, 2),
            Err(WarError::InvalidIndex { index: 2, max: 1 })
        ));
    }

    #[test]
    fn test_faction_counts() {
        let map = layout(&[1, 1, 1, 1, 1]);
        let counts = map.faction_counts();
        assert_eq!(counts.blue, 3);
        assert_eq!(counts.red, 2);
        assert_eq!(map.count_owned_by(Faction::Red), 2);
    }

    #[test]
    fn test_board_rendering() {
        let map = layout(&[5, 10]);
        let expected = "\
Name            Faction      Troops  
----------------------------------
Territory 1     Blue         5       
Territory 2     Red          10      ";
        similar_asserts::assert_eq!(map.to_string(), expected);
    }
}
