//! Random controller for autoplay and benchmarks
//!
//! Picks menu entries and territories at random. It plays the human's seat,
//! not an opponent: the Red faction never acts on its own.

use crate::game::controller::{AttackOrder, GameStateView, MenuChoice, PlayerController};
use crate::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// Chance (in percent) of attacking on a given round
const ATTACK_PERCENT: u32 = 75;
/// Chance (in percent) of checking the mission on a given round
const CHECK_PERCENT: u32 = 20;

/// A controller that makes random choices
#[derive(Debug, Clone)]
pub struct RandomController {
    rng: ChaCha12Rng,
}

impl RandomController {
    /// Create a random controller with a seeded RNG (for deterministic runs)
    pub fn with_seed(seed: u64) -> Self {
        RandomController {
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }
}

impl PlayerController for RandomController {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_menu_option(&mut self, _view: &GameStateView) -> Result<MenuChoice> {
        let roll = self.rng.gen_range(0..100);
        let choice = if roll < ATTACK_PERCENT {
            MenuChoice::Attack
        } else if roll < ATTACK_PERCENT + CHECK_PERCENT {
            MenuChoice::CheckMission
        } else {
            MenuChoice::Quit
        };
        Ok(choice)
    }

    fn choose_attack(&mut self, view: &GameStateView) -> Result<AttackOrder> {
        let count = view.territory_count() as i64;
        let attacker = self.rng.gen_range(0..count);
        let defender = self.rng.gen_range(0..count);
        Ok(AttackOrder::new(attacker, defender))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    #[test]
    fn test_attack_indices_in_range() {
        let session = GameSession::new(7, 2).unwrap();
        let view = GameStateView::new(&session);
        let mut ctrl = RandomController::with_seed(5);

        for _ in 0..200 {
            let order = ctrl.choose_attack(&view).unwrap();
            assert!((0..7).contains(&order.attacker));
            assert!((0..7).contains(&order.defender));
        }
    }

    #[test]
    fn test_never_invalid_menu_choice() {
        let session = GameSession::new(3, 2).unwrap();
        let view = GameStateView::new(&session);
        let mut ctrl = RandomController::with_seed(8);

        for _ in 0..200 {
            assert_ne!(ctrl.choose_menu_option(&view).unwrap(), MenuChoice::Invalid);
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let session = GameSession::new(10, 2).unwrap();
        let view = GameStateView::new(&session);
        let mut a = RandomController::with_seed(77);
        let mut b = RandomController::with_seed(77);

        for _ in 0..50 {
            assert_eq!(a.choose_attack(&view).unwrap(), b.choose_attack(&view).unwrap());
        }
    }
}
