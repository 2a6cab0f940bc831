//! Fixed script controller for deterministic testing
//!
//! This controller replays a predetermined sequence of numbers, exactly as a
//! player would have typed them. Once the script is exhausted, it answers `0`,
//! which quits from the main menu.

use crate::game::controller::{AttackOrder, GameStateView, MenuChoice, PlayerController};
use crate::{Result, WarError};

/// A controller that follows a fixed script of inputs
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FixedScriptController {
    /// The predetermined sequence of inputs
    script: Vec<i64>,
    /// Current position in the script
    pub current_index: usize,
}

impl FixedScriptController {
    /// Create a controller from a sequence of inputs
    ///
    /// # Example
    /// ```
    /// use territory_war::game::FixedScriptController;
    ///
    /// // Attack 0 -> 1, check the mission, then quit
    /// let controller = FixedScriptController::new(vec![1, 0, 1, 2, 0]);
    /// assert!(!controller.is_exhausted());
    /// ```
    pub fn new(script: Vec<i64>) -> Self {
        FixedScriptController {
            script,
            current_index: 0,
        }
    }

    /// Parse a script such as `"1 0 1, 2 0"` (space or comma separated)
    pub fn parse(input: &str) -> Result<Self> {
        let script = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| WarError::ParseError(format!("invalid script input: '{}'", s)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(script))
    }

    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.script.len()
    }

    /// Next input from the script, or 0 once it is exhausted
    fn next_input(&mut self) -> i64 {
        match self.script.get(self.current_index) {
            Some(&value) => {
                self.current_index += 1;
                value
            }
            None => 0,
        }
    }
}

impl PlayerController for FixedScriptController {
    fn name(&self) -> &str {
        "fixed"
    }

    fn choose_menu_option(&mut self, view: &GameStateView) -> Result<MenuChoice> {
        let input = self.next_input();
        view.logger()
            .verbose(&format!("script chose menu option {}", input));
        Ok(MenuChoice::from_code(input))
    }

    fn choose_attack(&mut self, view: &GameStateView) -> Result<AttackOrder> {
        let order = AttackOrder::new(self.next_input(), self.next_input());
        view.logger().verbose(&format!(
            "script chose attack {} -> {}",
            order.attacker, order.defender
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSession;

    #[test]
    fn test_replays_script_then_quits() {
        let session = GameSession::new(4, 1).unwrap();
        let view = GameStateView::new(&session);
        let mut ctrl = FixedScriptController::new(vec![1, 2, 3, 2]);

        assert_eq!(ctrl.choose_menu_option(&view).unwrap(), MenuChoice::Attack);
        assert_eq!(ctrl.choose_attack(&view).unwrap(), AttackOrder::new(2, 3));
        assert_eq!(
            ctrl.choose_menu_option(&view).unwrap(),
            MenuChoice::CheckMission
        );
        assert!(ctrl.is_exhausted());
        assert_eq!(ctrl.choose_menu_option(&view).unwrap(), MenuChoice::Quit);
    }

    #[test]
    fn test_parse_script() {
        let ctrl = FixedScriptController::parse("1 0 1, 2,0").unwrap();
        assert_eq!(ctrl.script, vec![1, 0, 1, 2, 0]);

        let ctrl = FixedScriptController::parse("1 -4").unwrap();
        assert_eq!(ctrl.script, vec![1, -4]);

        assert!(matches!(
            FixedScriptController::parse("1 x"),
            Err(WarError::ParseError(_))
        ));
    }
}
