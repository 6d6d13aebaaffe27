//! Terminal reward mapping

use serde::{Deserialize, Serialize};

use crate::tictactoe::{GameOutcome, Player};

/// Reward pair `(first, second)` handed out for each terminal outcome.
///
/// The default draw pair is deliberately asymmetric: the second mover earns
/// more for holding a draw than the first mover does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardScheme {
    pub x_win: (f64, f64),
    pub o_win: (f64, f64),
    pub draw: (f64, f64),
}

impl RewardScheme {
    pub fn rewards_for(&self, outcome: GameOutcome) -> (f64, f64) {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_win,
            GameOutcome::Win(Player::O) => self.o_win,
            GameOutcome::Draw => self.draw,
        }
    }
}

impl Default for RewardScheme {
    fn default() -> Self {
        Self {
            x_win: (1.0, 0.0),
            o_win: (0.0, 1.0),
            draw: (0.1, 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rewards() {
        let scheme = RewardScheme::default();
        assert_eq!(scheme.rewards_for(GameOutcome::Win(Player::X)), (1.0, 0.0));
        assert_eq!(scheme.rewards_for(GameOutcome::Win(Player::O)), (0.0, 1.0));
        assert_eq!(scheme.rewards_for(GameOutcome::Draw), (0.1, 0.5));
    }
}
