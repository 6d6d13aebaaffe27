//! Game outcome and per-game status

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::Player;

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Win(player) => write!(f, "{player} wins"),
            GameOutcome::Draw => write!(f, "draw"),
        }
    }
}

/// Lifecycle of a single game.
///
/// A game moves from `InProgress` to `Terminal` exactly once; leaving the
/// terminal state requires an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Terminal(GameOutcome),
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            GameStatus::Terminal(outcome) => Some(*outcome),
            GameStatus::InProgress => None,
        }
    }
}
