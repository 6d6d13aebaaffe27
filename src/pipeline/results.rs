//! Aggregated results of training and evaluation runs

use std::{fs::File, io::BufWriter, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{GameOutcome, Player},
};

fn rate(count: usize, total: usize) -> f64 {
    if total > 0 {
        count as f64 / total as f64
    } else {
        0.0
    }
}

/// Result of a training batch, counted per mark
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl TrainingResult {
    pub fn new(x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let total_games = x_wins + o_wins + draws;
        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins, total_games),
            o_win_rate: rate(o_wins, total_games),
            draw_rate: rate(draws, total_games),
        }
    }

    /// Save result to a pretty JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create training summary {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}

/// Result of an evaluation run from the first agent's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
}

impl EvaluationResult {
    pub fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X) => self.wins += 1,
            GameOutcome::Win(Player::O) => self.losses += 1,
            GameOutcome::Draw => self.ties += 1,
        }
    }

    pub fn total_games(&self) -> usize {
        self.wins + self.ties + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        rate(self.wins, self.total_games())
    }

    pub fn tie_rate(&self) -> f64 {
        rate(self.ties, self.total_games())
    }

    pub fn loss_rate(&self) -> f64 {
        rate(self.losses, self.total_games())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_training_rates() {
        let result = TrainingResult::new(2, 1, 1);
        assert_eq!(result.total_games, 4);
        assert_eq!(result.x_win_rate, 0.5);
        assert_eq!(result.o_win_rate, 0.25);
        assert_eq!(result.draw_rate, 0.25);

        let empty = TrainingResult::new(0, 0, 0);
        assert_eq!(empty.draw_rate, 0.0);
    }

    #[test]
    fn test_evaluation_counts_first_agent_perspective() {
        let mut result = EvaluationResult::default();
        result.record(GameOutcome::Win(Player::X));
        result.record(GameOutcome::Win(Player::O));
        result.record(GameOutcome::Draw);
        result.record(GameOutcome::Draw);

        assert_eq!((result.wins, result.ties, result.losses), (1, 2, 1));
        assert_eq!(result.tie_rate(), 0.5);
    }

    #[test]
    fn test_save_training_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        TrainingResult::new(1, 0, 0).save(&path).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["x_wins"], 1);
        assert_eq!(parsed["total_games"], 1);
    }
}
