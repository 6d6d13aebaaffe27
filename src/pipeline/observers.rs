//! Observers for training batches

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Result,
    ports::Observer,
    tictactoe::{GameOutcome, Player},
};

/// Progress bar observer - Shows training progress
#[derive(Default)]
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn tally(&self) -> String {
        format!("{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (X:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_observer_tally() {
        let mut observer = ProgressObserver::new();
        observer.on_game_end(1, GameOutcome::Win(Player::X)).unwrap();
        observer.on_game_end(2, GameOutcome::Draw).unwrap();
        observer.on_game_end(3, GameOutcome::Draw).unwrap();
        observer.on_training_end().unwrap();

        assert_eq!(observer.tally(), "1 O:0 D:2");
    }
}
