//! Observer port - hooks into a training batch
//!
//! Observers let the CLI attach progress reporting without the game
//! orchestration depending on any terminal library.

use crate::{Result, tictactoe::GameOutcome};

/// Observer trait for monitoring training
///
/// The observer methods are called in the following order:
/// 1. `on_training_start(total_games)` - Once at the beginning
/// 2. `on_game_end(game_num, outcome)` - After each game, numbered from 1
/// 3. `on_training_end()` - Once at the end
///
/// # Examples
///
/// ```no_run
/// use tictactoe_td::{ports::Observer, tictactoe::GameOutcome};
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         _outcome: GameOutcome,
///     ) -> tictactoe_td::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called once before the first game of a batch.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each game once rewards have been fed back.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    /// Called once after the last game of a batch.
    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
