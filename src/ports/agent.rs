//! Agent port - anything that can take a seat at the board
//!
//! Both the learning agent and the human-driven player implement this trait,
//! so the game orchestration never needs to know who is moving.

use crate::{
    Result,
    tictactoe::{BoardState, Player},
    types::{Position, StateKey},
};

/// A participant in a game of Tic-Tac-Toe.
///
/// The learning hooks (`record_visited`, `feed_reward`, `clear_trace`) have
/// no-op defaults so non-learning participants only implement move choice.
///
/// # Examples
///
/// ```
/// use tictactoe_td::{
///     Result,
///     ports::Agent,
///     tictactoe::{BoardState, Player},
///     types::Position,
/// };
///
/// /// Always plays the first free cell.
/// struct FirstFree;
///
/// impl Agent for FirstFree {
///     fn name(&self) -> &str {
///         "first-free"
///     }
///
///     fn choose_action(
///         &mut self,
///         positions: &[Position],
///         _board: &BoardState,
///         _mark: Player,
///     ) -> Result<Position> {
///         positions
///             .first()
///             .copied()
///             .ok_or(tictactoe_td::Error::NoValidMoves)
///     }
/// }
/// ```
pub trait Agent {
    /// Name used when announcing results.
    fn name(&self) -> &str;

    /// Pick one of `positions` for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when `positions` is empty or when
    /// their move source fails (e.g. closed input).
    fn choose_action(
        &mut self,
        positions: &[Position],
        board: &BoardState,
        mark: Player,
    ) -> Result<Position>;

    /// Remember the state reached right after this agent's move.
    fn record_visited(&mut self, _state: StateKey) {}

    /// Receive the terminal reward for the game that just ended.
    fn feed_reward(&mut self, _reward: f64) {}

    /// Forget the states visited in the current game.
    fn clear_trace(&mut self) {}
}
