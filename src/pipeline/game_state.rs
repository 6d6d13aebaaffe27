//! Game orchestration between two agents
//!
//! [`GameState`] owns the board and both seats. It runs training games
//! (with trace recording and reward feedback), evaluation games (without),
//! and interactive games that render the board after every move.

use std::io::Write;

use tracing::{debug, info, warn};

use super::{
    results::{EvaluationResult, TrainingResult},
    rewards::RewardScheme,
};
use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{BoardState, GameOutcome, GameStatus, Player},
    types::Position,
};

/// Rounds between progress log lines of a training batch
pub const PROGRESS_INTERVAL: usize = 500;

/// Board, turn marker and two agents. The first agent plays X and moves first.
pub struct GameState<A: Agent, B: Agent> {
    board: BoardState,
    status: GameStatus,
    first: A,
    second: B,
    rewards: RewardScheme,
    observers: Vec<Box<dyn Observer>>,
}

impl<A: Agent, B: Agent> GameState<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            board: BoardState::new(),
            status: GameStatus::InProgress,
            first,
            second,
            rewards: RewardScheme::default(),
            observers: Vec::new(),
        }
    }

    pub fn with_rewards(mut self, rewards: RewardScheme) -> Self {
        self.rewards = rewards;
        self
    }

    /// Add an observer notified during training batches
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    pub fn first_mut(&mut self) -> &mut A {
        &mut self.first
    }

    pub fn second_mut(&mut self) -> &mut B {
        &mut self.second
    }

    pub fn into_agents(self) -> (A, B) {
        (self.first, self.second)
    }

    /// Mark that moves next
    pub fn current_mark(&self) -> Player {
        self.board.to_move
    }

    /// Empty cells in row-major order
    pub fn available_positions(&self) -> Vec<Position> {
        self.board.available_positions()
    }

    /// Place the current turn marker at `pos` and pass the turn.
    ///
    /// # Errors
    ///
    /// [`Error::GameOver`] once the game has been found terminal, and
    /// [`Error::InvalidMove`] if `pos` is occupied.
    pub fn apply_move(&mut self, pos: Position) -> Result<()> {
        if self.status.is_terminal() {
            return Err(Error::GameOver);
        }
        self.board.apply_move(pos, self.board.to_move)
    }

    /// Check the board for a finished game, marking the status terminal if so.
    pub fn check_outcome(&mut self) -> Option<GameOutcome> {
        let outcome = self.board.check_outcome();
        if let Some(outcome) = outcome {
            self.status = GameStatus::Terminal(outcome);
        }
        outcome
    }

    /// Feed the reward pair for `outcome` to both agents, then clear their
    /// traces and reset the board. Returns the pair that was fed.
    pub fn settle(&mut self, outcome: GameOutcome) -> (f64, f64) {
        let (first_reward, second_reward) = self.rewards.rewards_for(outcome);
        self.first.feed_reward(first_reward);
        self.second.feed_reward(second_reward);
        self.first.clear_trace();
        self.second.clear_trace();
        self.reset();
        (first_reward, second_reward)
    }

    /// Empty board, X to move, game in progress
    pub fn reset(&mut self) {
        self.board = BoardState::new();
        self.status = GameStatus::InProgress;
    }

    fn agent(&self, mark: Player) -> &dyn Agent {
        match mark {
            Player::X => &self.first,
            Player::O => &self.second,
        }
    }

    fn agent_mut(&mut self, mark: Player) -> &mut dyn Agent {
        match mark {
            Player::X => &mut self.first,
            Player::O => &mut self.second,
        }
    }

    /// Drop a game that cannot be finished: both traces and the board.
    fn abandon(&mut self) {
        self.first.clear_trace();
        self.second.clear_trace();
        self.reset();
    }

    /// Let the agent on move pick and play one position.
    ///
    /// A failed turn abandons the game, so the next one starts clean.
    fn take_turn(&mut self, record: bool) -> Result<Option<GameOutcome>> {
        let turn = self.try_turn(record);
        if let Err(err) = &turn {
            warn!(%err, "game abandoned");
            self.abandon();
        }
        turn
    }

    fn try_turn(&mut self, record: bool) -> Result<Option<GameOutcome>> {
        let mark = self.current_mark();
        let positions = self.available_positions();
        let board = self.board;

        let pos = self.agent_mut(mark).choose_action(&positions, &board, mark)?;
        self.apply_move(pos)?;

        if record {
            let key = self.board.state_key();
            self.agent_mut(mark).record_visited(key);
        }

        Ok(self.check_outcome())
    }

    /// Play one training game to the end and settle it.
    pub fn play_game(&mut self) -> Result<GameOutcome> {
        loop {
            if let Some(outcome) = self.take_turn(true)? {
                let (first_reward, second_reward) = self.settle(outcome);
                debug!(%outcome, first_reward, second_reward, "training game finished");
                return Ok(outcome);
            }
        }
    }

    /// Play `games` training games back to back.
    ///
    /// Value tables accumulate across the batch; only traces and the board
    /// are reset between games.
    pub fn play_training_batch(&mut self, games: usize) -> Result<TrainingResult> {
        for observer in &mut self.observers {
            observer.on_training_start(games)?;
        }

        let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);
        for round in 0..games {
            if round.is_multiple_of(PROGRESS_INTERVAL) {
                info!(round, x_wins, o_wins, draws, "Rounds {round}");
            }

            let outcome = self.play_game()?;
            match outcome {
                GameOutcome::Win(Player::X) => x_wins += 1,
                GameOutcome::Win(Player::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(round + 1, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::new(x_wins, o_wins, draws);
        info!(
            games = result.total_games,
            x_wins, o_wins, draws, "training batch complete"
        );
        Ok(result)
    }

    /// Play `games` games without recording traces or feeding rewards.
    pub fn evaluate(&mut self, games: usize) -> Result<EvaluationResult> {
        let mut result = EvaluationResult::default();
        for _ in 0..games {
            let outcome = loop {
                if let Some(outcome) = self.take_turn(false)? {
                    break outcome;
                }
            };
            result.record(outcome);
            self.reset();
        }

        info!(
            games,
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            "evaluation complete"
        );
        Ok(result)
    }

    /// Play one game, rendering the board to `out` after every move.
    ///
    /// No rewards are fed. The board is reset once the result is announced,
    /// or when the game is aborted by an error.
    pub fn play_interactive<W: Write>(&mut self, out: &mut W) -> Result<GameOutcome> {
        let played = self.run_interactive(out);
        if played.is_err() {
            self.abandon();
        }
        played
    }

    fn run_interactive<W: Write>(&mut self, out: &mut W) -> Result<GameOutcome> {
        loop {
            let outcome = self.take_turn(false)?;
            write!(out, "{}", self.board)?;

            if let Some(outcome) = outcome {
                match outcome {
                    GameOutcome::Win(mark) => {
                        writeln!(out, "{} wins!", self.agent(mark).name())?
                    }
                    GameOutcome::Draw => writeln!(out, "tie!")?,
                }
                out.flush()?;
                self.reset();
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::ScriptedRandom, learning::LearningAgent};

    fn greedy(name: &str) -> LearningAgent {
        LearningAgent::new(name, Default::default())
            .unwrap()
            .with_random_source(ScriptedRandom::new())
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_apply_move_rules() {
        let mut game = GameState::new(greedy("p1"), greedy("p2"));
        game.apply_move(pos(1, 1)).unwrap();
        assert_eq!(game.current_mark(), Player::O);
        assert!(matches!(
            game.apply_move(pos(1, 1)),
            Err(Error::InvalidMove { .. })
        ));
        assert_eq!(game.available_positions().len(), 8);
    }

    #[test]
    fn test_terminal_game_rejects_moves_until_reset() {
        let mut game = GameState::new(greedy("p1"), greedy("p2"));
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(pos(cell / 3, cell % 3)).unwrap();
        }
        assert_eq!(game.check_outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(game.status().is_terminal());
        assert!(matches!(game.apply_move(pos(2, 2)), Err(Error::GameOver)));

        game.reset();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_mark(), Player::X);
        game.apply_move(pos(2, 2)).unwrap();
    }

    #[test]
    fn test_untrained_greedy_game_takes_last_free_cells() {
        // Both sides take the last free cell: X 8, O 7, X 6, O 5, X 4, O 3, X 2
        let mut game = GameState::new(greedy("p1"), greedy("p2"));
        let mut out = Vec::new();
        let outcome = game.play_interactive(&mut out).unwrap();

        assert_eq!(outcome, GameOutcome::Win(Player::X));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("|   |   | X |"));
        assert!(text.contains("| O | X | O |"));
        assert!(text.contains("| X | O | X |"));
        assert!(text.ends_with("p1 wins!\n"));
    }
}
