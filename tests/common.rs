//! Common test utilities shared by the integration tests.

#![allow(dead_code)]

use std::io;

use tictactoe_td::{
    Error, Result,
    adapters::ScriptedRandom,
    learning::{LearningAgent, LearningConfig},
    ports::Agent,
    tictactoe::{BoardState, Player},
    types::{Position, StateKey},
};

/// X cells of a three-move win on the main diagonal
pub const DIAGONAL_X: [usize; 3] = [0, 4, 8];
/// O replies that never block the main diagonal
pub const DIAGONAL_O: [usize; 2] = [1, 2];

/// X and O cells of a game that fills the board without a line
pub const DRAW_X: [usize; 5] = [0, 2, 3, 7, 8];
pub const DRAW_O: [usize; 4] = [1, 4, 6, 5];

pub fn position(cell: usize) -> Position {
    Position::new(cell / 3, cell % 3).unwrap()
}

/// Plays a fixed cycle of cells and records what the game feeds back.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    pub name: String,
    moves: Vec<usize>,
    next: usize,
    pub trace: Vec<StateKey>,
    pub rewards: Vec<f64>,
    /// Trace length observed at each reward
    pub trace_lengths: Vec<usize>,
}

impl ScriptedAgent {
    pub fn new(name: &str, moves: &[usize]) -> Self {
        Self {
            name: name.to_string(),
            moves: moves.to_vec(),
            ..Self::default()
        }
    }
}

impl Agent for ScriptedAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(
        &mut self,
        _positions: &[Position],
        _board: &BoardState,
        _mark: Player,
    ) -> Result<Position> {
        let cell = self.moves[self.next % self.moves.len()];
        self.next += 1;
        Ok(position(cell))
    }

    fn record_visited(&mut self, state: StateKey) {
        self.trace.push(state);
    }

    fn feed_reward(&mut self, reward: f64) {
        self.rewards.push(reward);
        self.trace_lengths.push(self.trace.len());
    }

    fn clear_trace(&mut self) {
        self.trace.clear();
    }
}

/// Plays the first free cell but fails on one chosen call, like a player
/// whose input closes mid-game.
#[derive(Debug, Default)]
pub struct FlakyAgent {
    fail_on_call: usize,
    calls: usize,
    pub trace: Vec<StateKey>,
    pub trace_lengths: Vec<usize>,
}

impl FlakyAgent {
    /// Fail on the `call`-th move request, counting from 1.
    pub fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: call,
            ..Self::default()
        }
    }
}

impl Agent for FlakyAgent {
    fn name(&self) -> &str {
        "flaky"
    }

    fn choose_action(
        &mut self,
        positions: &[Position],
        _board: &BoardState,
        _mark: Player,
    ) -> Result<Position> {
        self.calls += 1;
        if self.calls == self.fail_on_call {
            return Err(Error::Io {
                operation: "read move input".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }
        positions.first().copied().ok_or(Error::NoValidMoves)
    }

    fn record_visited(&mut self, state: StateKey) {
        self.trace.push(state);
    }

    fn feed_reward(&mut self, _reward: f64) {
        self.trace_lengths.push(self.trace.len());
    }

    fn clear_trace(&mut self) {
        self.trace.clear();
    }
}

/// Learning agent that never explores.
pub fn greedy_learner(name: &str) -> LearningAgent {
    LearningAgent::new(name, LearningConfig::default())
        .unwrap()
        .with_random_source(ScriptedRandom::new())
}
