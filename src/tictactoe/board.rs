//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::GameOutcome, lines::LineAnalyzer};
use crate::types::{Position, StateKey};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Character used in state keys
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Glyph used when rendering the board for humans
    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player (mark) in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Complete board state including cells and whose turn it is
///
/// `to_move` is the turn marker: it starts at X and flips after every
/// placed mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; 9],
    pub to_move: Player,
}

impl BoardState {
    /// Create a new empty board with X to move
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
            to_move: Player::X,
        }
    }

    /// Get cell at a position
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// All empty positions in row-major order
    pub fn available_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Position::from_index(i))
            .collect()
    }

    /// Write `mark` into an empty cell and flip the turn marker.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is already occupied;
    /// the board is left unchanged.
    pub fn apply_move(&mut self, pos: Position, mark: Player) -> Result<(), crate::Error> {
        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove {
                position: pos.to_string(),
            });
        }

        self.cells[pos.index()] = mark.to_cell();
        self.to_move = mark.opponent();
        Ok(())
    }

    /// The board that would result from placing `mark` at `pos`.
    #[must_use = "with_mark returns a new board state; the original is unchanged"]
    pub fn with_mark(&self, pos: Position, mark: Player) -> Result<BoardState, crate::Error> {
        let mut next = *self;
        next.apply_move(pos, mark)?;
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Inspect all eight lines and report the outcome.
    ///
    /// Returns `None` while the game is undecided. A draw is declared only
    /// when no line is complete and no empty cell remains.
    pub fn check_outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.check_outcome().is_some()
    }

    /// Canonical key of the cell contents, flattened row-major.
    pub fn state_key(&self) -> StateKey {
        StateKey::from_encoding(self.cells.iter().map(|&c| c.to_char()).collect())
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

const ROW_SEPARATOR: &str = "----+---+----";

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(3) {
            writeln!(f, "{ROW_SEPARATOR}")?;
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell.glyph())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{ROW_SEPARATOR}")
    }
}
