//! Human-driven move source.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use tracing::warn;

use crate::{
    Result,
    error::Error,
    ports::Agent,
    tictactoe::{BoardState, Player},
    types::Position,
};

/// A player whose moves are typed in as a row and a column.
///
/// Invalid input (not a number, off the board, or an occupied cell) is
/// answered with a re-prompt and never reaches the game.
#[derive(Debug)]
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// A human at the terminal.
    pub fn stdio(name: impl Into<String>) -> Self {
        Self::new(name, BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Give back the output sink, e.g. to inspect prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt until the answer names one of `positions`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the input is closed before a valid position
    /// was entered.
    pub fn read_position(&mut self, positions: &[Position]) -> Result<Position> {
        loop {
            let row = self.prompt("Input your action row:")?;
            let col = self.prompt("Input your action col:")?;

            let candidate = row
                .zip(col)
                .and_then(|(row, col)| Position::new(row, col).ok())
                .filter(|pos| positions.contains(pos));

            if let Some(pos) = candidate {
                return Ok(pos);
            }

            warn!(player = %self.name, "rejected move input");
            writeln!(self.output, "Invalid action. Try again.").map_err(write_error)?;
        }
    }

    /// Show `prompt` and read one line; `None` if it is not a number.
    fn prompt(&mut self, prompt: &str) -> Result<Option<usize>> {
        write!(self.output, "{prompt}")
            .and_then(|_| self.output.flush())
            .map_err(write_error)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(|source| Error::Io {
            operation: "read move input".to_string(),
            source,
        })?;
        if read == 0 {
            return Err(Error::Io {
                operation: "read move input".to_string(),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"),
            });
        }

        Ok(line.trim().parse().ok())
    }
}

fn write_error(source: io::Error) -> Error {
    Error::Io {
        operation: "write prompt".to_string(),
        source,
    }
}

impl<R: BufRead, W: Write> Agent for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(
        &mut self,
        positions: &[Position],
        _board: &BoardState,
        _mark: Player,
    ) -> Result<Position> {
        if positions.is_empty() {
            return Err(Error::NoValidMoves);
        }
        self.read_position(positions)
    }
}
