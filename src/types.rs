//! Newtype wrappers for board coordinates and state keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    col: usize,
}

/// Unchecked wire form, validated through [`Position::new`].
#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = crate::Error;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.col)
    }
}

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if either coordinate is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Position { row, col })
        } else {
            Err(crate::Error::InvalidPosition { row, col })
        }
    }

    /// Position for a row-major cell index (0-8).
    pub(crate) const fn from_index(index: usize) -> Self {
        Position {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index into the flattened board.
    pub fn index(&self) -> usize {
        self.row * 3 + self.col
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.index()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Canonical key of a board: the nine cells flattened row-major.
///
/// Two boards with identical cell contents always produce the same key,
/// regardless of the move order that led to them. The player to move is
/// not part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateKey(String);

impl StateKey {
    pub(crate) fn from_encoding(encoding: String) -> Self {
        debug_assert_eq!(encoding.chars().count(), 9);
        StateKey(encoding)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(2, 2).is_ok());
        assert!(Position::new(3, 0).is_err());
        assert!(Position::new(0, 3).is_err());
    }

    #[test]
    fn test_position_index_roundtrip() {
        for index in 0..9 {
            let pos = Position::from_index(index);
            assert_eq!(pos.index(), index);
            assert_eq!(Position::new(pos.row(), pos.col()).unwrap(), pos);
        }
    }

    #[test]
    fn test_position_display() {
        let pos = Position::new(1, 2).unwrap();
        assert_eq!(pos.to_string(), "(1, 2)");
    }

    #[test]
    fn test_position_deserialize_checks_bounds() {
        let pos: Position = serde_json::from_str(r#"{"row":2,"col":1}"#).unwrap();
        assert_eq!(pos, Position::new(2, 1).unwrap());
        assert!(serde_json::from_str::<Position>(r#"{"row":5,"col":0}"#).is_err());
        assert!(serde_json::from_str::<Position>(r#"{"row":0,"col":3}"#).is_err());
    }
}
