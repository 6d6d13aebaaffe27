//! Error types for the tictactoe-td crate

use thiserror::Error;

/// Main error type for the tictactoe-td crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: String },

    #[error("position ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    InvalidPosition { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unsupported value table format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("no value table stored at {location}")]
    MissingValueTable { location: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
