//! UCI protocol errors.

use skewer_core::FenError;

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// The FEN after `position fen` did not parse.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: FenError,
    },

    /// A move in `position ... moves` is not legal in the position reached so far.
    #[error("invalid move: {uci_move}")]
    InvalidMove { uci_move: String },

    /// `go depth` without a value.
    #[error("missing value for go depth")]
    MissingDepth,

    /// The value after `go depth` is not a positive integer.
    #[error("invalid depth: {value}")]
    InvalidDepth { value: String },

    /// Reading commands or writing replies failed.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
