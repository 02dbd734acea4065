/*!
# Errors

All construction-time failures surface synchronously to the caller of the load
routine; nothing is logged or swallowed and there is no retry logic. The two
analysis algorithms have no error paths at all: given any loaded model they are
total functions.
*/

use thiserror::Error;

/// Errors raised while loading a graph from textual input.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The format tag is not one of the recognized values
    #[error("unknown graph format: {0:?}")]
    UnknownFormat(String),

    /// A line could not be tokenized into the expected shape.
    /// `line` is the 1-based line number in the input.
    #[error("line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },

    /// The underlying reader or writer failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand result type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;
