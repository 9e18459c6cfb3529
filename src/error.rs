use std::path::PathBuf;

use thiserror::Error;

/// Raised when removing or inspecting the front of an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the queue is empty")]
pub struct EmptyQueueError;

/// Raised when a neighbour outside the six hexagonal slots is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no neighbour exists at index {index}; hexagonal cells have neighbours 0..=5")]
pub struct InvalidNeighbourIndexError {
    pub index: usize,
}

/// Errors raised while loading a maze description.
#[derive(Debug, Error)]
pub enum MazeError {
    /// An unrecognized token was found in the maze text.
    #[error("unknown maze character '{character}' at row {row}, column {column}")]
    UnknownCharacter {
        character: char,
        row: usize,
        column: usize,
    },

    /// The maze description could not be located.
    #[error("maze file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The description contained no rows.
    #[error("maze description is empty")]
    Empty,

    /// The maze must contain exactly one start cell.
    #[error("maze has no start cell")]
    MissingStart,

    /// The maze must contain exactly one end cell.
    #[error("maze has no end cell")]
    MissingEnd,

    #[error("maze has more than one start cell")]
    DuplicateStart,

    #[error("maze has more than one end cell")]
    DuplicateEnd,

    /// Wrapper for IO errors other than a missing file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by the search driver. Both variants are terminal for the
/// current search run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The queue reported empty although the loop condition said otherwise.
    #[error("the queue was unexpectedly empty: {0}")]
    EmptyQueue(#[from] EmptyQueueError),

    #[error(transparent)]
    InvalidNeighbour(#[from] InvalidNeighbourIndexError),
}
