//! Errors surfaced to callers of the engine.

use thiserror::Error;

use crate::constants::{MAX_SIZE, MIN_SIZE};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unacceptable size {size}, expected {MIN_SIZE}..={MAX_SIZE}")]
    InvalidSize { size: usize },

    #[error("diagram row {row} has {len} points, expected {size}")]
    RowLength { row: usize, len: usize, size: usize },

    #[error("illegal move: ({col}, {row}) is off the board")]
    OffBoard { col: usize, row: usize },

    #[error("illegal move: ({col}, {row}) is not empty")]
    Occupied { col: usize, row: usize },
}
