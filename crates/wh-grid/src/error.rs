//! Grid-subsystem error type.

use thiserror::Error;

use wh_core::{Cell, CoreError};

/// Errors produced by `wh-grid`.
#[derive(Debug, Error)]
pub enum GridError {
    /// The search exhausted every reachable cell without meeting the goal.
    #[error("no path from {from} to {to}")]
    PathNotFound { from: Cell, to: Cell },

    /// A foreign shelf was requested as a goal but none of its sides is a
    /// walkable in-bounds cell.
    #[error("shelf {0} has no accessible side")]
    NoAccessibleSide(Cell),

    #[error("grid dimensions must be non-zero (got {width}x{height})")]
    EmptyGrid { width: u32, height: u32 },

    #[error("cell {cell} is tagged twice ({first} and {second})")]
    Overlap {
        cell:   Cell,
        first:  &'static str,
        second: &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type GridResult<T> = Result<T, GridError>;
