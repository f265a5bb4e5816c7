//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

use crate::Cell;

/// Errors raised by `wh-core` primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `wh-core`.
pub type CoreResult<T> = Result<T, CoreError>;
