//! Allocation error type.

use thiserror::Error;

use wh_core::ShelfId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    /// No shelf or station satisfies the request right now.  The caller
    /// stays in its waiting state and retries on a later tick.
    #[error("no {0} available")]
    NoCandidate(&'static str),

    /// A status change outside `Empty → Full` and `Full → Target → Empty`.
    #[error("{shelf} cannot go from {from} to {to}")]
    IllegalTransition {
        shelf: ShelfId,
        from:  &'static str,
        to:    &'static str,
    },
}

pub type AllocResult<T> = Result<T, AllocError>;
