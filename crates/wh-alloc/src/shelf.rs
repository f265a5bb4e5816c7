//! Shelf status table.
//!
//! # Lifecycle
//!
//! ```text
//!   Empty ──(restock drop-off)──▶ Full ──(marking)──▶ Target ──(pickup)──▶ Empty
//! ```
//!
//! Every other transition is rejected.  Urgency lives inside
//! `ShelfStatus::Target`, so a non-Target shelf can never be urgent.

use wh_core::ShelfId;

use crate::{AllocError, AllocResult};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShelfStatus {
    Empty,
    Full,
    /// Awaiting pickup by a deliverer.  `urgent` targets are served first.
    Target { urgent: bool },
}

impl ShelfStatus {
    pub fn name(self) -> &'static str {
        match self {
            ShelfStatus::Empty => "empty",
            ShelfStatus::Full => "full",
            ShelfStatus::Target { urgent: false } => "target",
            ShelfStatus::Target { urgent: true } => "urgent target",
        }
    }

    #[inline]
    pub fn is_urgent(self) -> bool {
        matches!(self, ShelfStatus::Target { urgent: true })
    }

    #[inline]
    pub fn is_target(self) -> bool {
        matches!(self, ShelfStatus::Target { .. })
    }

    /// `true` if `self → next` follows the shelf lifecycle.
    pub fn can_become(self, next: ShelfStatus) -> bool {
        matches!(
            (self, next),
            (ShelfStatus::Empty, ShelfStatus::Full)
                | (ShelfStatus::Full, ShelfStatus::Target { .. })
                | (ShelfStatus::Target { .. }, ShelfStatus::Empty)
        )
    }
}

/// Status of every shelf, indexed by `ShelfId`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShelfTable {
    statuses: Vec<ShelfStatus>,
}

impl ShelfTable {
    /// `count` shelves, all starting at `initial`.
    pub fn new(count: usize, initial: ShelfStatus) -> Self {
        Self { statuses: vec![initial; count] }
    }

    pub fn from_statuses(statuses: Vec<ShelfStatus>) -> Self {
        Self { statuses }
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    #[inline]
    pub fn status(&self, shelf: ShelfId) -> ShelfStatus {
        self.statuses[shelf.index()]
    }

    pub fn statuses(&self) -> &[ShelfStatus] {
        &self.statuses
    }

    /// Ascending IDs of shelves whose status satisfies `pred`.
    pub fn ids_where<F>(&self, mut pred: F) -> Vec<ShelfId>
    where
        F: FnMut(ShelfId, ShelfStatus) -> bool,
    {
        self.statuses
            .iter()
            .enumerate()
            .map(|(i, &s)| (ShelfId(i as u32), s))
            .filter(|&(id, s)| pred(id, s))
            .map(|(id, _)| id)
            .collect()
    }

    pub fn count_where<F>(&self, mut pred: F) -> usize
    where
        F: FnMut(ShelfStatus) -> bool,
    {
        self.statuses.iter().filter(|s| pred(**s)).count()
    }

    /// Apply `next` if the lifecycle allows it.
    pub fn transition(&mut self, shelf: ShelfId, next: ShelfStatus) -> AllocResult<()> {
        let current = self.status(shelf);
        if !current.can_become(next) {
            return Err(AllocError::IllegalTransition {
                shelf,
                from: current.name(),
                to:   next.name(),
            });
        }
        self.statuses[shelf.index()] = next;
        Ok(())
    }

    /// Empty → Full.
    pub fn fill(&mut self, shelf: ShelfId) -> AllocResult<()> {
        self.transition(shelf, ShelfStatus::Full)
    }

    /// Full → Target.
    pub fn mark_target(&mut self, shelf: ShelfId, urgent: bool) -> AllocResult<()> {
        self.transition(shelf, ShelfStatus::Target { urgent })
    }

    /// Target → Empty.
    pub fn take(&mut self, shelf: ShelfId) -> AllocResult<()> {
        self.transition(shelf, ShelfStatus::Empty)
    }
}
