//! A single reservation table.

use wh_core::ShelfId;

#[cfg(feature = "fx-hash")]
type Set = rustc_hash::FxHashSet<ShelfId>;
#[cfg(not(feature = "fx-hash"))]
type Set = std::collections::HashSet<ShelfId>;

/// Shelves currently reserved for one kind of work.  A shelf appears at most
/// once; claiming an already-claimed shelf is refused.
#[derive(Clone, Debug, Default)]
pub struct ClaimSet {
    inner: Set,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `shelf`.  Returns `false` if it was already reserved.
    pub fn claim(&mut self, shelf: ShelfId) -> bool {
        self.inner.insert(shelf)
    }

    /// Drop the reservation.  Returns `false` if there was none.
    pub fn release(&mut self, shelf: ShelfId) -> bool {
        self.inner.remove(&shelf)
    }

    #[inline]
    pub fn contains(&self, shelf: ShelfId) -> bool {
        self.inner.contains(&shelf)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Claimed shelves in ascending order.
    pub fn sorted(&self) -> Vec<ShelfId> {
        let mut v: Vec<ShelfId> = self.inner.iter().copied().collect();
        v.sort_unstable();
        v
    }
}
