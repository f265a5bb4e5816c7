//! Per-request snapshot of which cells hold an agent.

use wh_core::Cell;

use crate::GridLayout;

/// A dense occupied/free bitmap over the grid.
///
/// Built once per path request from the *other* agents' current positions;
/// the search never re-reads live positions, so a returned path can go stale
/// as agents move and must be re-validated step by step by the mover.
#[derive(Clone, Debug)]
pub struct Occupancy {
    width:    u32,
    height:   u32,
    occupied: Vec<bool>,
}

impl Occupancy {
    /// An occupancy map with no agents on it.
    pub fn empty(grid: &GridLayout) -> Self {
        Self {
            width:    grid.width,
            height:   grid.height,
            occupied: vec![false; grid.cell_count()],
        }
    }

    /// Mark every in-bounds cell in `positions`.  Out-of-bounds cells are
    /// ignored.
    pub fn from_positions<I>(grid: &GridLayout, positions: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut occ = Self::empty(grid);
        for cell in positions {
            occ.mark(cell);
        }
        occ
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    pub fn mark(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.occupied[i] = true;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        if let Some(i) = self.index(cell) {
            self.occupied[i] = false;
        }
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.index(cell).is_some_and(|i| self.occupied[i])
    }

    /// Number of occupied cells.
    pub fn count(&self) -> usize {
        self.occupied.iter().filter(|o| **o).count()
    }
}
