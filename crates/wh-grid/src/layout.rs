//! Static warehouse layout and its builder.
//!
//! # Data layout
//!
//! Cells are stored row-major: the cell `(x, y)` lives at index
//! `y * width + x` of `kinds`.  Shelves, pickup points, delivery points, and
//! charging stations are additionally kept as ordered cell lists; the typed
//! IDs from `wh-core` index into those lists.  A reverse table maps a cell
//! index to its `ShelfId` so shelf lookups on the pathfinding hot path are
//! O(1).
//!
//! The layout is immutable once built.

use wh_core::{Cell, CoreError, DeliveryId, PickupId, ShelfId, StationId};

use crate::{GridError, GridResult};

// ── CellKind ──────────────────────────────────────────────────────────────────

/// Static classification of a grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Free,
    Shelf,
    Pickup,
    Delivery,
    ChargingStation,
}

impl CellKind {
    pub fn name(self) -> &'static str {
        match self {
            CellKind::Free            => "free",
            CellKind::Shelf           => "shelf",
            CellKind::Pickup          => "pickup",
            CellKind::Delivery        => "delivery",
            CellKind::ChargingStation => "charging station",
        }
    }
}

// ── GridLayout ────────────────────────────────────────────────────────────────

/// Bounds plus the fixed sets of shelf, pickup, delivery, and charging cells.
///
/// Do not construct directly; use [`GridLayoutBuilder`] or
/// [`GridLayout::reference_warehouse`].
#[derive(Clone, Debug)]
pub struct GridLayout {
    pub width:  u32,
    pub height: u32,

    /// Row-major cell classification.  Length = `width * height`.
    kinds: Vec<CellKind>,

    /// Reverse index: cell index → shelf occupying it.
    shelf_at: Vec<Option<ShelfId>>,

    /// Shelf cells in `ShelfId` order.
    pub shelves: Vec<Cell>,
    /// Pickup cells in `PickupId` order.
    pub pickups: Vec<Cell>,
    /// Delivery cells in `DeliveryId` order.
    pub deliveries: Vec<Cell>,
    /// Charging-station cells in `StationId` order.
    pub stations: Vec<Cell>,
}

impl GridLayout {
    /// The 20×10 warehouse used by the demo: six shelf rows split by a
    /// two-column centre aisle, pickups on the east wall, deliveries on the
    /// west wall, and a charger in each corner aisle.
    pub fn reference_warehouse() -> GridResult<Self> {
        let mut b = GridLayoutBuilder::new(20, 10);
        for x in (2..18).filter(|x| *x != 9 && *x != 10) {
            for y in [1, 2, 4, 5, 7, 8] {
                b.add_shelf(Cell::new(x, y));
            }
        }
        for y in [2, 5, 8] {
            b.add_pickup(Cell::new(19, y));
            b.add_delivery(Cell::new(0, y));
        }
        for cell in [(1, 0), (1, 9), (18, 0), (18, 9)] {
            b.add_station(cell.into());
        }
        b.build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn cell_count(&self) -> usize {
        self.kinds.len()
    }

    /// `true` if `cell` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.width && (cell.y as u32) < self.height
    }

    /// Row-major index of `cell`, or `None` if out of bounds.
    #[inline]
    pub fn cell_index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Inverse of [`cell_index`](Self::cell_index).
    #[inline]
    pub fn cell_at(&self, index: usize) -> Cell {
        let w = self.width as usize;
        Cell::new((index % w) as i32, (index / w) as i32)
    }

    // ── Classification ────────────────────────────────────────────────────

    /// Classification of `cell`, or `None` if it lies outside the grid.
    #[inline]
    pub fn kind(&self, cell: Cell) -> Option<CellKind> {
        self.cell_index(cell).map(|i| self.kinds[i])
    }

    #[inline]
    pub fn is_shelf(&self, cell: Cell) -> bool {
        self.kind(cell) == Some(CellKind::Shelf)
    }

    /// The shelf occupying `cell`, if any.
    #[inline]
    pub fn shelf_at(&self, cell: Cell) -> Option<ShelfId> {
        self.cell_index(cell).and_then(|i| self.shelf_at[i])
    }

    // ── ID → cell ─────────────────────────────────────────────────────────

    #[inline]
    pub fn shelf_cell(&self, shelf: ShelfId) -> Cell {
        self.shelves[shelf.index()]
    }

    #[inline]
    pub fn pickup_cell(&self, pickup: PickupId) -> Cell {
        self.pickups[pickup.index()]
    }

    #[inline]
    pub fn delivery_cell(&self, delivery: DeliveryId) -> Cell {
        self.deliveries[delivery.index()]
    }

    #[inline]
    pub fn station_cell(&self, station: StationId) -> Cell {
        self.stations[station.index()]
    }

    // ── ID iteration ──────────────────────────────────────────────────────

    pub fn shelf_ids(&self) -> impl Iterator<Item = ShelfId> + '_ {
        (0..self.shelves.len() as u32).map(ShelfId)
    }

    pub fn pickup_ids(&self) -> impl Iterator<Item = PickupId> + '_ {
        (0..self.pickups.len() as u16).map(PickupId)
    }

    pub fn delivery_ids(&self) -> impl Iterator<Item = DeliveryId> + '_ {
        (0..self.deliveries.len() as u16).map(DeliveryId)
    }

    pub fn station_ids(&self) -> impl Iterator<Item = StationId> + '_ {
        (0..self.stations.len() as u16).map(StationId)
    }
}

// ── GridLayoutBuilder ─────────────────────────────────────────────────────────

/// Incremental builder for [`GridLayout`].
///
/// `add_*` calls hand out IDs in insertion order; bounds and overlap checks
/// are deferred to [`build`](Self::build).
pub struct GridLayoutBuilder {
    width:      u32,
    height:     u32,
    shelves:    Vec<Cell>,
    pickups:    Vec<Cell>,
    deliveries: Vec<Cell>,
    stations:   Vec<Cell>,
}

impl GridLayoutBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shelves:    Vec::new(),
            pickups:    Vec::new(),
            deliveries: Vec::new(),
            stations:   Vec::new(),
        }
    }

    pub fn add_shelf(&mut self, cell: Cell) -> ShelfId {
        self.shelves.push(cell);
        ShelfId(self.shelves.len() as u32 - 1)
    }

    pub fn add_pickup(&mut self, cell: Cell) -> PickupId {
        self.pickups.push(cell);
        PickupId(self.pickups.len() as u16 - 1)
    }

    pub fn add_delivery(&mut self, cell: Cell) -> DeliveryId {
        self.deliveries.push(cell);
        DeliveryId(self.deliveries.len() as u16 - 1)
    }

    pub fn add_station(&mut self, cell: Cell) -> StationId {
        self.stations.push(cell);
        StationId(self.stations.len() as u16 - 1)
    }

    /// Validate every tagged cell and produce the immutable layout.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if either dimension is zero.
    /// - [`GridError::Core`] wrapping `OutOfBounds` for a cell off the grid.
    /// - [`GridError::Overlap`] if one cell is tagged twice.
    pub fn build(self) -> GridResult<GridLayout> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid { width: self.width, height: self.height });
        }

        let n = self.width as usize * self.height as usize;
        let mut layout = GridLayout {
            width:      self.width,
            height:     self.height,
            kinds:      vec![CellKind::Free; n],
            shelf_at:   vec![None; n],
            shelves:    Vec::new(),
            pickups:    Vec::new(),
            deliveries: Vec::new(),
            stations:   Vec::new(),
        };

        let tagged = [
            (CellKind::Shelf, &self.shelves),
            (CellKind::Pickup, &self.pickups),
            (CellKind::Delivery, &self.deliveries),
            (CellKind::ChargingStation, &self.stations),
        ];
        for (kind, cells) in tagged {
            for &cell in cells {
                let Some(i) = layout.cell_index(cell) else {
                    return Err(CoreError::OutOfBounds {
                        cell,
                        width:  self.width,
                        height: self.height,
                    }
                    .into());
                };
                if layout.kinds[i] != CellKind::Free {
                    return Err(GridError::Overlap {
                        cell,
                        first:  layout.kinds[i].name(),
                        second: kind.name(),
                    });
                }
                layout.kinds[i] = kind;
            }
        }

        for (s, &cell) in self.shelves.iter().enumerate() {
            if let Some(i) = layout.cell_index(cell) {
                layout.shelf_at[i] = Some(ShelfId(s as u32));
            }
        }

        layout.shelves    = self.shelves;
        layout.pickups    = self.pickups;
        layout.deliveries = self.deliveries;
        layout.stations   = self.stations;
        Ok(layout)
    }
}
