//! Read-only view of the world after a tick, for renderers and writers.

use wh_agent::Role;
use wh_alloc::ShelfStatus;
use wh_core::{AgentId, Cell, PackageId, Tick};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AgentView {
    pub id:       AgentId,
    pub role:     Role,
    pub pos:      Cell,
    pub battery:  u8,
    /// Task label, e.g. `"restock:to_shelf"` or `"charge"`.
    pub task:     &'static str,
    pub carrying: bool,
    pub charging: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PackageView {
    pub id:      PackageId,
    pub pos:     Cell,
    pub carrier: AgentId,
}

/// Everything a renderer draws: agents, shelf colours, packages in transit
/// and pickup stock.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WorldSnapshot {
    pub tick:     Tick,
    pub agents:   Vec<AgentView>,
    /// Indexed by `ShelfId`.
    pub shelves:  Vec<ShelfStatus>,
    pub packages: Vec<PackageView>,
    /// Indexed by `PickupId`.
    pub pickup_stock: Vec<u8>,
}

impl WorldSnapshot {
    pub fn count_shelves(&self, status: ShelfStatus) -> usize {
        self.shelves.iter().filter(|&&s| s == status).count()
    }

    pub fn agent(&self, id: AgentId) -> Option<&AgentView> {
        self.agents.get(id.index())
    }
}
