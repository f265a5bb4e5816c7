//! Units in transit.
//!
//! A package exists only while an agent carries it: it is created when the
//! agent picks a unit up and destroyed when the agent drops it off.  Units
//! resting at pickup points or on shelves are counts, not packages.

use std::collections::BTreeMap;

use wh_core::{AgentId, Cell, PackageId};

use crate::AgentStore;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id:      PackageId,
    /// Mirrors the carrier's position after every tick.
    pub pos:     Cell,
    pub carrier: AgentId,
}

/// All packages currently being carried, keyed by ID.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageLedger {
    packages: BTreeMap<PackageId, Package>,
    next_id:  u64,
}

impl PackageLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a new package to `carrier` at `pos`.
    pub fn create(&mut self, carrier: AgentId, pos: Cell) -> PackageId {
        let id = PackageId(self.next_id);
        self.next_id += 1;
        self.packages.insert(id, Package { id, pos, carrier });
        id
    }

    /// Remove `id` from tracking.
    pub fn destroy(&mut self, id: PackageId) -> Option<Package> {
        self.packages.remove(&id)
    }

    pub fn get(&self, id: PackageId) -> Option<&Package> {
        self.packages.get(&id)
    }

    /// Move every package onto its carrier's current cell.
    pub fn sync_positions(&mut self, agents: &AgentStore) {
        for pkg in self.packages.values_mut() {
            pkg.pos = agents.get(pkg.carrier).pos;
        }
    }

    pub fn carried_by(&self, agent: AgentId) -> Option<&Package> {
        self.packages.values().find(|p| p.carrier == agent)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Package> + '_ {
        self.packages.values()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
