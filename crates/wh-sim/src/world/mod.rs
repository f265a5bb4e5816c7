//! The `World` aggregate: every piece of mutable simulation state.
//!
//! Phase functions live in [`phases`] as `impl World` blocks and receive the
//! injected pieces (configuration, pathfinder, RNG) through a [`PhaseEnv`].
//! Nothing here is global.

mod audit;
mod movement;
pub(crate) mod phases;

use wh_agent::{AgentStore, PackageLedger};
use wh_alloc::{Allocator, PickupStock};
use wh_core::{SimRng, Tick};
use wh_grid::{GridLayout, Pathfinder};

use crate::{AgentView, PackageView, WarehouseConfig, WorldSnapshot};

pub use movement::StepOutcome;

/// Grid, agents, shelf allocation, pickup stock, packages in transit, and
/// the marking cooldown.
#[derive(Clone, Debug)]
pub struct World {
    pub grid:     GridLayout,
    pub agents:   AgentStore,
    pub alloc:    Allocator,
    pub pickups:  PickupStock,
    pub packages: PackageLedger,
    /// Ticks until the next marking pass.  The pass fires when this is 0.
    pub marking_cooldown: u32,
}

/// Collaborators a phase needs besides the world itself.
pub(crate) struct PhaseEnv<'a, P: Pathfinder> {
    pub config:     &'a WarehouseConfig,
    pub pathfinder: &'a P,
    pub rng:        &'a mut SimRng,
}

impl World {
    pub fn new(
        grid:     GridLayout,
        agents:   AgentStore,
        alloc:    Allocator,
        pickups:  PickupStock,
    ) -> Self {
        Self {
            grid,
            agents,
            alloc,
            pickups,
            packages:         PackageLedger::new(),
            marking_cooldown: 0,
        }
    }

    /// Copy out what a renderer needs to draw tick `tick`.
    pub fn snapshot(&self, tick: Tick) -> WorldSnapshot {
        WorldSnapshot {
            tick,
            agents: self
                .agents
                .iter()
                .map(|a| AgentView {
                    id:       a.id,
                    role:     a.role(),
                    pos:      a.pos,
                    battery:  a.battery.level(),
                    task:     a.task.label(),
                    carrying: a.carrying(),
                    charging: a.is_charging(),
                })
                .collect(),
            shelves: self.alloc.shelves.statuses().to_vec(),
            packages: self
                .packages
                .iter()
                .map(|p| PackageView { id: p.id, pos: p.pos, carrier: p.carrier })
                .collect(),
            pickup_stock: self.pickups.counts().to_vec(),
        }
    }
}
