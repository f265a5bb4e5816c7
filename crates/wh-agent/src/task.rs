//! Per-role task state machines as tagged variants.
//!
//! Every variant carries exactly the references that are valid in that
//! state: a restocker walking to a pickup point knows its claimed shelf and
//! chosen pickup point, a deliverer heading to a drop-off knows its package
//! and delivery point, and so on.  Nothing is nullable.
//!
//! Charging wraps the interrupted [`Work`] in [`ChargeState::resume`], so the
//! claims held by the interrupted work stay untouched while the agent is
//! away and resume exactly where they left off.

use wh_core::{DeliveryId, PackageId, PickupId, ShelfId, StationId};

// ── Role ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Carries units from pickup points to Empty shelves.
    Restocker,
    /// Carries units from Target shelves to delivery points.
    Deliverer,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Restocker => "restocker",
            Role::Deliverer => "deliverer",
        }
    }

    /// The task a freshly created agent of this role starts in.
    pub fn initial_work(self) -> Work {
        match self {
            Role::Restocker => Work::Restock(RestockStep::Unassigned),
            Role::Deliverer => Work::Deliver(DeliverStep::Idle),
        }
    }
}

// ── Restocker ─────────────────────────────────────────────────────────────────

/// Steps of the restocker's `restock` task.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestockStep {
    /// No target yet; an Empty shelf is selected on the next restock phase.
    Unassigned,
    /// Heading to `pickup` to collect a unit for the claimed `shelf`.
    ToPickup { shelf: ShelfId, pickup: PickupId },
    /// Carrying `package` to the claimed `shelf`.
    ToShelf { shelf: ShelfId, package: PackageId },
}

// ── Deliverer ─────────────────────────────────────────────────────────────────

/// States of the deliverer's task.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeliverStep {
    /// Waiting for a Target shelf to claim.
    Idle,
    /// Heading to the claimed Target `shelf`.
    Pickup { shelf: ShelfId },
    /// Carrying `package` to `delivery`.
    Deliver { delivery: DeliveryId, package: PackageId },
}

// ── Work ──────────────────────────────────────────────────────────────────────

/// Role-specific work, the part of a task that survives preemption.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Work {
    Restock(RestockStep),
    Deliver(DeliverStep),
}

impl Work {
    pub fn role(self) -> Role {
        match self {
            Work::Restock(_) => Role::Restocker,
            Work::Deliver(_) => Role::Deliverer,
        }
    }

    /// Shelf this work currently holds a claim on.
    pub fn claimed_shelf(self) -> Option<ShelfId> {
        match self {
            Work::Restock(RestockStep::ToPickup { shelf, .. })
            | Work::Restock(RestockStep::ToShelf { shelf, .. })
            | Work::Deliver(DeliverStep::Pickup { shelf }) => Some(shelf),
            _ => None,
        }
    }

    /// Package carried in this state.
    pub fn package(self) -> Option<PackageId> {
        match self {
            Work::Restock(RestockStep::ToShelf { package, .. })
            | Work::Deliver(DeliverStep::Deliver { package, .. }) => Some(package),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Work::Restock(RestockStep::Unassigned)     => "restock",
            Work::Restock(RestockStep::ToPickup { .. }) => "restock:to_pickup",
            Work::Restock(RestockStep::ToShelf { .. })  => "restock:to_shelf",
            Work::Deliver(DeliverStep::Idle)           => "idle",
            Work::Deliver(DeliverStep::Pickup { .. })  => "pickup",
            Work::Deliver(DeliverStep::Deliver { .. }) => "deliver",
        }
    }
}

// ── Task ──────────────────────────────────────────────────────────────────────

/// A preempted agent's charging state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargeState {
    /// Station the agent is heading to or charging at.
    pub station: StationId,
    /// Work to restore once the battery is full.
    pub resume: Work,
    /// `true` once the agent stands on `station` and is gaining charge.
    pub charging: bool,
}

/// What an agent is doing this tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Task {
    Work(Work),
    Charge(ChargeState),
}

impl Task {
    /// The work in progress, or the work that will resume after charging.
    pub fn work(self) -> Work {
        match self {
            Task::Work(w) => w,
            Task::Charge(c) => c.resume,
        }
    }

    pub fn role(self) -> Role {
        self.work().role()
    }

    /// Shelf claimed by this agent, including while charging.
    pub fn claimed_shelf(self) -> Option<ShelfId> {
        self.work().claimed_shelf()
    }

    pub fn package(self) -> Option<PackageId> {
        self.work().package()
    }

    pub fn is_charge(self) -> bool {
        matches!(self, Task::Charge(_))
    }

    /// `true` only while standing on the station and gaining charge.
    pub fn is_charging(self) -> bool {
        matches!(self, Task::Charge(ChargeState { charging: true, .. }))
    }

    pub fn station(self) -> Option<StationId> {
        match self {
            Task::Charge(c) => Some(c.station),
            Task::Work(_) => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Task::Work(w) => w.label(),
            Task::Charge(_) => "charge",
        }
    }
}

impl From<Work> for Task {
    fn from(work: Work) -> Self {
        Task::Work(work)
    }
}
