//! Shelf allocation: who may walk toward which shelf for what.
//!
//! Two independent claim tables guard the shelves:
//!
//! - `restock_claims`: Empty shelves a restocker is bringing a unit to.
//! - `pickup_claims` : Target shelves a deliverer is walking to.
//!
//! A shelf sits in a table only while it has the matching status, and the
//! claim is released on arrival.  Preemption for charging leaves claims in
//! place.

use tracing::debug;
use wh_core::{ShelfId, SimRng};

use crate::{AllocError, AllocResult, ClaimSet, ShelfStatus, ShelfTable};

/// A shelf flipped to Target by one marking pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MarkedShelf {
    pub shelf:  ShelfId,
    pub urgent: bool,
}

/// Shelf table plus both claim tables.
#[derive(Clone, Debug)]
pub struct Allocator {
    pub shelves:        ShelfTable,
    pub restock_claims: ClaimSet,
    pub pickup_claims:  ClaimSet,
}

impl Allocator {
    pub fn new(shelves: ShelfTable) -> Self {
        Self {
            shelves,
            restock_claims: ClaimSet::new(),
            pickup_claims:  ClaimSet::new(),
        }
    }

    // ── Restock ───────────────────────────────────────────────────────────

    /// Claim a uniformly chosen Empty shelf no restocker is heading to.
    pub fn claim_restock_target(&mut self, rng: &mut SimRng) -> AllocResult<ShelfId> {
        let candidates = self.shelves.ids_where(|id, s| {
            s == ShelfStatus::Empty && !self.restock_claims.contains(id)
        });
        let &shelf = rng
            .choose(&candidates)
            .ok_or(AllocError::NoCandidate("empty shelf"))?;
        self.restock_claims.claim(shelf);
        debug!(%shelf, candidates = candidates.len(), "restock target claimed");
        Ok(shelf)
    }

    /// Drop-off: mark `shelf` Full and release its restock claim.
    ///
    /// The claim is released even if the status change is refused.
    pub fn complete_restock(&mut self, shelf: ShelfId) -> AllocResult<()> {
        self.restock_claims.release(shelf);
        self.shelves.fill(shelf)
    }

    pub fn release_restock(&mut self, shelf: ShelfId) -> bool {
        self.restock_claims.release(shelf)
    }

    // ── Pickup ────────────────────────────────────────────────────────────

    /// Claim an unclaimed Target shelf, choosing among urgent targets when
    /// any exist and among normal targets otherwise.
    pub fn claim_pickup_target(&mut self, rng: &mut SimRng) -> AllocResult<ShelfId> {
        let open = |urgent_wanted: bool| {
            self.shelves.ids_where(|id, s| {
                s == ShelfStatus::Target { urgent: urgent_wanted } && !self.pickup_claims.contains(id)
            })
        };
        let urgent = open(true);
        let candidates = if urgent.is_empty() { open(false) } else { urgent };

        let &shelf = rng
            .choose(&candidates)
            .ok_or(AllocError::NoCandidate("target shelf"))?;
        self.pickup_claims.claim(shelf);
        debug!(
            %shelf,
            urgent = self.shelves.status(shelf).is_urgent(),
            "pickup target claimed"
        );
        Ok(shelf)
    }

    /// Pickup: mark `shelf` Empty and release its pickup claim.
    pub fn complete_pickup(&mut self, shelf: ShelfId) -> AllocResult<()> {
        self.pickup_claims.release(shelf);
        self.shelves.take(shelf)
    }

    pub fn release_pickup(&mut self, shelf: ShelfId) -> bool {
        self.pickup_claims.release(shelf)
    }

    // ── Marking ───────────────────────────────────────────────────────────

    /// Turn up to `batch` uniformly sampled Full shelves (not claimed for
    /// pickup) into Targets, rolling urgency per shelf with probability
    /// `urgent_probability`.
    pub fn mark_for_delivery(
        &mut self,
        rng:                &mut SimRng,
        batch:              usize,
        urgent_probability: f64,
    ) -> Vec<MarkedShelf> {
        let eligible = self.shelves.ids_where(|id, s| {
            s == ShelfStatus::Full && !self.pickup_claims.contains(id)
        });
        let picked = rng.sample(&eligible, batch);

        let mut marked = Vec::with_capacity(picked.len());
        for shelf in picked {
            let urgent = rng.gen_bool(urgent_probability);
            // Eligibility guarantees Full, so the transition is legal.
            if self.shelves.mark_target(shelf, urgent).is_ok() {
                marked.push(MarkedShelf { shelf, urgent });
            }
        }
        marked
    }
}
