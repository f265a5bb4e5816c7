use tracing::trace;

use crate::TickSummary;
use crate::world::World;

impl World {
    /// Advance the pickup refill timer.
    pub(crate) fn pickup_regen_phase(&mut self, summary: &mut TickSummary) {
        if self.pickups.tick() {
            summary.pickups_refilled = true;
            trace!(stock = ?self.pickups.counts(), "pickup points refilled");
        }
    }

    /// Move every package onto its carrier's cell.
    pub(crate) fn package_sync_phase(&mut self) {
        self.packages.sync_positions(&self.agents);
    }
}
