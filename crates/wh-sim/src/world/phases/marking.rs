use tracing::info;
use wh_grid::Pathfinder;

use crate::TickSummary;
use crate::world::{PhaseEnv, World};

impl World {
    /// Count the cooldown down; when it is spent, mark a batch of Full
    /// shelves for delivery and restart it, whether or not anything was
    /// eligible.
    pub(crate) fn marking_phase<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        summary: &mut TickSummary,
    ) {
        if self.marking_cooldown > 0 {
            self.marking_cooldown -= 1;
            return;
        }
        self.marking_cooldown = env.config.marking_interval;

        let marked = self
            .alloc
            .mark_for_delivery(env.rng, env.config.marking_batch, env.config.urgent_probability);
        if marked.is_empty() {
            return;
        }
        summary.marked = marked.len();
        summary.marked_urgent = marked.iter().filter(|m| m.urgent).count();
        info!(
            count = summary.marked,
            urgent = summary.marked_urgent,
            shelves = ?marked.iter().map(|m| m.shelf.index()).collect::<Vec<_>>(),
            "shelves marked for delivery"
        );
    }
}
