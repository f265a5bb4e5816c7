use tracing::{debug, warn};
use wh_agent::{RestockStep, Role, Task, Work};
use wh_core::{AgentId, PickupId};
use wh_grid::Pathfinder;

use crate::TickSummary;
use crate::world::{PhaseEnv, World};

impl World {
    /// Run the restock state machine for every restocker that is not
    /// charging.
    pub(crate) fn restock_phase<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        summary: &mut TickSummary,
    ) {
        for id in self.agents.ids_with_role(Role::Restocker) {
            let Task::Work(Work::Restock(step)) = self.agents.get(id).task else {
                continue;
            };
            self.restock_step(env, id, step, summary);
        }
    }

    fn restock_step<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        id:      AgentId,
        step:    RestockStep,
        summary: &mut TickSummary,
    ) {
        let step = match step {
            RestockStep::Unassigned => match self.select_restock_target(env, id) {
                Some(step) => step,
                None => {
                    summary.unavailable += 1;
                    return;
                }
            },
            other => other,
        };

        match step {
            RestockStep::Unassigned => {}

            RestockStep::ToPickup { shelf, pickup } => {
                let here = self.grid.pickup_cell(pickup);
                if self.agents.get(id).pos != here {
                    let outcome = self.advance_toward(env.pathfinder, env.config.path_retry_wait, id, here);
                    summary.record(outcome);
                    return;
                }
                // An empty point is simply waited at until the next refill.
                if !self.pickups.take(pickup) {
                    return;
                }
                let package = self.packages.create(id, here);
                self.agents
                    .get_mut(id)
                    .set_task(Work::Restock(RestockStep::ToShelf { shelf, package }));
                debug!(agent = %id, %pickup, %package, %shelf, "unit collected");

                let goal = self.grid.shelf_cell(shelf);
                self.replan(env.pathfinder, id, goal);
            }

            RestockStep::ToShelf { shelf, package } => {
                let here = self.grid.shelf_cell(shelf);
                if self.agents.get(id).pos != here {
                    let outcome = self.advance_toward(env.pathfinder, env.config.path_retry_wait, id, here);
                    summary.record(outcome);
                    return;
                }
                if let Err(err) = self.alloc.complete_restock(shelf) {
                    warn!(agent = %id, %err, "restock drop-off rejected");
                }
                self.packages.destroy(package);
                self.agents
                    .get_mut(id)
                    .set_task(Work::Restock(RestockStep::Unassigned));
                summary.restocked += 1;
                debug!(agent = %id, %shelf, "shelf restocked");
            }
        }
    }

    /// Claim an Empty shelf and pick a pickup point to fetch a unit from.
    fn select_restock_target<P: Pathfinder>(
        &mut self,
        env: &mut PhaseEnv<'_, P>,
        id:  AgentId,
    ) -> Option<RestockStep> {
        let pickups: Vec<PickupId> = self.grid.pickup_ids().collect();
        if pickups.is_empty() {
            return None;
        }
        let shelf = self.alloc.claim_restock_target(env.rng).ok()?;
        let Some(&pickup) = env.rng.choose(&pickups) else {
            self.alloc.release_restock(shelf);
            return None;
        };

        let step = RestockStep::ToPickup { shelf, pickup };
        self.agents.get_mut(id).set_task(Work::Restock(step));
        let goal = self.grid.pickup_cell(pickup);
        self.replan(env.pathfinder, id, goal);
        Some(step)
    }
}
