use tracing::{debug, warn};
use wh_agent::{DeliverStep, Role, Task, Work};
use wh_core::{AgentId, DeliveryId};
use wh_grid::Pathfinder;

use crate::TickSummary;
use crate::world::{PhaseEnv, World};

impl World {
    /// Run the delivery state machine for every deliverer that is not
    /// charging.
    pub(crate) fn deliver_phase<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        summary: &mut TickSummary,
    ) {
        for id in self.agents.ids_with_role(Role::Deliverer) {
            let Task::Work(Work::Deliver(step)) = self.agents.get(id).task else {
                continue;
            };
            self.deliver_step(env, id, step, summary);
        }
    }

    fn deliver_step<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        id:      AgentId,
        step:    DeliverStep,
        summary: &mut TickSummary,
    ) {
        let step = match step {
            DeliverStep::Idle => match self.alloc.claim_pickup_target(env.rng) {
                Ok(shelf) => {
                    let step = DeliverStep::Pickup { shelf };
                    self.agents.get_mut(id).set_task(Work::Deliver(step));
                    let goal = self.grid.shelf_cell(shelf);
                    self.replan(env.pathfinder, id, goal);
                    step
                }
                Err(_) => {
                    summary.unavailable += 1;
                    return;
                }
            },
            other => other,
        };

        match step {
            DeliverStep::Idle => {}

            DeliverStep::Pickup { shelf } => {
                let here = self.grid.shelf_cell(shelf);
                if self.agents.get(id).pos != here {
                    let outcome = self.advance_toward(env.pathfinder, env.config.path_retry_wait, id, here);
                    summary.record(outcome);
                    return;
                }
                let deliveries: Vec<DeliveryId> = self.grid.delivery_ids().collect();
                let Some(&delivery) = env.rng.choose(&deliveries) else {
                    // Nowhere to take the unit; leave it on the shelf.
                    summary.unavailable += 1;
                    return;
                };
                if let Err(err) = self.alloc.complete_pickup(shelf) {
                    warn!(agent = %id, %err, "pickup rejected");
                }
                let package = self.packages.create(id, here);
                self.agents
                    .get_mut(id)
                    .set_task(Work::Deliver(DeliverStep::Deliver { delivery, package }));
                debug!(agent = %id, %shelf, %package, %delivery, "unit picked up");

                let goal = self.grid.delivery_cell(delivery);
                self.replan(env.pathfinder, id, goal);
            }

            DeliverStep::Deliver { delivery, package } => {
                let here = self.grid.delivery_cell(delivery);
                if self.agents.get(id).pos != here {
                    let outcome = self.advance_toward(env.pathfinder, env.config.path_retry_wait, id, here);
                    summary.record(outcome);
                    return;
                }
                self.packages.destroy(package);
                self.agents.get_mut(id).set_task(Work::Deliver(DeliverStep::Idle));
                summary.delivered += 1;
                debug!(agent = %id, %delivery, "unit delivered");
            }
        }
    }
}
