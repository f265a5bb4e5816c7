use tracing::debug;
use wh_agent::{ChargeState, Task};
use wh_alloc::select_station;
use wh_core::{AgentId, StationId};
use wh_grid::Pathfinder;

use crate::TickSummary;
use crate::world::{PhaseEnv, World};

impl World {
    /// Drain, preempt, travel to a station, charge, and resume, for every
    /// agent in ascending ID order.
    pub(crate) fn battery_phase<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        summary: &mut TickSummary,
    ) {
        let ids: Vec<AgentId> = self.agents.ids().collect();
        for id in ids {
            self.battery_step(env, id, summary);
        }
    }

    fn battery_step<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        id:      AgentId,
        summary: &mut TickSummary,
    ) {
        let cfg = env.config;
        let agent = self.agents.get_mut(id);
        if !agent.is_charging() {
            agent.battery.drain(cfg.drain_per_tick);
        }
        if agent.battery.is_low(cfg.low_battery_threshold) && !agent.task.is_charge() {
            self.preempt(env, id, summary);
        }

        let Task::Charge(mut charge) = self.agents.get(id).task else {
            return;
        };
        let station = self.grid.station_cell(charge.station);
        if self.agents.get(id).pos != station {
            let outcome = self.advance_toward(env.pathfinder, cfg.path_retry_wait, id, station);
            summary.record(outcome);
            return;
        }

        summary.charging += 1;
        let agent = self.agents.get_mut(id);
        charge.charging = true;
        if agent.battery.charge(cfg.charge_increment) {
            agent.set_task(charge.resume);
            summary.resumed += 1;
            debug!(agent = %id, task = charge.resume.label(), "fully charged, work resumed");
        } else {
            agent.task = Task::Charge(charge);
        }
    }

    /// Park the current work in the resume slot and head for a station.
    /// Claims held by the parked work stay untouched.
    fn preempt<P: Pathfinder>(
        &mut self,
        env:     &mut PhaseEnv<'_, P>,
        id:      AgentId,
        summary: &mut TickSummary,
    ) {
        let occupied: Vec<StationId> = self.agents.iter().filter_map(|a| a.task.station()).collect();
        let agent = self.agents.get_mut(id);
        let Some(station) = select_station(&self.grid.stations, &occupied, agent.pos) else {
            // No station at all: keep working and try again next tick.
            summary.unavailable += 1;
            return;
        };

        let resume = agent.task.work();
        agent.set_task(Task::Charge(ChargeState { station, resume, charging: false }));
        summary.preempted += 1;
        debug!(
            agent = %id,
            battery = agent.battery.level(),
            %station,
            parked = resume.label(),
            "low battery, heading to charge"
        );

        let goal = self.grid.station_cell(station);
        self.replan(env.pathfinder, id, goal);
    }
}
