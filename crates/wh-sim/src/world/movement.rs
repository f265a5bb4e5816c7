//! Path requests and the one-step movement routine.

use tracing::{debug, trace};
use wh_core::{AgentId, Cell};
use wh_grid::{GridResult, Occupancy, Path, PathRequest, Pathfinder, is_traversable};

use super::World;

/// Result of one [`World::advance_toward`] call.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Stepped onto the next cell of the path.
    Moved,
    /// Counting down the wait after a failed search.
    Waiting,
    /// The stored next step had become invalid; a new path was computed and
    /// the agent stays put this tick.
    Replanned,
    /// No path exists right now; the wait counter was set.
    Blocked,
    /// Already standing on the goal.
    Held,
}

impl World {
    /// Cell of the shelf `agent` has claimed, the only shelf it may enter.
    pub fn own_shelf_cell(&self, agent: AgentId) -> Option<Cell> {
        self.agents
            .get(agent)
            .task
            .claimed_shelf()
            .map(|shelf| self.grid.shelf_cell(shelf))
    }

    /// Search a path for `agent` to `goal`, treating every other agent's
    /// current position as an obstacle.
    pub fn find_path_for<P: Pathfinder>(
        &self,
        pathfinder: &P,
        agent:      AgentId,
        goal:       Cell,
    ) -> GridResult<Path> {
        let obstacles = Occupancy::from_positions(&self.grid, self.agents.positions_except(agent));
        let req = PathRequest {
            start:     self.agents.get(agent).pos,
            goal,
            own_shelf: self.own_shelf_cell(agent),
            obstacles: &obstacles,
        };
        pathfinder.find_path(&self.grid, &req)
    }

    /// Replace `agent`'s path with a fresh one toward `goal`.  A failed
    /// search leaves the path empty so the next move searches again.
    pub fn replan<P: Pathfinder>(&mut self, pathfinder: &P, agent: AgentId, goal: Cell) -> bool {
        let found = self.find_path_for(pathfinder, agent, goal);
        let a = self.agents.get_mut(agent);
        match found {
            Ok(path) => {
                a.path = path;
                true
            }
            Err(err) => {
                trace!(%agent, %err, "replan failed");
                a.path.clear();
                false
            }
        }
    }

    /// `true` if `agent` may step onto `cell` right now.
    pub fn step_is_valid(&self, agent: AgentId, cell: Cell) -> bool {
        let here = self.agents.get(agent).pos;
        if !here.is_adjacent(cell) {
            return false;
        }
        let obstacles = Occupancy::from_positions(&self.grid, self.agents.positions_except(agent));
        is_traversable(&self.grid, cell, &obstacles, self.own_shelf_cell(agent))
    }

    /// Move `agent` at most one cell toward `goal`.
    ///
    /// 1. A pending wait is counted down and the agent stays.
    /// 2. With a stored path, the next cell is re-validated against current
    ///    positions.  A valid step is taken; a stale one triggers a fresh
    ///    search and the agent stays this tick.
    /// 3. Without a path, one is searched and its first step taken at once.
    ///    If none exists the agent waits `retry_wait` ticks.
    pub fn advance_toward<P: Pathfinder>(
        &mut self,
        pathfinder: &P,
        retry_wait: u8,
        agent:      AgentId,
        goal:       Cell,
    ) -> StepOutcome {
        let a = self.agents.get_mut(agent);
        if a.wait > 0 {
            a.wait -= 1;
            return StepOutcome::Waiting;
        }

        if let Some(next) = a.path.peek() {
            if self.step_is_valid(agent, next) {
                let a = self.agents.get_mut(agent);
                a.path.pop();
                a.pos = next;
                return StepOutcome::Moved;
            }
            trace!(%agent, %next, "next step blocked, replanning");
            self.replan(pathfinder, agent, goal);
            return StepOutcome::Replanned;
        }

        let found = self.find_path_for(pathfinder, agent, goal);
        let a = self.agents.get_mut(agent);
        match found {
            Ok(mut path) => match path.pop() {
                Some(next) => {
                    a.pos = next;
                    a.path = path;
                    StepOutcome::Moved
                }
                None => StepOutcome::Held,
            },
            Err(err) => {
                debug!(%agent, %err, wait = retry_wait, "no path, waiting");
                a.wait = retry_wait;
                StepOutcome::Blocked
            }
        }
    }
}
