//! Plain data row types written by output backends.

use wh_sim::{AgentView, TickSummary};

/// One agent's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub role:     &'static str,
    pub x:        i32,
    pub y:        i32,
    pub battery:  u8,
    /// Task label, e.g. `"pickup"` or `"charge"`.
    pub task:     &'static str,
    pub carrying: bool,
}

impl AgentSnapshotRow {
    pub fn from_view(tick: u64, view: &AgentView) -> Self {
        Self {
            tick,
            agent_id: view.id.0,
            role:     view.role.name(),
            x:        view.pos.x,
            y:        view.pos.y,
            battery:  view.battery,
            task:     view.task,
            carrying: view.carrying,
        }
    }
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub moved:       u64,
    pub waited:      u64,
    pub replanned:   u64,
    pub blocked:     u64,
    pub unavailable: u64,
    pub restocked:   u64,
    pub delivered:   u64,
    pub marked:      u64,
    pub preempted:   u64,
    pub charging:    u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:        s.tick.0,
            moved:       s.moved as u64,
            waited:      s.waited as u64,
            replanned:   s.replanned as u64,
            blocked:     s.blocked as u64,
            unavailable: s.unavailable as u64,
            restocked:   s.restocked as u64,
            delivered:   s.delivered as u64,
            marked:      s.marked as u64,
            preempted:   s.preempted as u64,
            charging:    s.charging as u64,
        }
    }
}
