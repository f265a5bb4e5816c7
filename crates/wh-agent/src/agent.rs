//! A single transport robot.

use wh_core::{AgentId, Cell};
use wh_grid::Path;

use crate::{Battery, Role, Task};

/// One agent's full mutable state.
///
/// The agent exclusively owns its `path` and `wait` counter.  Shelves and
/// stations it refers to through `task` are shared resources gated by the
/// allocator's claim tables.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:  AgentId,
    /// Current cell.  Always in bounds.
    pub pos: Cell,
    pub battery: Battery,
    pub task: Task,
    /// Planned cells ahead of `pos`.  Abandoned whenever the task changes.
    pub path: Path,
    /// Ticks left to stand still after a failed path search.
    pub wait: u8,
}

impl Agent {
    pub fn new(id: AgentId, role: Role, pos: Cell, battery: Battery) -> Self {
        Self {
            id,
            pos,
            battery,
            task: Task::Work(role.initial_work()),
            path: Path::empty(),
            wait: 0,
        }
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.task.role()
    }

    /// `true` while a package is bound to this agent.
    #[inline]
    pub fn carrying(&self) -> bool {
        self.task.package().is_some()
    }

    #[inline]
    pub fn is_charging(&self) -> bool {
        self.task.is_charging()
    }

    /// Replace the task and drop any plan made for the old one.
    pub fn set_task(&mut self, task: impl Into<Task>) {
        self.task = task.into();
        self.path.clear();
    }
}
