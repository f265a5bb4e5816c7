//! Fluent builder for an [`AgentStore`].
//!
//! # Usage
//!
//! ```rust
//! use wh_agent::{AgentStoreBuilder, Battery, Role};
//! use wh_core::Cell;
//!
//! let store = AgentStoreBuilder::new()
//!     .agent(Role::Restocker, Cell::new(19, 2), Battery::new(80))
//!     .agent(Role::Deliverer, Cell::new(0, 5), Battery::FULL)
//!     .build();
//!
//! assert_eq!(store.len(), 2);
//! ```

use wh_core::{AgentId, Cell};

use crate::{Agent, AgentStore, Battery, Role};

/// Accumulates agents in ID order.  IDs are assigned by insertion position.
#[derive(Default)]
pub struct AgentStoreBuilder {
    agents: Vec<Agent>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one agent in its role's initial task.
    pub fn agent(mut self, role: Role, pos: Cell, battery: Battery) -> Self {
        let id = AgentId(self.agents.len() as u32);
        self.agents.push(Agent::new(id, role, pos, battery));
        self
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn build(self) -> AgentStore {
        AgentStore { agents: self.agents }
    }
}
