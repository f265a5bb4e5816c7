//! `AgentStore`: every agent, indexed by `AgentId`.

use wh_core::{AgentId, Cell};

use crate::{Agent, Role};

/// Owns all agents.  `agents[i].id == AgentId(i)` for every `i`.
///
/// Phases iterate agents in ascending ID order; an agent processed later in
/// a tick observes the already-updated positions of agents processed
/// earlier.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentStore {
    pub agents: Vec<Agent>,
}

impl AgentStore {
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> &Agent {
        &self.agents[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> &mut Agent {
        &mut self.agents[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.iter()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    /// IDs of agents whose (current or resumable) work belongs to `role`,
    /// ascending.
    pub fn ids_with_role(&self, role: Role) -> Vec<AgentId> {
        self.agents
            .iter()
            .filter(|a| a.role() == role)
            .map(|a| a.id)
            .collect()
    }

    /// Current positions of every agent except `id`.
    pub fn positions_except(&self, id: AgentId) -> impl Iterator<Item = Cell> + '_ {
        self.agents.iter().filter(move |a| a.id != id).map(|a| a.pos)
    }
}
