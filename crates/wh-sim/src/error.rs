use thiserror::Error;

use wh_core::{AgentId, Cell};
use wh_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("agent at store index {index} has id {agent}; ids must equal their index")]
    AgentIdMismatch { index: usize, agent: AgentId },

    #[error("agent {agent} starts outside the grid at {cell}")]
    AgentOutOfBounds { agent: AgentId, cell: Cell },

    #[error("layout error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
