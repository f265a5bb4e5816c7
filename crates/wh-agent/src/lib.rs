//! `wh-agent`: agent storage for the warehouse fleet simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`task`]      | `Role`, `RestockStep`, `DeliverStep`, `Work`, `Task`, `ChargeState` |
//! | [`battery`]   | `Battery`: level clamped to `[0, 100]`                    |
//! | [`agent`]     | `Agent`: one transport robot                              |
//! | [`store`]     | `AgentStore`: all agents indexed by `AgentId`             |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction)                  |
//! | [`package`]   | `Package`, `PackageLedger`: units currently being carried |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod agent;
pub mod battery;
pub mod builder;
pub mod package;
pub mod store;
pub mod task;


pub use agent::Agent;
pub use battery::Battery;
pub use builder::AgentStoreBuilder;
pub use package::{Package, PackageLedger};
pub use store::AgentStore;
pub use task::{ChargeState, DeliverStep, RestockStep, Role, Task, Work};
