//! `wh-sim`: tick scheduler for the warehouse fleet simulator.
//!
//! # Tick order
//!
//! ```text
//! every tick:
//!   ⓪ Upkeep    : advance the pickup refill timer.
//!   ① Battery   : every agent, ascending AgentId: drain, preempt into
//!                  `charge` at the low threshold, charge or travel to the
//!                  assigned station, resume work once full.
//!   ② Restock   : every restocker not charging: select → to_pickup →
//!                  to_shelf.
//!   ③ Marking   : on cooldown expiry, turn a few Full shelves into Targets.
//!   ④ Deliver   : every deliverer not charging: idle → pickup → deliver.
//!   ⑤ Packages  : move every package onto its carrier.
//! ```
//!
//! Phases run strictly one after another and agents inside a phase are
//! processed in ascending ID order.  An agent processed later in a tick sees
//! the positions earlier agents moved to in that same tick.
//!
//! Nothing in a tick is fatal.  Failed path searches turn into a short wait,
//! missing candidates into a retry on the next tick, and stale paths into an
//! immediate recomputation.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | FxHash claim tables (forwarded to `wh-alloc`).          |
//! | `serde`   | Serde derives on `WarehouseConfig` and snapshot types. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wh_grid::{AStarPathfinder, GridLayout};
//! use wh_sim::{NoopObserver, SimBuilder, WarehouseConfig};
//!
//! let grid = GridLayout::reference_warehouse()?;
//! let mut sim = SimBuilder::new(WarehouseConfig::default(), grid, AStarPathfinder)
//!     .build()?;
//! sim.run(&mut NoopObserver);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod sim;
pub mod snapshot;
pub mod summary;
pub mod world;


pub use builder::SimBuilder;
pub use config::WarehouseConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use snapshot::{AgentView, PackageView, WorldSnapshot};
pub use summary::TickSummary;
pub use world::{StepOutcome, World};
