//! `wh-core`: foundational types for the warehouse fleet simulator.
//!
//! This crate is a dependency of every other `wh-*` crate.  It has no `wh-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `ShelfId`, `PickupId`, `DeliveryId`, `StationId`, `PackageId` |
//! | [`cell`]   | `Cell` grid coordinate, Manhattan distance, 4-neighbourhood |
//! | [`time`]   | `Tick`, `SimClock`                                          |
//! | [`rng`]    | `SimRng` (seeded, injectable random source)                 |
//! | [`error`]  | `CoreError`, `CoreResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, DeliveryId, PackageId, PickupId, ShelfId, StationId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
