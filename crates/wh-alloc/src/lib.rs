//! `wh-alloc`: resource allocation for the warehouse fleet simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`shelf`]     | `ShelfStatus`, `ShelfTable` with guarded transitions       |
//! | [`claims`]    | `ClaimSet`: one reservation table                         |
//! | [`allocator`] | `Allocator`: shelf table + restock/pickup claims + selection policy |
//! | [`pickup`]    | `PickupStock`: unit counts and regeneration timer         |
//! | [`stations`]  | `select_station`: charging-station choice                 |
//! | [`error`]     | `AllocError`, `AllocResult<T>`                             |
//!
//! # Selection policy
//!
//! Candidates are filtered by status and claim, then one is drawn uniformly
//! with the injected [`SimRng`](wh_core::SimRng).  There is no FIFO fairness;
//! an agent can lose every draw while candidates exist.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                 |
//! |-----------|--------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash` FxHash for claim tables.             |
//! | `serde`   | Derives `Serialize`/`Deserialize` on public types.     |

pub mod allocator;
pub mod claims;
pub mod error;
pub mod pickup;
pub mod shelf;
pub mod stations;

#[cfg(test)]
mod tests;

pub use allocator::{Allocator, MarkedShelf};
pub use claims::ClaimSet;
pub use error::{AllocError, AllocResult};
pub use pickup::PickupStock;
pub use shelf::{ShelfStatus, ShelfTable};
pub use stations::select_station;
