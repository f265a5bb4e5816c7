//! `wh-grid`: static warehouse layout and collision-aware pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`layout`]     | `CellKind`, `GridLayout`, `GridLayoutBuilder`             |
//! | [`occupancy`]  | `Occupancy`: per-request snapshot of agent positions     |
//! | [`pathfinder`] | `Pathfinder` trait, `PathRequest`, `Path`, `AStarPathfinder` |
//! | [`error`]      | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod layout;
pub mod occupancy;
pub mod pathfinder;


pub use error::{GridError, GridResult};
pub use layout::{CellKind, GridLayout, GridLayoutBuilder};
pub use occupancy::Occupancy;
pub use pathfinder::{AStarPathfinder, Path, PathRequest, Pathfinder, is_traversable};
