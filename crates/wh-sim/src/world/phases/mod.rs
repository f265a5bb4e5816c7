//! One `impl World` block per tick phase.
//!
//! | Phase       | Runs for                       |
//! |-------------|--------------------------------|
//! | [`upkeep`]  | pickup refill, package sync    |
//! | [`battery`] | every agent                    |
//! | [`restock`] | restockers not charging        |
//! | [`marking`] | once per tick                  |
//! | [`deliver`] | deliverers not charging        |

mod battery;
mod deliver;
mod marking;
mod restock;
mod upkeep;
