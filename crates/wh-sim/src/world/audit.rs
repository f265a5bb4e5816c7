//! Consistency checks over the whole world.

use wh_agent::{Role, Work};
use wh_alloc::ShelfStatus;

use super::World;

impl World {
    /// Describe every broken cross-table invariant.  Empty when consistent.
    ///
    /// Checked: agent positions are in bounds, charging agents stand on
    /// their station, each claim belongs to exactly one agent of the right
    /// role and matches the shelf status, and the package ledger agrees with
    /// what agents say they carry.
    pub fn audit(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for a in self.agents.iter() {
            if !self.grid.in_bounds(a.pos) {
                problems.push(format!("agent {} out of bounds at {}", a.id, a.pos));
            }
            if let Some(station) = a.task.station() {
                if a.is_charging() && a.pos != self.grid.station_cell(station) {
                    problems.push(format!("agent {} charging away from station {station}", a.id));
                }
            }

            if let Some(shelf) = a.task.claimed_shelf() {
                let (claims, want) = match a.role() {
                    Role::Restocker => (&self.alloc.restock_claims, "restock"),
                    Role::Deliverer => (&self.alloc.pickup_claims, "pickup"),
                };
                if !claims.contains(shelf) {
                    problems.push(format!("agent {} heads to shelf {shelf} without a {want} claim", a.id));
                }
            }

            match a.task.package() {
                Some(pkg) => match self.packages.get(pkg) {
                    Some(p) if p.carrier == a.id => {}
                    Some(p) => problems.push(format!(
                        "package {pkg} held by agent {} but bound to agent {}",
                        a.id, p.carrier
                    )),
                    None => problems.push(format!("agent {} carries untracked package {pkg}", a.id)),
                },
                None => {
                    if let Some(p) = self.packages.carried_by(a.id) {
                        problems.push(format!("package {} bound to empty-handed agent {}", p.id, a.id));
                    }
                }
            }
        }

        for shelf in self.alloc.restock_claims.sorted() {
            if self.alloc.shelves.status(shelf) != ShelfStatus::Empty {
                problems.push(format!("restock claim on non-empty shelf {shelf}"));
            }
            let holders = self
                .agents
                .iter()
                .filter(|a| matches!(a.task.work(), Work::Restock(_)) && a.task.claimed_shelf() == Some(shelf))
                .count();
            if holders != 1 {
                problems.push(format!("restock claim on shelf {shelf} held by {holders} agents"));
            }
        }

        for shelf in self.alloc.pickup_claims.sorted() {
            if !self.alloc.shelves.status(shelf).is_target() {
                problems.push(format!("pickup claim on non-target shelf {shelf}"));
            }
            let holders = self
                .agents
                .iter()
                .filter(|a| matches!(a.task.work(), Work::Deliver(_)) && a.task.claimed_shelf() == Some(shelf))
                .count();
            if holders != 1 {
                problems.push(format!("pickup claim on shelf {shelf} held by {holders} agents"));
            }
        }

        let carrying = self.agents.iter().filter(|a| a.carrying()).count();
        if carrying != self.packages.len() {
            problems.push(format!(
                "{} packages tracked but {carrying} agents carrying",
                self.packages.len()
            ));
        }

        problems
    }
}
