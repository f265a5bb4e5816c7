//! Fluent builder for constructing a [`Sim`].

use tracing::{info, warn};
use wh_agent::{Agent, AgentStore, Battery, Role};
use wh_alloc::{Allocator, PickupStock, ShelfStatus, ShelfTable};
use wh_core::{AgentId, PickupId, SimClock, SimRng};
use wh_grid::{GridLayout, Pathfinder};

use crate::{Sim, SimError, SimResult, WarehouseConfig, World};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`WarehouseConfig`]: agent counts, battery and marking parameters, seed
/// - [`GridLayout`]: e.g. [`GridLayout::reference_warehouse`]
/// - `P: Pathfinder`: the path search (e.g. [`wh_grid::AStarPathfinder`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                              |
/// |------------------------|------------------------------------------------------|
/// | `.agents(store)`       | `config.restockers` on random pickup points, `config.deliverers` on random delivery points, random batteries |
/// | `.shelf_statuses(v)`   | `floor(shelves × initial_empty_fraction)` random shelves Empty, the rest Full |
/// | `.pickup_stock(v)`     | Every pickup point at capacity                       |
///
/// Generated parts draw from a child stream of the seeded RNG, so overriding
/// one of them leaves the tick-time random sequence unchanged.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, GridLayout::reference_warehouse()?, AStarPathfinder)
///     .shelf_statuses(statuses)
///     .build()?;
/// sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder<P: Pathfinder> {
    config:     WarehouseConfig,
    grid:       GridLayout,
    pathfinder: P,
    agents:     Option<AgentStore>,
    shelves:    Option<Vec<ShelfStatus>>,
    stock:      Option<Vec<u8>>,
}

impl<P: Pathfinder> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: WarehouseConfig, grid: GridLayout, pathfinder: P) -> Self {
        Self {
            config,
            grid,
            pathfinder,
            agents:  None,
            shelves: None,
            stock:   None,
        }
    }

    /// Supply the agents instead of generating them.  Agent counts in the
    /// config are ignored.
    pub fn agents(mut self, agents: AgentStore) -> Self {
        self.agents = Some(agents);
        self
    }

    /// Supply the initial status of every shelf (length = shelf count).
    pub fn shelf_statuses(mut self, statuses: Vec<ShelfStatus>) -> Self {
        self.shelves = Some(statuses);
        self
    }

    /// Supply the initial unit count of every pickup point (length = pickup
    /// count).  Counts above capacity are capped.
    pub fn pickup_stock(mut self, stock: Vec<u8>) -> Self {
        self.stock = Some(stock);
        self
    }

    /// Validate inputs, generate whatever was not supplied, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let mut setup_rng = rng.child(0);

        // ── Shelves ───────────────────────────────────────────────────────
        let shelf_count = self.grid.shelves.len();
        let statuses = match self.shelves {
            Some(s) => {
                if s.len() != shelf_count {
                    return Err(SimError::LengthMismatch {
                        expected: shelf_count,
                        got:      s.len(),
                        what:     "shelf statuses",
                    });
                }
                s
            }
            None => initial_shelves(&self.grid, &self.config, &mut setup_rng),
        };

        // ── Agents ────────────────────────────────────────────────────────
        let agents = match self.agents {
            Some(store) => {
                for (index, a) in store.iter().enumerate() {
                    if a.id.index() != index {
                        return Err(SimError::AgentIdMismatch { index, agent: a.id });
                    }
                    if !self.grid.in_bounds(a.pos) {
                        return Err(SimError::AgentOutOfBounds { agent: a.id, cell: a.pos });
                    }
                }
                store
            }
            None => spawn_agents(&self.grid, &self.config, &mut setup_rng)?,
        };

        // ── Pickup stock ──────────────────────────────────────────────────
        let pickup_count = self.grid.pickups.len();
        let mut pickups = PickupStock::new(
            pickup_count,
            self.config.pickup_capacity,
            self.config.pickup_regen_interval,
        );
        if let Some(stock) = self.stock {
            if stock.len() != pickup_count {
                return Err(SimError::LengthMismatch {
                    expected: pickup_count,
                    got:      stock.len(),
                    what:     "pickup stock",
                });
            }
            for (i, units) in stock.into_iter().enumerate() {
                pickups.set_count(PickupId(i as u16), units);
            }
        }

        if self.grid.stations.is_empty() && !agents.is_empty() {
            warn!("layout has no charging stations; low agents will keep working");
        }
        info!(
            agents = agents.len(),
            shelves = shelf_count,
            empty = statuses.iter().filter(|&&s| s == ShelfStatus::Empty).count(),
            seed = self.config.seed,
            "warehouse initialised"
        );

        let alloc = Allocator::new(ShelfTable::from_statuses(statuses));
        let world = World::new(self.grid, agents, alloc, pickups);

        Ok(Sim {
            config:     self.config,
            clock:      SimClock::new(),
            world,
            rng,
            pathfinder: self.pathfinder,
        })
    }
}

/// `floor(shelves × initial_empty_fraction)` uniformly sampled shelves start
/// Empty, the rest Full.
fn initial_shelves(grid: &GridLayout, config: &WarehouseConfig, rng: &mut SimRng) -> Vec<ShelfStatus> {
    let count = grid.shelves.len();
    let empty = (count as f64 * config.initial_empty_fraction).floor() as usize;
    let mut statuses = vec![ShelfStatus::Full; count];
    let indices: Vec<usize> = (0..count).collect();
    for i in rng.sample(&indices, empty) {
        statuses[i] = ShelfStatus::Empty;
    }
    statuses
}

/// Restockers start on random pickup points and deliverers on random
/// delivery points, each with a battery drawn from the configured range.
fn spawn_agents(grid: &GridLayout, config: &WarehouseConfig, rng: &mut SimRng) -> SimResult<AgentStore> {
    let mut agents = Vec::with_capacity(config.restockers + config.deliverers);
    let roles = [
        (Role::Restocker, config.restockers, &grid.pickups, "pickup point"),
        (Role::Deliverer, config.deliverers, &grid.deliveries, "delivery point"),
    ];
    for (role, count, spawns, what) in roles {
        if count > 0 && spawns.is_empty() {
            return Err(SimError::Config(format!(
                "{count} {}s need at least one {what} to start on",
                role.name()
            )));
        }
        for _ in 0..count {
            let Some(&pos) = rng.choose(spawns) else { break };
            let level = rng.gen_range(config.initial_battery_min..=config.initial_battery_max);
            let id = AgentId(agents.len() as u32);
            agents.push(Agent::new(id, role, pos, Battery::new(level)));
        }
    }
    Ok(AgentStore { agents })
}
