//! The `Sim` struct and its tick loop.

use wh_core::{SimClock, SimRng, Tick};
use wh_grid::{AStarPathfinder, Pathfinder};

use crate::world::PhaseEnv;
use crate::{SimObserver, TickSummary, WarehouseConfig, World, WorldSnapshot};

/// The main simulation runner.
///
/// `Sim<P>` owns the [`World`] plus the collaborators the phases draw on:
/// the configuration, the pathfinder and the single seeded RNG every random
/// choice goes through.  Two sims built from the same inputs and seed stay
/// identical tick for tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: Pathfinder = AStarPathfinder> {
    pub config: WarehouseConfig,

    /// Tracks the tick the next `advance` will process.
    pub clock: SimClock,

    /// All mutable simulation state.
    pub world: World,

    /// Drives shelf selection, pickup and delivery point choice, marking
    /// and urgency rolls.
    pub rng: SimRng,

    pub pathfinder: P,
}

impl<P: Pathfinder> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick until `config.total_ticks` ticks have been
    /// processed, returning the final tick.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> Tick {
        let end = Tick(self.config.total_ticks);
        while self.clock.current_tick < end {
            self.step_observed(observer);
        }
        observer.on_sim_end(self.clock.current_tick);
        self.clock.current_tick
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `total_ticks`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_observed(observer);
        }
    }

    /// Process one tick and return what happened in it.
    pub fn advance(&mut self) -> TickSummary {
        let now = self.clock.current_tick;
        let summary = self.process_tick(now);
        self.clock.advance();
        summary
    }

    /// The world as it stands after the last processed tick.
    pub fn snapshot(&self) -> WorldSnapshot {
        self.world.snapshot(self.clock.current_tick)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step_observed<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let summary = self.process_tick(now);
        observer.on_tick_end(now, &summary);
        if now.is_multiple_of(self.config.output_interval_ticks) {
            observer.on_snapshot(now, &self.world);
        }
        self.clock.advance();
    }

    fn process_tick(&mut self, now: Tick) -> TickSummary {
        let mut summary = TickSummary::new(now);

        // Explicit field borrows so the borrow checker sees disjoint access.
        let world = &mut self.world;
        let mut env = PhaseEnv {
            config:     &self.config,
            pathfinder: &self.pathfinder,
            rng:        &mut self.rng,
        };

        // ── Phase 0: pickup points refill on their own timer ──────────────
        world.pickup_regen_phase(&mut summary);

        // ── Phase 1: battery, for every agent ─────────────────────────────
        //
        // A low agent is parked here before its role phase runs.
        world.battery_phase(&mut env, &mut summary);

        // ── Phase 2: restockers ───────────────────────────────────────────
        world.restock_phase(&mut env, &mut summary);

        // ── Phase 3: shelf marking ────────────────────────────────────────
        //
        // A shelf marked here is claimable by deliverers in this same tick.
        world.marking_phase(&mut env, &mut summary);

        // ── Phase 4: deliverers ───────────────────────────────────────────
        world.deliver_phase(&mut env, &mut summary);

        // ── Phase 5: packages follow their carriers ───────────────────────
        world.package_sync_phase();

        summary
    }
}
