//! warehouse: the reference 20×10 warehouse with four restockers and four
//! deliverers.
//!
//! ```text
//! cargo run -p warehouse -- [config.json] [output_dir]
//! ```
//!
//! Any `WarehouseConfig` field may be set in the JSON file; missing fields
//! keep their defaults.  Log verbosity follows `RUST_LOG` (default `info`;
//! `RUST_LOG=wh_sim=debug` shows every claim, pickup and charge).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wh_alloc::ShelfStatus;
use wh_core::Tick;
use wh_grid::{AStarPathfinder, GridLayout};
use wh_output::{CsvWriter, SimOutputObserver};
use wh_sim::{SimBuilder, SimObserver, TickSummary, WarehouseConfig, World};

#[cfg(test)]
mod tests;

const DEFAULT_OUTPUT_DIR: &str = "output/warehouse";
const PROGRESS_EVERY:     u64  = 100;

// ── Observer wrapper for totals and progress ─────────────────────────────────

struct ProgressObserver<O: SimObserver> {
    inner:     O,
    restocked: usize,
    delivered: usize,
    preempted: usize,
    replanned: usize,
}

impl<O: SimObserver> ProgressObserver<O> {
    fn new(inner: O) -> Self {
        Self { inner, restocked: 0, delivered: 0, preempted: 0, replanned: 0 }
    }
}

impl<O: SimObserver> SimObserver for ProgressObserver<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.restocked += summary.restocked;
        self.delivered += summary.delivered;
        self.preempted += summary.preempted;
        self.replanned += summary.replanned;
        if tick.0 > 0 && tick.is_multiple_of(PROGRESS_EVERY) {
            info!(
                %tick,
                restocked = self.restocked,
                delivered = self.delivered,
                "progress"
            );
        }
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        self.inner.on_snapshot(tick, world);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<WarehouseConfig> {
    let Some(path) = path else {
        return Ok(WarehouseConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: WarehouseConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args_os().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| DEFAULT_OUTPUT_DIR.into());

    // 1. Configuration and layout.
    let config = load_config(config_path.as_deref())?;
    let grid = GridLayout::reference_warehouse()?;
    info!(
        width = grid.width,
        height = grid.height,
        shelves = grid.shelves.len(),
        stations = grid.stations.len(),
        "reference warehouse"
    );

    // 2. Build sim.
    let mut sim = SimBuilder::new(config, grid, AStarPathfinder).build()?;

    // 3. Set up output.
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 4. Run.
    let t0 = Instant::now();
    let end = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 5. Summary.
    info!(
        ticks = end.0,
        secs = elapsed.as_secs_f64(),
        restocked = obs.restocked,
        delivered = obs.delivered,
        preempted = obs.preempted,
        replanned = obs.replanned,
        output = %output_dir.display(),
        "simulation complete"
    );

    let snap = sim.snapshot();
    println!("{:<6} {:<10} {:<10} {:<8} {:<18}", "Agent", "Role", "Cell", "Battery", "Task");
    println!("{}", "-".repeat(56));
    for a in &snap.agents {
        println!(
            "{:<6} {:<10} {:<10} {:<8} {:<18}",
            a.id.0,
            a.role.name(),
            a.pos.to_string(),
            a.battery,
            a.task,
        );
    }
    println!();
    println!(
        "Shelves: {} empty, {} full, {} targets",
        snap.count_shelves(ShelfStatus::Empty),
        snap.count_shelves(ShelfStatus::Full),
        snap.shelves.iter().filter(|s| s.is_target()).count(),
    );

    Ok(())
}
