//! Simulation parameters.

use crate::{SimError, SimResult};

/// Every tunable of a run.
///
/// `Default` reproduces the reference warehouse: four agents per role,
/// batteries starting between 50 and 100, charging at 20 or below, and three
/// shelves marked for delivery every 21 ticks.
///
/// Typically loaded from JSON by the application crate (enable the `serde`
/// feature) and passed to [`SimBuilder`][crate::SimBuilder].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WarehouseConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    pub restockers: usize,
    pub deliverers: usize,

    /// Inclusive range for generated starting batteries.
    pub initial_battery_min: u8,
    pub initial_battery_max: u8,

    /// Agents at or below this level are sent to charge.
    pub low_battery_threshold: u8,
    /// Battery lost per tick while not charging.
    pub drain_per_tick: u8,
    /// Battery gained per tick while charging.
    pub charge_increment: u8,

    /// Ticks the marking phase sleeps after each pass.
    pub marking_interval: u32,
    /// Upper bound on shelves marked per pass.
    pub marking_batch: usize,
    /// Chance that a freshly marked shelf is urgent.
    pub urgent_probability: f64,

    /// Ticks between pickup-point refills.
    pub pickup_regen_interval: u32,
    /// Units a pickup point holds when full.
    pub pickup_capacity: u8,

    /// Share of shelves that start Empty (rounded down).
    pub initial_empty_fraction: f64,

    /// Ticks an agent stands still after a failed path search.
    pub path_retry_wait: u8,

    /// Length of a [`Sim::run`][crate::Sim::run].
    pub total_ticks: u64,
    /// Call `SimObserver::on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            seed:                   42,
            restockers:             4,
            deliverers:             4,
            initial_battery_min:    50,
            initial_battery_max:    100,
            low_battery_threshold:  20,
            drain_per_tick:         1,
            charge_increment:       5,
            marking_interval:       20,
            marking_batch:          3,
            urgent_probability:     0.5,
            pickup_regen_interval:  10,
            pickup_capacity:        1,
            initial_empty_fraction: 0.3,
            path_retry_wait:        3,
            total_ticks:            1_000,
            output_interval_ticks:  1,
        }
    }
}

impl WarehouseConfig {
    /// Reject parameter combinations the phases cannot honour.
    pub fn validate(&self) -> SimResult<()> {
        let fail = |msg: String| Err(SimError::Config(msg));

        if self.initial_battery_min > self.initial_battery_max {
            return fail(format!(
                "initial battery range {}..={} is inverted",
                self.initial_battery_min, self.initial_battery_max
            ));
        }
        if self.initial_battery_max > 100 {
            return fail(format!("initial battery max {} exceeds 100", self.initial_battery_max));
        }
        if self.low_battery_threshold >= 100 {
            return fail(format!(
                "low battery threshold {} leaves no working range",
                self.low_battery_threshold
            ));
        }
        if self.charge_increment == 0 {
            return fail("charge increment must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.urgent_probability) {
            return fail(format!("urgent probability {} not in [0, 1]", self.urgent_probability));
        }
        if !(0.0..=1.0).contains(&self.initial_empty_fraction) {
            return fail(format!(
                "initial empty fraction {} not in [0, 1]",
                self.initial_empty_fraction
            ));
        }
        if self.pickup_capacity == 0 {
            return fail("pickup capacity must be at least 1".into());
        }
        if self.pickup_regen_interval == 0 {
            return fail("pickup regeneration interval must be at least 1".into());
        }
        Ok(())
    }
}
