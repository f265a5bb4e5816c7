//! Per-tick counters.

use wh_core::Tick;

use crate::StepOutcome;

/// What happened during one tick, returned by [`Sim::advance`][crate::Sim::advance].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick: Tick,

    // ── Movement ──────────────────────────────────────────────────────────
    /// Agents that stepped to a neighbouring cell.
    pub moved:     usize,
    /// Agents counting down a wait after a failed search.
    pub waited:    usize,
    /// Stale next steps that forced a recomputation.
    pub replanned: usize,
    /// Path searches that found nothing and started a wait.
    pub blocked:   usize,

    // ── Work ──────────────────────────────────────────────────────────────
    /// Agents that found no shelf (or station) to claim this tick.
    pub unavailable: usize,
    pub restocked:   usize,
    pub delivered:   usize,
    pub marked:        usize,
    pub marked_urgent: usize,

    // ── Battery ───────────────────────────────────────────────────────────
    /// Agents sent to charge this tick.
    pub preempted: usize,
    /// Agents standing on a station and gaining charge.
    pub charging:  usize,
    /// Agents that reached full charge and resumed work.
    pub resumed:   usize,

    /// `true` on ticks where the pickup points were refilled.
    pub pickups_refilled: bool,
}

impl TickSummary {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }

    /// Count one movement attempt.
    pub fn record(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Moved     => self.moved += 1,
            StepOutcome::Waiting   => self.waited += 1,
            StepOutcome::Replanned => self.replanned += 1,
            StepOutcome::Blocked   => self.blocked += 1,
            StepOutcome::Held      => {}
        }
    }
}
