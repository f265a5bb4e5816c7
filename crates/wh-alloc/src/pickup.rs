//! Pickup-point stock.

use wh_core::PickupId;

/// Unit count per pickup point plus the shared refill timer.
///
/// Pickup points are not claimed: any number of restockers may head for the
/// same point, and whoever arrives while a unit is present takes it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupStock {
    counts:   Vec<u8>,
    capacity: u8,
    /// Ticks between refills.
    interval: u32,
    timer:    u32,
}

impl PickupStock {
    /// `count` pickup points, each starting full.
    pub fn new(count: usize, capacity: u8, interval: u32) -> Self {
        Self {
            counts: vec![capacity; count],
            capacity,
            interval,
            timer: 0,
        }
    }

    #[inline]
    pub fn count(&self, pickup: PickupId) -> u8 {
        self.counts[pickup.index()]
    }

    pub fn set_count(&mut self, pickup: PickupId, units: u8) {
        self.counts[pickup.index()] = units.min(self.capacity);
    }

    /// Take one unit.  Returns `false` if the point is empty.
    pub fn take(&mut self, pickup: PickupId) -> bool {
        let slot = &mut self.counts[pickup.index()];
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }

    /// Advance the refill timer.  When it reaches the interval, every point
    /// below capacity gains one unit and the timer restarts.  Returns `true`
    /// on a refill tick.
    pub fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer < self.interval {
            return false;
        }
        for c in &mut self.counts {
            if *c < self.capacity {
                *c += 1;
            }
        }
        self.timer = 0;
        true
    }

    pub fn counts(&self) -> &[u8] {
        &self.counts
    }
}
