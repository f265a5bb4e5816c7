//! Battery level.

/// Battery charge in percent, always within `[0, 100]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battery(u8);

impl Battery {
    pub const FULL: Battery = Battery(100);
    pub const EMPTY: Battery = Battery(0);

    /// A battery at `level`, clamped to 100.
    pub fn new(level: u8) -> Self {
        Battery(level.min(100))
    }

    #[inline]
    pub fn level(self) -> u8 {
        self.0
    }

    /// Discharge by `amount`, flooring at 0.
    #[inline]
    pub fn drain(&mut self, amount: u8) {
        self.0 = self.0.saturating_sub(amount);
    }

    /// Charge by `amount`, capping at 100.  Returns `true` once full.
    #[inline]
    pub fn charge(&mut self, amount: u8) -> bool {
        self.0 = self.0.saturating_add(amount).min(100);
        self.is_full()
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.0 >= 100
    }

    /// `true` at or below `threshold`.
    #[inline]
    pub fn is_low(self, threshold: u8) -> bool {
        self.0 <= threshold
    }
}

impl Default for Battery {
    fn default() -> Self {
        Battery::FULL
    }
}
