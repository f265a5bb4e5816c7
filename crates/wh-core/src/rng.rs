//! Deterministic simulation-level RNG wrapper.
//!
//! Every random decision in the simulator (shelf selection, pickup and
//! delivery point choice, urgency rolls, initial placement) draws from one
//! `SimRng`.  The tick phases run sequentially in a fixed order, so a single
//! stream seeded from the run's master seed makes whole runs reproducible.
//!
//! Selection helpers are uniform among the candidates they are given and make
//! no fairness guarantee: an agent that keeps losing draws may wait
//! indefinitely while candidates exist.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded random source injected into every phase that needs randomness.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. to give
    /// world generation its own stream without perturbing the tick stream.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a uniformly random element.  Returns `None` if `slice` is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }

    /// Sample up to `amount` distinct elements without replacement.
    ///
    /// Returns `min(amount, slice.len())` copies in random order.
    pub fn sample<T: Copy>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        slice.choose_multiple(&mut self.0, amount).copied().collect()
    }
}
