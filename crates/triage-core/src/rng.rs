//! The simulation's single seeded randomness source.
//!
//! Every random decision in a run (placement, injury draws, per-tick
//! activation order, treatment choice) is drawn from one `SimRng`, in a fixed
//! sequence.  Two models built from the same `TriageConfig` therefore produce
//! identical runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG.
///
/// Used only from the single-threaded tick loop.  There is deliberately no
/// per-agent RNG: activation order already serialises every draw.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
