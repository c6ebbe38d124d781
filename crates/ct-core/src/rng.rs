//! Seedable simulation RNG.
//!
//! The simulator draws every per-vehicle, per-axis offset from one `SimRng`
//! in ascending `VehicleId` order, so a fixed seed replays the exact same
//! vehicle trajectories.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only from the simulator task; it is `Send` but never shared.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy for non-reproducible runs.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Uniform offset in `[-bound, bound]`.  A zero bound yields `0.0`.
    #[inline]
    pub fn symmetric(&mut self, bound: f64) -> f64 {
        if bound <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-bound..=bound)
    }
}
