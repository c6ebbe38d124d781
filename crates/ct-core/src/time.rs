//! Simulation tick counter.
//!
//! The simulator runs on a wall-clock interval, but everything that reasons
//! about "how many perturbations have happened" uses the integer `Tick`, which
//! keeps drift bounds and observer callbacks exact.

use std::fmt;

/// A monotonically increasing simulator tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
