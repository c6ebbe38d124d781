//! Fluent builder for constructing a [`MotionSimulator`].

use std::sync::Arc;
use std::time::Duration;

use ct_core::{SimRng, Tick};
use ct_store::EntityStore;

use crate::{MotionSimulator, SimError, SimResult};

/// Reference tick interval.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(3_000);

/// Reference per-axis perturbation bound, in degrees.
pub const DEFAULT_MAX_OFFSET_DEG: f64 = 0.000_05;

/// Simulator tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Wall-clock period between ticks of a spawned simulator.
    pub tick_interval: Duration,

    /// Upper bound of `|Δlat|` and `|Δlng|` per tick.
    pub max_offset_deg: f64,

    /// RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_interval:  DEFAULT_TICK_INTERVAL,
            max_offset_deg: DEFAULT_MAX_OFFSET_DEG,
            seed:           None,
        }
    }
}

/// Fluent builder for [`MotionSimulator`].
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(store)
///     .tick_interval(Duration::from_secs(1))
///     .seed(7)
///     .build()?;
/// ```
pub struct SimBuilder {
    store:  Arc<EntityStore>,
    config: SimConfig,
}

impl SimBuilder {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store, config: SimConfig::default() }
    }

    /// Replace the whole configuration at once.
    pub fn config(mut self, config: SimConfig) -> Self {
        self.config = config;
        self
    }

    pub fn tick_interval(mut self, interval: Duration) -> Self {
        self.config.tick_interval = interval;
        self
    }

    pub fn max_offset_deg(mut self, max_offset_deg: f64) -> Self {
        self.config.max_offset_deg = max_offset_deg;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate the configuration and return a simulator at [`Tick::ZERO`].
    pub fn build(self) -> SimResult<MotionSimulator> {
        if self.config.tick_interval.is_zero() {
            return Err(SimError::Config("tick interval must be non-zero".into()));
        }
        let max = self.config.max_offset_deg;
        if !max.is_finite() || max < 0.0 {
            return Err(SimError::Config(format!(
                "max offset must be a finite, non-negative number of degrees, got {max}"
            )));
        }

        let rng = match self.config.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };

        Ok(MotionSimulator {
            config: self.config,
            store:  self.store,
            rng,
            tick:   Tick::ZERO,
        })
    }
}
