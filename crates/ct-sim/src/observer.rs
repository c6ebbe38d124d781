//! Simulator observer trait for tick logging and test instrumentation.

use ct_core::Tick;
use tracing::{debug, info};

/// Callbacks invoked around every simulator tick.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once the tick's deltas are committed to the store.
    ///
    /// `moved` is the number of vehicles perturbed this tick.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize) {}

    /// Called once after a spawned simulator has been stopped.
    fn on_stop(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Emits a `tracing` event for every tick.
pub struct TracingObserver;

impl SimObserver for TracingObserver {
    fn on_tick_end(&mut self, tick: Tick, moved: usize) {
        debug!(%tick, moved, "updated vehicle positions");
    }

    fn on_stop(&mut self, final_tick: Tick) {
        info!(%final_tick, "vehicle simulator stopped");
    }
}
