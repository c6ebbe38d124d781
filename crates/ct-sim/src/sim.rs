//! The `MotionSimulator` and its spawned runner.

use std::sync::Arc;

use ct_core::{SimRng, Tick};
use ct_store::{EntityStore, VehicleDelta};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::warn;

use crate::{SimConfig, SimError, SimObserver, SimResult};

/// Random-walk perturbation of every vehicle in an [`EntityStore`].
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct MotionSimulator {
    pub(crate) config: SimConfig,
    pub(crate) store:  Arc<EntityStore>,
    pub(crate) rng:    SimRng,
    pub(crate) tick:   Tick,
}

impl MotionSimulator {
    // ── Public API ────────────────────────────────────────────────────────

    /// Number of ticks completed so far.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Perturb every vehicle once and advance the tick counter.
    ///
    /// Returns the number of vehicles moved.
    pub fn step(&mut self) -> SimResult<usize> {
        let max = self.config.max_offset_deg;
        let deltas: Vec<VehicleDelta> = self
            .store
            .vehicle_ids()
            .into_iter()
            .map(|id| VehicleDelta {
                id,
                d_lat: self.rng.symmetric(max),
                d_lng: self.rng.symmetric(max),
            })
            .collect();

        let moved = self.store.apply_vehicle_deltas(&deltas)?;
        self.tick = self.tick + 1;
        Ok(moved)
    }

    /// Run exactly `n` ticks back to back, without waiting on the timer.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let moved = self.step()?;
            observer.on_tick_end(now, moved);
        }
        Ok(())
    }

    /// Move the simulator onto a Tokio task ticking every
    /// `config.tick_interval`.
    ///
    /// The first tick fires one full interval after the call.  A failed tick
    /// is logged and the loop keeps going; only [`SimHandle::stop`] (or
    /// dropping the handle) ends it.
    pub fn spawn<O>(mut self, mut observer: O) -> SimHandle
    where
        O: SimObserver + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut timer = interval(self.config.tick_interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // `interval` completes its first tick immediately.
            timer.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = timer.tick() => {
                        let now = self.tick;
                        observer.on_tick_start(now);
                        match self.step() {
                            Ok(moved) => observer.on_tick_end(now, moved),
                            Err(e) => warn!(tick = %now, error = %e, "simulator tick failed"),
                        }
                    }
                }
            }

            observer.on_stop(self.tick);
            self.tick
        });

        SimHandle { stop_tx, task }
    }
}

// ── SimHandle ─────────────────────────────────────────────────────────────────

/// Start/stop handle for a spawned [`MotionSimulator`].
///
/// Dropping the handle also stops the task.
pub struct SimHandle {
    stop_tx: oneshot::Sender<()>,
    task:    JoinHandle<Tick>,
}

impl SimHandle {
    /// Cancel the timer and wait for the task to exit.
    ///
    /// Returns the number of ticks the simulator completed.
    pub async fn stop(self) -> SimResult<Tick> {
        // The task may already have exited; nothing to signal then.
        let _ = self.stop_tx.send(());
        self.task.await.map_err(|e| SimError::Task(e.to_string()))
    }
}
