//! The recurring vehicle poll.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, warn};

use crate::feed::FeedSource;
use crate::reconcile::{DEFAULT_MISS_LIMIT, MarkerBindings, ReconcileReport};
use crate::surface::{MapSurface, SharedSurface, lock};
use crate::{ClientError, ClientResult};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3_000);

#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Time between vehicle fetches.
    pub interval:   Duration,
    /// See [`MarkerBindings::new`].
    pub miss_limit: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL, miss_limit: DEFAULT_MISS_LIMIT }
    }
}

/// What a stopped loop hands back.
#[derive(Debug)]
pub struct SyncSummary {
    pub polls:    u64,
    pub failures: u64,
    pub bindings: MarkerBindings,
}

/// Fetch-then-reconcile cycle over a shared surface.
pub struct SyncLoop<F: FeedSource, S: MapSurface> {
    feed:     Arc<F>,
    surface:  SharedSurface<S>,
    bindings: MarkerBindings,
    interval: Duration,
    polls:    u64,
    failures: u64,
}

impl<F: FeedSource, S: MapSurface> SyncLoop<F, S> {
    pub fn new(feed: Arc<F>, surface: SharedSurface<S>, config: &SyncConfig) -> Self {
        Self {
            feed,
            surface,
            bindings: MarkerBindings::new(config.miss_limit),
            interval: config.interval,
            polls: 0,
            failures: 0,
        }
    }

    pub fn bindings(&self) -> &MarkerBindings {
        &self.bindings
    }

    /// Fetch one snapshot and reconcile it.  On error the surface is left
    /// untouched, so it keeps showing the last known positions.
    pub async fn poll_once(&mut self) -> ClientResult<ReconcileReport> {
        self.polls += 1;
        let feed = match self.feed.fetch_vehicles().await {
            Ok(feed) => feed,
            Err(e) => {
                self.failures += 1;
                return Err(e);
            }
        };
        let mut surface = lock(&self.surface);
        Ok(self.bindings.reconcile(&mut *surface, &feed))
    }

    /// Move the loop onto a Tokio task polling every `interval`.
    ///
    /// The first poll happens one full interval after the call.  A poll
    /// runs to completion before the next tick is considered, and ticks that
    /// fall due meanwhile are skipped, so at most one fetch is in flight.
    /// Stopping drops an in-flight fetch before its result is applied.
    pub fn spawn(mut self) -> SyncHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut timer = interval(self.interval);
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            timer.tick().await;

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = timer.tick() => {}
                }

                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    result = self.poll_once() => match result {
                        Ok(report) => debug!(?report, "vehicle markers reconciled"),
                        Err(e) => warn!(error = %e, "vehicle poll failed"),
                    },
                }
            }

            SyncSummary { polls: self.polls, failures: self.failures, bindings: self.bindings }
        });

        SyncHandle { stop_tx, task }
    }
}

// ── SyncHandle ────────────────────────────────────────────────────────────────

/// Start/stop handle for a spawned [`SyncLoop`].
///
/// Dropping the handle also stops the task.
pub struct SyncHandle {
    stop_tx: oneshot::Sender<()>,
    task:    JoinHandle<SyncSummary>,
}

impl SyncHandle {
    /// Cancel the timer and any in-flight fetch, then wait for the task.
    pub async fn stop(self) -> ClientResult<SyncSummary> {
        let _ = self.stop_tx.send(());
        self.task.await.map_err(|e| ClientError::Task(e.to_string()))
    }
}
