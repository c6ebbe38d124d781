//! `ct-sim` — vehicle motion simulator for the campus digital twin.
//!
//! # Tick
//!
//! ```text
//! every tick_interval (default 3 s):
//!   ① Observer::on_tick_start
//!   ② for each vehicle in ascending id order:
//!        Δlat, Δlng ~ U[-max_offset, +max_offset]   (independent draws)
//!   ③ EntityStore::apply_vehicle_deltas — one write guard for the batch
//!   ④ Observer::on_tick_end
//! ```
//!
//! There is no velocity, boundary, or collision model: a vehicle's drift
//! after `N` ticks is bounded by `N × max_offset` per axis and nothing more.
//!
//! # Running
//!
//! [`MotionSimulator::step`] and [`MotionSimulator::run_ticks`] advance the
//! simulation synchronously (tests, tooling).  [`MotionSimulator::spawn`]
//! moves it onto a Tokio task and returns a [`SimHandle`] whose
//! [`stop`](SimHandle::stop) cancels the timer deterministically.  Missed
//! timer ticks are skipped, never queued, so a slow tick can't cause a burst
//! of catch-up ticks.
//!
//! ```rust,ignore
//! let store = Arc::new(EntityStoreBuilder::campus_seed().build()?);
//! let handle = SimBuilder::new(Arc::clone(&store)).seed(42).build()?
//!     .spawn(TracingObserver);
//! // …
//! let final_tick = handle.stop().await?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::{SimBuilder, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TracingObserver};
pub use sim::{MotionSimulator, SimHandle};
