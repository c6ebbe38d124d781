//! Vehicle marker reconciliation.
//!
//! Each poll yields a full [`VehicleFeed`].  [`MarkerBindings::reconcile`]
//! aligns the surface with it:
//!
//! ```text
//!  bindings {v1, v2}      feed {v1, v3}
//!      v1 ── in feed ──► update_marker(same handle)
//!      v3 ── new     ──► add_marker, bind
//!      v2 ── missing ──► miss += 1; remove_marker once miss_limit is reached
//! ```

use rustc_hash::FxHashMap;

use ct_core::{Vehicle, VehicleId};

use crate::feed::VehicleFeed;
use crate::surface::{MapSurface, MarkerHandle, MarkerIcon, MarkerSpec};

/// Consecutive absent fetches after which a vehicle's marker is removed.
pub const DEFAULT_MISS_LIMIT: u32 = 1;

#[derive(Copy, Clone, Debug)]
struct Binding {
    handle: MarkerHandle,
    misses: u32,
}

/// Counts from one reconciliation pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub updated: usize,
    pub created: usize,
    pub retired: usize,
}

/// One marker per known vehicle id.
#[derive(Debug)]
pub struct MarkerBindings {
    bindings:   FxHashMap<VehicleId, Binding>,
    miss_limit: u32,
}

impl Default for MarkerBindings {
    fn default() -> Self {
        Self::new(DEFAULT_MISS_LIMIT)
    }
}

impl MarkerBindings {
    /// `miss_limit` is clamped to at least 1.
    pub fn new(miss_limit: u32) -> Self {
        Self { bindings: FxHashMap::default(), miss_limit: miss_limit.max(1) }
    }

    pub fn miss_limit(&self) -> u32 {
        self.miss_limit
    }

    pub fn handle(&self, id: &str) -> Option<MarkerHandle> {
        self.bindings.get(id).map(|b| b.handle)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound vehicle ids, sorted.
    pub fn ids(&self) -> Vec<VehicleId> {
        let mut ids: Vec<VehicleId> = self.bindings.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Bring `surface` in line with `feed`.
    pub fn reconcile<S>(&mut self, surface: &mut S, feed: &VehicleFeed) -> ReconcileReport
    where
        S: MapSurface + ?Sized,
    {
        let mut report = ReconcileReport::default();

        for (id, vehicle) in feed {
            match self.bindings.get_mut(id) {
                Some(binding) => {
                    surface.update_marker(binding.handle, vehicle.location);
                    binding.misses = 0;
                    report.updated += 1;
                }
                None => {
                    let handle = surface.add_marker(vehicle_marker(vehicle));
                    self.bindings.insert(id.clone(), Binding { handle, misses: 0 });
                    report.created += 1;
                }
            }
        }

        let limit = self.miss_limit;
        self.bindings.retain(|id, binding| {
            if feed.contains_key(id) {
                return true;
            }
            binding.misses += 1;
            if binding.misses < limit {
                return true;
            }
            surface.remove_marker(binding.handle);
            report.retired += 1;
            false
        });

        report
    }

    /// Remove every bound marker from `surface`.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: MapSurface + ?Sized,
    {
        for (_, binding) in self.bindings.drain() {
            surface.remove_marker(binding.handle);
        }
    }
}

fn vehicle_marker(vehicle: &Vehicle) -> MarkerSpec {
    MarkerSpec { position: vehicle.location, icon: MarkerIcon::Vehicle, popup: None }
}
