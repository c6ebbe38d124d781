//! The `EntityStore` — buildings, vehicles, and atomic position updates.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ct_core::{Building, GeoPoint, Vehicle, VehicleId};

use crate::{StoreError, StoreResult};

/// A point-in-time copy of every vehicle, keyed and ordered by id.
///
/// This is exactly the `mapping<id, Vehicle>` served by `GET /api/vehicles`.
pub type VehicleSnapshot = BTreeMap<VehicleId, Vehicle>;

/// One position perturbation for one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleDelta {
    pub id:    VehicleId,
    pub d_lat: f64,
    pub d_lng: f64,
}

/// Owns all building and vehicle records.
///
/// Buildings are immutable after construction.  Vehicles are mutated only
/// through [`apply_vehicle_delta`](Self::apply_vehicle_delta) and
/// [`apply_vehicle_deltas`](Self::apply_vehicle_deltas); readers only ever
/// receive owned snapshots, never references into the locked map.
pub struct EntityStore {
    buildings: Vec<Building>,
    vehicles:  RwLock<VehicleSnapshot>,
}

impl EntityStore {
    pub(crate) fn new(buildings: Vec<Building>, vehicles: VehicleSnapshot) -> Self {
        Self { buildings, vehicles: RwLock::new(vehicles) }
    }

    // ── Buildings ─────────────────────────────────────────────────────────

    /// All buildings in seed order.
    #[inline]
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id.as_str() == id)
    }

    // ── Vehicles ──────────────────────────────────────────────────────────

    /// Consistent copy of every vehicle.
    pub fn vehicles(&self) -> VehicleSnapshot {
        self.read_vehicles().clone()
    }

    pub fn vehicle(&self, id: &str) -> Option<Vehicle> {
        self.read_vehicles().get(id).cloned()
    }

    /// Vehicle ids in ascending order.
    pub fn vehicle_ids(&self) -> Vec<VehicleId> {
        self.read_vehicles().keys().cloned().collect()
    }

    pub fn vehicle_count(&self) -> usize {
        self.read_vehicles().len()
    }

    /// Shift one vehicle by `(d_lat, d_lng)` degrees and return its new
    /// location.
    ///
    /// # Errors
    ///
    /// [`StoreError::VehicleNotFound`] if `id` is not tracked; the store is
    /// left untouched.
    pub fn apply_vehicle_delta(&self, id: &str, d_lat: f64, d_lng: f64) -> StoreResult<GeoPoint> {
        let mut vehicles = self.write_vehicles();
        let vehicle = vehicles
            .get_mut(id)
            .ok_or_else(|| StoreError::VehicleNotFound(VehicleId::new(id)))?;
        vehicle.location = vehicle.location.offset(d_lat, d_lng);
        Ok(vehicle.location)
    }

    /// Apply a batch of deltas under a single write guard.
    ///
    /// All ids are checked before anything is written, so an unknown id
    /// rejects the whole batch.  Returns the number of vehicles moved.
    pub fn apply_vehicle_deltas(&self, deltas: &[VehicleDelta]) -> StoreResult<usize> {
        let mut vehicles = self.write_vehicles();
        if let Some(missing) = deltas.iter().find(|d| !vehicles.contains_key(&d.id)) {
            return Err(StoreError::VehicleNotFound(missing.id.clone()));
        }
        for delta in deltas {
            if let Some(vehicle) = vehicles.get_mut(&delta.id) {
                vehicle.location = vehicle.location.offset(delta.d_lat, delta.d_lng);
            }
        }
        Ok(deltas.len())
    }

    // ── Lock helpers ──────────────────────────────────────────────────────

    // Writers never leave a half-updated record behind, so a poisoned lock
    // still guards consistent data.
    fn read_vehicles(&self) -> RwLockReadGuard<'_, VehicleSnapshot> {
        self.vehicles.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_vehicles(&self) -> RwLockWriteGuard<'_, VehicleSnapshot> {
        self.vehicles.write().unwrap_or_else(PoisonError::into_inner)
    }
}
