//! Fluent builder for [`EntityStore`].
//!
//! # Usage
//!
//! ```rust
//! use ct_core::{Building, GeoPoint, Vehicle};
//! use ct_store::EntityStoreBuilder;
//!
//! let store = EntityStoreBuilder::new()
//!     .building(Building::new("b1", "Main Building", GeoPoint::new(29.8649, 77.8966), 85).unwrap())
//!     .vehicle(Vehicle::new("v1", "Shuttle 1", GeoPoint::new(29.8655, 77.8960)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.buildings().len(), 1);
//! assert_eq!(store.vehicle_count(), 1);
//! ```

use std::collections::{BTreeMap, HashSet};

use ct_core::{Building, Vehicle};

use crate::{EntityStore, StoreError, StoreResult, seed};

/// Collects buildings and vehicles, then validates id uniqueness in
/// [`build`](Self::build).
#[derive(Default)]
pub struct EntityStoreBuilder {
    buildings: Vec<Building>,
    vehicles:  Vec<Vehicle>,
}

impl EntityStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pre-loaded with the built-in campus seed data.
    pub fn campus_seed() -> Self {
        Self::new()
            .buildings(seed::seed_buildings())
            .vehicles(seed::seed_vehicles())
    }

    pub fn building(mut self, building: Building) -> Self {
        self.buildings.push(building);
        self
    }

    pub fn buildings(mut self, buildings: impl IntoIterator<Item = Building>) -> Self {
        self.buildings.extend(buildings);
        self
    }

    pub fn vehicle(mut self, vehicle: Vehicle) -> Self {
        self.vehicles.push(vehicle);
        self
    }

    pub fn vehicles(mut self, vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        self.vehicles.extend(vehicles);
        self
    }

    /// Drop any vehicles collected so far (used when a CSV replaces the seed).
    pub fn clear_vehicles(mut self) -> Self {
        self.vehicles.clear();
        self
    }

    /// Drop any buildings collected so far.
    pub fn clear_buildings(mut self) -> Self {
        self.buildings.clear();
        self
    }

    /// Validate and freeze the collected records.
    ///
    /// Buildings keep insertion order; vehicles are keyed by id.
    pub fn build(self) -> StoreResult<EntityStore> {
        let mut seen = HashSet::with_capacity(self.buildings.len());
        for b in &self.buildings {
            if !seen.insert(b.id.clone()) {
                return Err(StoreError::DuplicateBuilding(b.id.clone()));
            }
        }

        let mut vehicles = BTreeMap::new();
        for v in self.vehicles {
            if vehicles.contains_key(&v.id) {
                return Err(StoreError::DuplicateVehicle(v.id));
            }
            vehicles.insert(v.id.clone(), v);
        }

        Ok(EntityStore::new(self.buildings, vehicles))
    }
}
