//! CSV seed loaders.
//!
//! # CSV formats
//!
//! Buildings:
//!
//! ```csv
//! id,name,lat,lng,carbon_score
//! b1,Main Building,29.8649,77.8966,85
//! ```
//!
//! Vehicles:
//!
//! ```csv
//! id,name,lat,lng
//! v1,Shuttle 1,29.8655,77.8960
//! ```
//!
//! Coordinates are validated with [`GeoPoint::checked`]; carbon scores must
//! lie in `0..=100`.  Duplicate ids are caught later by
//! [`EntityStoreBuilder::build`](crate::EntityStoreBuilder::build).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ct_core::{Building, GeoPoint, Vehicle};

use crate::StoreError;

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct BuildingRecord {
    id:           String,
    name:         String,
    lat:          f64,
    lng:          f64,
    carbon_score: u32,
}

#[derive(Deserialize)]
struct VehicleRecord {
    id:   String,
    name: String,
    lat:  f64,
    lng:  f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load buildings from a CSV file.
pub fn load_buildings_csv(path: &Path) -> Result<Vec<Building>, StoreError> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_buildings_reader(file)
}

/// Like [`load_buildings_csv`] but accepts any `Read` source.
pub fn load_buildings_reader<R: Read>(reader: R) -> Result<Vec<Building>, StoreError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<BuildingRecord>()
        .map(|result| -> Result<Building, StoreError> {
            let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
            let location = GeoPoint::checked(row.lat, row.lng)?;
            Ok(Building::new(row.id, row.name, location, row.carbon_score)?)
        })
        .collect()
}

/// Load vehicles from a CSV file.
pub fn load_vehicles_csv(path: &Path) -> Result<Vec<Vehicle>, StoreError> {
    let file = std::fs::File::open(path).map_err(StoreError::Io)?;
    load_vehicles_reader(file)
}

/// Like [`load_vehicles_csv`] but accepts any `Read` source.
pub fn load_vehicles_reader<R: Read>(reader: R) -> Result<Vec<Vehicle>, StoreError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<VehicleRecord>()
        .map(|result| -> Result<Vehicle, StoreError> {
            let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;
            let location = GeoPoint::checked(row.lat, row.lng)?;
            Ok(Vehicle::new(row.id, row.name, location))
        })
        .collect()
}
