//! Built-in campus seed data.

use ct_core::{Building, BuildingId, GeoPoint, Vehicle};

/// The three demo buildings, in display order.
pub fn seed_buildings() -> Vec<Building> {
    [
        ("b1", "Main Building", 29.8649, 77.8966, 85),
        ("b2", "Library",       29.8660, 77.8970, 60),
        ("b3", "Hostel A",      29.8675, 77.8950, 92),
    ]
    .into_iter()
    .map(|(id, name, lat, lng, score)| Building {
        id:           BuildingId::new(id),
        name:         name.to_owned(),
        location:     GeoPoint::new(lat, lng),
        carbon_score: score,
    })
    .collect()
}

/// The two demo vehicles at their starting positions.
pub fn seed_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("v1", "Shuttle 1",       GeoPoint::new(29.8655, 77.8960)),
        Vehicle::new("v2", "Maintenance Van", GeoPoint::new(29.8670, 77.8955)),
    ]
}
