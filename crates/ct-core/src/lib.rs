//! `ct-core` — foundational types for the campus digital twin.
//!
//! Every other `ct-*` crate depends on this one.  It has no `ct-*`
//! dependencies and only a handful of external ones (`rand`, `thiserror`,
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `BuildingId`, `VehicleId`                             |
//! | [`geo`]         | `GeoPoint`, haversine distance, `[lng, lat]` helpers  |
//! | [`entity`]      | `Building`, `Vehicle` wire records                    |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `SimRng`                                              |
//! | [`error`]       | `CtError`, `CtResult`                                 |
//!
//! All public record types derive `Serialize`/`Deserialize` with the JSON
//! field names the HTTP API speaks (`carbonScore`, `lat`, `lng`).

pub mod entity;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use entity::{Building, Vehicle};
pub use error::{CtError, CtResult};
pub use geo::GeoPoint;
pub use ids::{BuildingId, VehicleId};
pub use rng::SimRng;
pub use time::Tick;
