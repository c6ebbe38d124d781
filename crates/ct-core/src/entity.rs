//! Building and vehicle records as exchanged over the HTTP API.

use serde::{Deserialize, Serialize};

use crate::{BuildingId, CtError, CtResult, GeoPoint, VehicleId};

/// Highest valid carbon score.
pub const MAX_CARBON_SCORE: u8 = 100;

/// A static campus building.  Never mutated after construction.
///
/// Deserialisation goes through [`Building::new`], so a score above
/// [`MAX_CARBON_SCORE`] is rejected on the wire as well.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "BuildingWire")]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub location: GeoPoint,
    /// Carbon footprint score in `0..=100`; higher is worse.
    pub carbon_score: u8,
}

impl Building {
    /// Build a record, rejecting scores above [`MAX_CARBON_SCORE`].
    pub fn new(
        id: impl Into<BuildingId>,
        name: impl Into<String>,
        location: GeoPoint,
        carbon_score: u32,
    ) -> CtResult<Self> {
        let id = id.into();
        let carbon_score = u8::try_from(carbon_score)
            .ok()
            .filter(|s| *s <= MAX_CARBON_SCORE)
            .ok_or_else(|| CtError::CarbonScoreOutOfRange { id: id.clone(), score: carbon_score })?;
        Ok(Self { id, name: name.into(), location, carbon_score })
    }

    /// Marker colour intensity in `[0, 1]`, proportional to the carbon score.
    #[inline]
    pub fn carbon_intensity(&self) -> f32 {
        f32::from(self.carbon_score) / f32::from(MAX_CARBON_SCORE)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildingWire {
    id:           BuildingId,
    name:         String,
    location:     GeoPoint,
    carbon_score: u32,
}

impl TryFrom<BuildingWire> for Building {
    type Error = CtError;

    fn try_from(wire: BuildingWire) -> CtResult<Self> {
        Building::new(wire.id, wire.name, wire.location, wire.carbon_score)
    }
}

/// A tracked vehicle whose location moves over time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub location: GeoPoint,
}

impl Vehicle {
    pub fn new(id: impl Into<VehicleId>, name: impl Into<String>, location: GeoPoint) -> Self {
        Self { id: id.into(), name: name.into(), location }
    }
}
