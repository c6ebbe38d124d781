//! Route geometry as returned to clients.
//!
//! A geometry that came from a provider is kept as the exact JSON text the
//! provider sent and is written back out unchanged, members such as `bbox`
//! and third (elevation) position elements included.  Alongside it a
//! `[lng, lat]` view of the vertices is parsed for callers that draw or
//! measure the line.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

use ct_core::GeoPoint;

/// A GeoJSON-style line: `coordinates` are `[lng, lat, …]` positions, in
/// provider order.
#[derive(Clone, Debug)]
pub struct RouteGeometry {
    raw:         Option<Box<RawValue>>,
    kind:        Option<String>,
    coordinates: Vec<[f64; 2]>,
}

/// The members the vertex view needs; everything else stays in `raw` only.
#[derive(Deserialize)]
struct Shape {
    #[serde(rename = "type", default)]
    kind:        Option<String>,
    coordinates: Vec<Vec<f64>>,
}

#[derive(Serialize)]
struct CoordinatesOnly<'a> {
    coordinates: &'a [[f64; 2]],
}

impl RouteGeometry {
    /// A bare `{"coordinates": …}` line.
    pub fn from_coordinates(coordinates: Vec<[f64; 2]>) -> Self {
        Self { raw: None, kind: None, coordinates }
    }

    /// Wrap provider JSON, keeping its text verbatim.
    ///
    /// Fails unless the value is an object whose `coordinates` member is an
    /// array of positions with at least two numbers each.
    pub fn from_raw(raw: Box<RawValue>) -> serde_json::Result<Self> {
        let shape: Shape = serde_json::from_str(raw.get())?;
        let coordinates = shape
            .coordinates
            .iter()
            .map(|position| match position.as_slice() {
                [lng, lat, ..] => Ok([*lng, *lat]),
                _ => Err(serde_json::Error::custom(format!(
                    "position needs at least two numbers, got {}",
                    position.len()
                ))),
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Self { raw: Some(raw), kind: shape.kind, coordinates })
    }

    /// Parse a geometry from JSON text.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Self::from_raw(RawValue::from_string(json.to_owned())?)
    }

    /// GeoJSON `type`, when present.
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// `[lng, lat]` of every vertex; extra position elements are not included.
    pub fn coordinates(&self) -> &[[f64; 2]] {
        &self.coordinates
    }

    /// Vertices as `GeoPoint`s (axes swapped back to lat/lng).
    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.coordinates.iter().copied().map(GeoPoint::from_lng_lat)
    }

    /// Sum of haversine segment lengths, in metres.
    pub fn length_m(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|w| GeoPoint::from_lng_lat(w[0]).distance_m(GeoPoint::from_lng_lat(w[1])))
            .sum()
    }
}

impl PartialEq for RouteGeometry {
    fn eq(&self, other: &Self) -> bool {
        self.raw.as_ref().map(|r| r.get()) == other.raw.as_ref().map(|r| r.get())
            && self.kind == other.kind
            && self.coordinates == other.coordinates
    }
}

impl Serialize for RouteGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.raw {
            Some(raw) => raw.serialize(serializer),
            None => CoordinatesOnly { coordinates: &self.coordinates }.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RouteGeometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(D::Error::custom)
    }
}

/// Body of a successful `POST /api/routes/optimize`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub geometry: RouteGeometry,
}
