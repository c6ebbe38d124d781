//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  The simulator perturbs
//! positions by ~5e-5 degrees per tick, which single precision cannot
//! represent cleanly around 77° E, so the extra width is required here.
//!
//! # Axis order
//!
//! Internally and on the JSON wire a point is `{lat, lng}`.  Routing
//! providers and GeoJSON geometries use `[lng, lat]`; convert only through
//! [`GeoPoint::lng_lat`] and [`GeoPoint::from_lng_lat`] so the swap happens
//! in exactly one place.

use serde::{Deserialize, Serialize};

use crate::{CtError, CtResult};

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Construct a point, rejecting non-finite or out-of-range values.
    pub fn checked(lat: f64, lng: f64) -> CtResult<Self> {
        let valid = lat.is_finite()
            && lng.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lng);
        if valid {
            Ok(Self { lat, lng })
        } else {
            Err(CtError::InvalidCoordinate { lat, lng })
        }
    }

    /// The point shifted by `d_lat` / `d_lng` degrees.
    #[inline]
    pub fn offset(self, d_lat: f64, d_lng: f64) -> Self {
        Self { lat: self.lat + d_lat, lng: self.lng + d_lng }
    }

    /// `[lng, lat]` pair in provider / GeoJSON order.
    #[inline]
    pub fn lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Inverse of [`lng_lat`](Self::lng_lat).
    #[inline]
    pub fn from_lng_lat(pair: [f64; 2]) -> Self {
        Self { lat: pair[1], lng: pair[0] }
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Per-axis box check: both `|Δlat|` and `|Δlng|` are at most `half_deg`.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lng - center.lng).abs() <= half_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
