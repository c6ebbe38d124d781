//! Route request parsing and validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ct_core::GeoPoint;

use crate::{ProxyResult, RouteError};

const MISSING_POINTS: &str = "Start and end points are required.";

/// The request body as received: `{start: {lat, lng}, end: {lat, lng}}`.
///
/// Both points are kept as raw JSON so that a missing field, a `null`, and a
/// string where a number belongs all surface as validation errors rather
/// than deserialisation failures.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RouteRequestBody {
    pub start: Option<Value>,
    pub end:   Option<Value>,
}

impl RouteRequestBody {
    /// Parse a raw body.  Anything that isn't a JSON object is a validation
    /// error.
    pub fn from_slice(bytes: &[u8]) -> ProxyResult<Self> {
        serde_json::from_slice(bytes).map_err(|_| RouteError::Validation(MISSING_POINTS.into()))
    }
}

/// A validated route request.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: GeoPoint,
    pub end:   GeoPoint,
}

impl RouteRequest {
    /// Validate a raw body.
    ///
    /// # Errors
    ///
    /// [`RouteError::Validation`] if either point is missing, lacks a numeric
    /// `lat`/`lng`, or lies outside WGS-84 bounds.
    pub fn validate(body: &RouteRequestBody) -> ProxyResult<Self> {
        let (Some(start), Some(end)) = (non_null(&body.start), non_null(&body.end)) else {
            return Err(RouteError::Validation(MISSING_POINTS.into()));
        };
        Ok(Self {
            start: parse_point("start", start)?,
            end:   parse_point("end", end)?,
        })
    }
}

fn non_null(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

fn parse_point(field: &str, value: &Value) -> ProxyResult<GeoPoint> {
    let lat = value.get("lat").and_then(Value::as_f64);
    let lng = value.get("lng").and_then(Value::as_f64);
    let (Some(lat), Some(lng)) = (lat, lng) else {
        return Err(RouteError::Validation(format!(
            "`{field}` must have numeric `lat` and `lng`."
        )));
    };
    GeoPoint::checked(lat, lng)
        .map_err(|_| RouteError::Validation(format!("`{field}` is not a valid coordinate.")))
}
