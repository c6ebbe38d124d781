//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CtError` as one variant
//! via `#[from]` where they need to surface a core validation failure.

use thiserror::Error;

use crate::BuildingId;

/// Validation failures raised while constructing core records.
#[derive(Debug, Error, PartialEq)]
pub enum CtError {
    #[error("coordinate ({lat}, {lng}) is not a finite WGS-84 position")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("building {id} has carbon score {score}, expected 0..=100")]
    CarbonScoreOutOfRange { id: BuildingId, score: u32 },
}

/// Shorthand result type for `ct-core`.
pub type CtResult<T> = Result<T, CtError>;
