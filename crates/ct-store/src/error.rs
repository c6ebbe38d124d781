use ct_core::{BuildingId, CtError, VehicleId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    #[error("duplicate building id {0}")]
    DuplicateBuilding(BuildingId),

    #[error("duplicate vehicle id {0}")]
    DuplicateVehicle(VehicleId),

    #[error("invalid record: {0}")]
    Invalid(#[from] CtError),

    #[error("seed parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
