use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    #[error("unknown vehicle kind {0:?}")]
    UnknownKind(String),
}

pub type VehicleResult<T> = Result<T, VehicleError>;
