use thiserror::Error;

use ts_core::{Cell, VehicleId};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("vehicle at index {index} has id {id}; ids must run 0..n in order")]
    VehicleIdMismatch { index: usize, id: VehicleId },

    #[error("{id} spawns at {cell}, outside the {width}x{height} map")]
    OffMap {
        id:     VehicleId,
        cell:   Cell,
        width:  u32,
        height: u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
