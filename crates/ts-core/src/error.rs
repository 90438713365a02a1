//! Core error type.
//!
//! Raised at the boundary where external data (map letters, roster fields,
//! caller-built neighbour maps) enters the typed world.  Once a value is a
//! `Terrain`, `Signal`, or `Direction` every downstream operation is total.

use thiserror::Error;

use crate::Direction;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TsError {
    #[error("neighbour map has no terrain for {0}")]
    MissingNeighbor(Direction),

    #[error("unknown terrain letter {0:?}")]
    UnknownTerrain(char),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("unknown signal colour {0:?}")]
    UnknownSignal(String),
}

/// Shorthand result type for `ts-core` and crates that reuse `TsError`.
pub type TsResult<T> = Result<T, TsError>;
