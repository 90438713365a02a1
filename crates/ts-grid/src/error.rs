use thiserror::Error;

use ts_core::{Cell, TsError};

#[derive(Debug, Error)]
pub enum GridError {
    #[error("map parse error: {0}")]
    Map(String),

    #[error("map line {line}, column {column}: {source}")]
    Terrain {
        line:   usize,
        column: usize,
        #[source]
        source: TsError,
    },

    #[error("roster row {row}: {message}")]
    Roster { row: usize, message: String },

    #[error("roster row {row}: vehicle at {cell} is outside the {width}x{height} map")]
    OffMap {
        row:    usize,
        cell:   Cell,
        width:  u32,
        height: u32,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GridResult<T> = Result<T, GridError>;
