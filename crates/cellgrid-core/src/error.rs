//! Error types for cellgrid core.

use cellgrid_engine::engine::{Coordinate, CoordinateError, ShapeError};
use thiserror::Error;

/// Errors returned by the grid store and sheet interface.
///
/// Formula failures are not here: they are stored as `#ERR` in the cell.
#[derive(Error, Debug)]
pub enum GridError {
    #[error("No such cell: {0}")]
    NotFound(Coordinate),

    #[error("Row {0} is outside the grid")]
    RowNotFound(u32),

    #[error("Column '{0}' is outside the grid")]
    ColumnNotFound(char),

    #[error(transparent)]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(#[from] ShapeError),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
