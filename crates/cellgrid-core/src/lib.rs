//! cellgrid-core - UI-agnostic grid store and sheet interface.

pub mod columns;
pub mod config;
pub mod error;
pub mod grid;
pub mod sheet;

pub use columns::{ColumnDefinition, column_definitions};
pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::{Cell, Grid};
pub use sheet::{SharedSheet, Sheet};

pub use cellgrid_engine::engine::{Column, Coordinate, ERROR_SENTINEL, GridShape};
