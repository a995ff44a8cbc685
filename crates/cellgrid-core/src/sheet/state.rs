use cellgrid_engine::engine::{Column, Coordinate, GridShape};
use std::collections::HashMap;

use crate::columns::{ColumnDefinition, column_definitions};
use crate::config::GridConfig;
use crate::error::Result;
use crate::grid::{Cell, Grid};

/// A single-owner spreadsheet: the current grid plus static column
/// definitions and display labels.
///
/// All mutation goes through `&mut self`; use [`SharedSheet`](super::SharedSheet)
/// to share one sheet between threads.
#[derive(Clone, Debug)]
pub struct Sheet {
    pub(crate) grid: Grid,
    pub(crate) columns: Vec<ColumnDefinition>,
    /// Row display names, kept apart from cell values
    pub(crate) row_labels: HashMap<u32, String>,
    /// Column display names, kept apart from cell values
    pub(crate) column_labels: HashMap<Column, String>,
}

impl Sheet {
    /// Create a sheet sized by `config`, with every cell empty.
    pub fn new(config: &GridConfig) -> Result<Self> {
        Ok(Self::with_shape(config.shape()?))
    }

    pub fn with_shape(shape: GridShape) -> Self {
        log::debug!(
            "new sheet with {} columns x {} rows",
            shape.column_count(),
            shape.row_count()
        );
        Sheet {
            grid: Grid::new(shape),
            columns: column_definitions(&shape),
            row_labels: HashMap::new(),
            column_labels: HashMap::new(),
        }
    }

    pub fn shape(&self) -> GridShape {
        self.grid.shape()
    }

    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Every cell, row-major, for rendering.
    pub fn cells(&self) -> Vec<(Coordinate, &Cell)> {
        self.grid.enumerate()
    }

    pub fn cell(&self, coordinate: &Coordinate) -> Result<&Cell> {
        self.grid.read(coordinate)
    }

    /// Displayed value of a cell; `NotFound` outside the grid.
    pub fn cell_value(&self, coordinate: &Coordinate) -> Result<&str> {
        Ok(&self.cell(coordinate)?.value)
    }

    /// Like [`cell_value`](Self::cell_value) with a textual coordinate (`"B2"`).
    pub fn cell_value_a1(&self, coordinate: &str) -> Result<&str> {
        self.cell_value(&coordinate.parse::<Coordinate>()?)
    }

    /// The current grid. Later writes to the sheet do not affect it.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::with_shape(GridShape::default())
    }
}
