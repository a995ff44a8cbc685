//! Cell storage for the spreadsheet grid.
//!
//! - [`Cell`] - A displayed value plus the formula it came from, if any
//! - [`Grid`] - A total mapping from every coordinate of a [`GridShape`] to a
//!   cell. Cloning is cheap and a clone is a snapshot: writes through one handle
//!   are never visible through another.

use cellgrid_engine::engine::{
    CellSource, Column, Coordinate, GridShape, evaluate_to_display, formula_body,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{GridError, Result};

/// Content of one grid position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Displayed value. Formula results are stored already formatted.
    pub value: String,
    /// Raw input including the leading `=`, kept only for formula cells.
    pub formula: Option<String>,
}

impl Cell {
    pub fn new_empty() -> Cell {
        Cell::default()
    }

    pub fn new_literal(text: &str) -> Cell {
        Cell {
            value: text.to_string(),
            formula: None,
        }
    }

    /// Build a cell from user input, evaluating formulas against `source`.
    /// - Starts with '=' -> value is the evaluation result or `#ERR`
    /// - Otherwise -> the input verbatim
    pub fn from_input<S: CellSource + ?Sized>(input: &str, source: &S) -> Cell {
        match formula_body(input) {
            Some(body) => Cell {
                value: evaluate_to_display(body, source),
                formula: Some(input.to_string()),
            },
            None => Cell::new_literal(input),
        }
    }

    pub fn is_formula(&self) -> bool {
        self.formula.is_some()
    }

    /// Text to put back in an editor: the formula if there is one.
    pub fn to_input_string(&self) -> &str {
        self.formula.as_deref().unwrap_or(&self.value)
    }
}

#[derive(Clone, Debug)]
pub struct Grid {
    shape: GridShape,
    cells: Arc<HashMap<Coordinate, Cell>>,
}

impl Grid {
    /// A grid with an empty cell at every coordinate of `shape`.
    pub fn new(shape: GridShape) -> Grid {
        let cells = shape
            .coordinates()
            .map(|coordinate| (coordinate, Cell::new_empty()))
            .collect();
        Grid {
            shape,
            cells: Arc::new(cells),
        }
    }

    pub fn shape(&self) -> GridShape {
        self.shape
    }

    pub fn get(&self, coordinate: &Coordinate) -> Option<&Cell> {
        self.cells.get(coordinate)
    }

    /// The cell at `coordinate`, or `NotFound` outside the grid.
    pub fn read(&self, coordinate: &Coordinate) -> Result<&Cell> {
        self.get(coordinate).ok_or(GridError::NotFound(*coordinate))
    }

    /// A new grid with `input` applied at `coordinate`; `self` is unchanged.
    pub fn write(&self, coordinate: &Coordinate, input: &str) -> Result<Grid> {
        let mut next = self.clone();
        next.apply_input(coordinate, input)?;
        Ok(next)
    }

    /// Apply `input` at `coordinate` in place.
    ///
    /// Formulas are evaluated against the grid as it was before this write.
    /// Only storage shared with other snapshots is copied.
    pub fn apply_input(&mut self, coordinate: &Coordinate, input: &str) -> Result<()> {
        if !self.shape.contains(coordinate) {
            log::warn!("rejected write outside the grid at {}", coordinate);
            return Err(GridError::NotFound(*coordinate));
        }
        let cell = Cell::from_input(input, &*self);
        log::debug!("write {} <- {:?} => {:?}", coordinate, input, cell.value);
        Arc::make_mut(&mut self.cells).insert(*coordinate, cell);
        Ok(())
    }

    /// Every cell in row-major order.
    pub fn enumerate(&self) -> Vec<(Coordinate, &Cell)> {
        self.shape
            .coordinates()
            .filter_map(|coordinate| self.cells.get(&coordinate).map(|cell| (coordinate, cell)))
            .collect()
    }

    /// A new grid with `name` written as a literal into every cell of `row`.
    pub fn rename_row(&self, row: u32, name: &str) -> Result<Grid> {
        let mut next = self.clone();
        next.fill_row(row, name)?;
        Ok(next)
    }

    /// A new grid with `name` written as a literal into every cell of `column`.
    pub fn rename_column(&self, column: Column, name: &str) -> Result<Grid> {
        let mut next = self.clone();
        next.fill_column(column, name)?;
        Ok(next)
    }

    pub(crate) fn fill_row(&mut self, row: u32, name: &str) -> Result<()> {
        if !self.shape.contains_row(row) {
            return Err(GridError::RowNotFound(row));
        }
        let targets: Vec<Coordinate> = self
            .shape
            .columns()
            .map(|column| Coordinate::new(column, row))
            .collect();
        self.fill(&targets, name);
        Ok(())
    }

    pub(crate) fn fill_column(&mut self, column: Column, name: &str) -> Result<()> {
        if !self.shape.contains_column(column) {
            return Err(GridError::ColumnNotFound(column.header()));
        }
        let targets: Vec<Coordinate> = (1..=self.shape.row_count())
            .map(|row| Coordinate::new(column, row))
            .collect();
        self.fill(&targets, name);
        Ok(())
    }

    fn fill(&mut self, targets: &[Coordinate], name: &str) {
        log::debug!("bulk write {:?} into {} cells", name, targets.len());
        let cells = Arc::make_mut(&mut self.cells);
        for coordinate in targets {
            cells.insert(*coordinate, Cell::new_literal(name));
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(GridShape::default())
    }
}

impl CellSource for Grid {
    fn shape(&self) -> GridShape {
        self.shape
    }

    fn value_at(&self, coordinate: &Coordinate) -> Option<&str> {
        self.cells.get(coordinate).map(|cell| cell.value.as_str())
    }
}
