//! Grid dimensions and reference validation.

use super::coord::{Column, Coordinate, MAX_COLUMNS};
use super::error::{FormulaError, ShapeError};

/// Rows in a grid built from the default configuration.
pub const DEFAULT_ROWS: u32 = 100;

/// The configured (columns x rows) space of a grid.
///
/// Columns are always a prefix of `a..z`: a shape with 5 columns holds `a..e`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridShape {
    columns: u8,
    rows: u32,
}

impl GridShape {
    pub fn new(columns: u8, rows: u32) -> Result<GridShape, ShapeError> {
        if columns == 0 || columns > MAX_COLUMNS {
            return Err(ShapeError::Columns {
                got: columns,
                max: MAX_COLUMNS,
            });
        }
        if rows == 0 {
            return Err(ShapeError::Rows);
        }
        Ok(GridShape { columns, rows })
    }

    pub fn column_count(&self) -> u8 {
        self.columns
    }

    pub fn row_count(&self) -> u32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    pub fn columns(&self) -> impl Iterator<Item = Column> + use<> {
        (0..self.columns).filter_map(Column::from_index)
    }

    /// Every coordinate in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + use<> {
        let columns = self.columns;
        (1..=self.rows).flat_map(move |row| {
            (0..columns)
                .filter_map(Column::from_index)
                .map(move |column| Coordinate::new(column, row))
        })
    }

    pub fn contains_column(&self, column: Column) -> bool {
        column.index() < self.columns as usize
    }

    pub fn contains_row(&self, row: u32) -> bool {
        (1..=self.rows).contains(&row)
    }

    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.contains_column(coordinate.column) && self.contains_row(coordinate.row)
    }

    /// Resolve the two halves of a reference token (`bb`, `23`) to a coordinate.
    ///
    /// The column is checked first, so `zz0` reports the column.
    pub fn resolve_reference(&self, letters: &str, digits: &str) -> Result<Coordinate, FormulaError> {
        let letters = letters.to_ascii_lowercase();
        let mut chars = letters.chars();
        let column = match (chars.next(), chars.next()) {
            (Some(letter), None) => Column::from_letter(letter),
            _ => None,
        }
        .filter(|column| self.contains_column(*column))
        .ok_or_else(|| FormulaError::InvalidColumn(letters.clone()))?;

        let row = digits
            .parse::<u32>()
            .ok()
            .filter(|row| self.contains_row(*row))
            .ok_or_else(|| FormulaError::InvalidRow(digits.to_string()))?;

        Ok(Coordinate::new(column, row))
    }
}

impl Default for GridShape {
    fn default() -> Self {
        GridShape {
            columns: MAX_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}
