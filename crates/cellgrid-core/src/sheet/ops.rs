use cellgrid_engine::engine::{Column, Coordinate};

use super::Sheet;
use crate::error::Result;

impl Sheet {
    /// Set cell contents from raw input.
    ///
    /// Input starting with `=` is evaluated once, now, against the current
    /// grid; a failed formula stores `#ERR`. Only coordinates outside the grid
    /// produce an error, and then nothing changes.
    pub fn set_cell(&mut self, coordinate: &Coordinate, input: &str) -> Result<()> {
        self.grid.apply_input(coordinate, input)
    }

    /// Like [`set_cell`](Self::set_cell) with a textual coordinate (`"B2"`).
    pub fn set_cell_a1(&mut self, coordinate: &str, input: &str) -> Result<()> {
        self.set_cell(&coordinate.parse::<Coordinate>()?, input)
    }

    /// Overwrite every cell in `row` with the literal `name`.
    pub fn rename_row(&mut self, row: u32, name: &str) -> Result<()> {
        self.grid.fill_row(row, name)
    }

    /// Overwrite every cell in `column` with the literal `name`.
    pub fn rename_column(&mut self, column: Column, name: &str) -> Result<()> {
        self.grid.fill_column(column, name)
    }
}
