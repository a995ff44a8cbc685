//! Row and column display names.
//!
//! Labels live outside the grid: they never change a cell value and formulas
//! cannot see them.

use cellgrid_engine::engine::Column;

use super::Sheet;
use crate::error::{GridError, Result};

impl Sheet {
    pub fn set_row_label(&mut self, row: u32, label: &str) -> Result<()> {
        if !self.shape().contains_row(row) {
            return Err(GridError::RowNotFound(row));
        }
        self.row_labels.insert(row, label.to_string());
        Ok(())
    }

    pub fn set_column_label(&mut self, column: Column, label: &str) -> Result<()> {
        if !self.shape().contains_column(column) {
            return Err(GridError::ColumnNotFound(column.header()));
        }
        self.column_labels.insert(column, label.to_string());
        Ok(())
    }

    /// Remove a row label, restoring the row number as its name.
    pub fn clear_row_label(&mut self, row: u32) {
        self.row_labels.remove(&row);
    }

    pub fn clear_column_label(&mut self, column: Column) {
        self.column_labels.remove(&column);
    }

    /// Display name of a row: its label, or the row number.
    pub fn row_label(&self, row: u32) -> String {
        self.row_labels
            .get(&row)
            .cloned()
            .unwrap_or_else(|| row.to_string())
    }

    /// Display name of a column: its label, or the uppercase letter.
    pub fn column_header(&self, column: Column) -> String {
        self.column_labels
            .get(&column)
            .cloned()
            .unwrap_or_else(|| column.header().to_string())
    }
}
