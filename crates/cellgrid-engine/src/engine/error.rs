//! Error types for the formula engine.

use thiserror::Error;

/// Reasons a formula fails to evaluate.
///
/// None of these ever reach a grid write: the store downgrades them to the
/// `#ERR` sentinel through [`evaluate_to_display`](super::evaluate_to_display).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("Invalid reference: unknown column '{0}'")]
    InvalidColumn(String),

    #[error("Invalid reference: row {0} does not exist")]
    InvalidRow(String),

    #[error("Malformed expression: {0}")]
    Malformed(String),

    #[error("Expression evaluated to a non-finite number")]
    NonFinite,
}

impl FormulaError {
    /// True for errors caused by a reference token that does not address a cell.
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, FormulaError::InvalidColumn(_) | FormulaError::InvalidRow(_))
    }
}

/// A textual coordinate such as `B12` could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid cell coordinate: {0}")]
pub struct CoordinateError(pub String);

/// A grid shape outside the supported bounds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Column count must be between 1 and {max}, got {got}")]
    Columns { got: u8, max: u8 },

    #[error("Row count must be positive")]
    Rows,
}
