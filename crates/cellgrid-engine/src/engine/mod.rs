//! Formula engine API.
//!
//! - [`Coordinate`], [`Column`] - Cell addressing (`b12` ↔ column/row)
//! - [`GridShape`] - The configured columns x rows space, reference validation
//! - [`substitute_references`] - Replace reference tokens with cell values
//! - [`evaluate_expression`] - Recursive descent arithmetic (`+ - * / ( )`)
//! - [`evaluate_formula`], [`evaluate_to_display`] - Full formula evaluation
//! - [`format_number`] - Locale-independent number display

mod coord;
mod error;
mod eval;
mod expr;
mod format;
mod shape;

pub use coord::{Column, Coordinate, MAX_COLUMNS};
pub use error::{CoordinateError, FormulaError, ShapeError};
pub use eval::{
    CellSource, ERROR_SENTINEL, FORMULA_MARKER, evaluate_formula, evaluate_to_display,
    formula_body, substitute_references,
};
pub use expr::evaluate_expression;
pub use format::{format_number, parse_number};
pub use shape::{DEFAULT_ROWS, GridShape};
