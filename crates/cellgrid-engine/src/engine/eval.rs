//! Formula evaluation against a grid snapshot.
//!
//! Evaluation runs in two passes: every reference token in the formula body
//! is replaced by the referenced cell's numeric value, then the resulting
//! arithmetic text goes through [`evaluate_expression`]. References are read
//! from the snapshot handed in; nothing is re-evaluated when a referenced cell
//! later changes.

use regex::Regex;
use std::sync::OnceLock;

use super::coord::Coordinate;
use super::error::FormulaError;
use super::expr::evaluate_expression;
use super::format::{format_number, parse_number};
use super::shape::GridShape;

/// Value stored in a cell whose formula failed to evaluate.
pub const ERROR_SENTINEL: &str = "#ERR";

/// Leading character that marks raw input as a formula.
pub const FORMULA_MARKER: char = '=';

/// Read-only view of grid contents used while evaluating a formula.
pub trait CellSource {
    fn shape(&self) -> GridShape;

    /// Current value of a cell, `None` when the cell has no entry.
    fn value_at(&self, coordinate: &Coordinate) -> Option<&str>;
}

/// The formula body (text after `=`) if `raw` is a formula.
pub fn formula_body(raw: &str) -> Option<&str> {
    raw.strip_prefix(FORMULA_MARKER)
}

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Za-z]+)([0-9]+)").expect("reference regex compiles"))
}

/// Replace every reference token in `body` with the value it points at.
///
/// Values that are empty or not numeric contribute `0`. A token naming a column
/// or row outside the source's shape is an error.
pub fn substitute_references<S: CellSource + ?Sized>(
    body: &str,
    source: &S,
) -> Result<String, FormulaError> {
    let shape = source.shape();
    let mut out = String::with_capacity(body.len());
    let mut last = 0;

    for caps in reference_re().captures_iter(body) {
        let (Some(whole), Some(letters), Some(digits)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let coordinate = shape.resolve_reference(letters.as_str(), digits.as_str())?;
        let number = source
            .value_at(&coordinate)
            .and_then(parse_number)
            .unwrap_or(0.0);

        log::trace!("substituting {} = {}", coordinate, number);
        out.push_str(&body[last..whole.start()]);
        out.push_str(&format_number(number));
        last = whole.end();
    }

    out.push_str(&body[last..]);
    Ok(out)
}

/// Evaluate a formula body to a number.
pub fn evaluate_formula<S: CellSource + ?Sized>(body: &str, source: &S) -> Result<f64, FormulaError> {
    let expression = substitute_references(body, source)?;
    evaluate_expression(&expression)
}

/// Evaluate a formula body to the string stored as the cell's value.
///
/// Failures become [`ERROR_SENTINEL`]; this never returns an error.
pub fn evaluate_to_display<S: CellSource + ?Sized>(body: &str, source: &S) -> String {
    match evaluate_formula(body, source) {
        Ok(n) => format_number(n),
        Err(e) => {
            log::debug!("formula '{}' failed: {}", body, e);
            ERROR_SENTINEL.to_string()
        }
    }
}
