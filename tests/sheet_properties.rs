//! Integration tests for the sheet interface: write/read semantics, formula
//! evaluation and error handling as seen by a UI.

use cellgrid::engine::ERROR_SENTINEL;
use cellgrid::{Column, Coordinate, GridConfig, Sheet};
use pretty_assertions::assert_eq;

fn at(text: &str) -> Coordinate {
    text.parse().unwrap()
}

#[test]
fn test_new_sheet_is_empty_everywhere() {
    let sheet = Sheet::default();
    for (_, cell) in sheet.cells() {
        assert_eq!(cell.value, "");
        assert_eq!(cell.formula, None);
    }
}

#[test]
fn test_literal_write_is_idempotent() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("d4"), "hello world").unwrap();
    let first = sheet.cell(&at("d4")).unwrap().clone();
    sheet.set_cell(&at("d4"), "hello world").unwrap();
    assert_eq!(sheet.cell(&at("d4")).unwrap(), &first);
    assert_eq!(first.value, "hello world");
    assert_eq!(first.formula, None);
}

#[test]
fn test_formula_adds_reference() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "3").unwrap();
    sheet.set_cell(&at("c1"), "=A1+2").unwrap();
    let cell = sheet.cell(&at("c1")).unwrap();
    assert_eq!(cell.value, "5");
    assert_eq!(cell.formula.as_deref(), Some("=A1+2"));
}

#[test]
fn test_missing_row_is_error_sentinel() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "=A999").unwrap();
    let cell = sheet.cell(&at("a1")).unwrap();
    assert_eq!(cell.value, ERROR_SENTINEL);
    assert_eq!(cell.formula.as_deref(), Some("=A999"));
}

#[test]
fn test_unconfigured_column_is_error_sentinel() {
    let config = GridConfig::from_toml_str("columns = 5\nrows = 10").unwrap();
    let mut sheet = Sheet::new(&config).unwrap();
    sheet.set_cell(&at("a1"), "=F1+1").unwrap();
    assert_eq!(sheet.cell_value(&at("a1")).unwrap(), ERROR_SENTINEL);
    sheet.set_cell(&at("a2"), "=AA1").unwrap();
    assert_eq!(sheet.cell_value(&at("a2")).unwrap(), ERROR_SENTINEL);
}

#[test]
fn test_formulas_are_not_recomputed() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "3").unwrap();
    sheet.set_cell(&at("b1"), "=A1*2").unwrap();
    assert_eq!(sheet.cell_value(&at("b1")).unwrap(), "6");

    sheet.set_cell(&at("a1"), "10").unwrap();
    assert_eq!(sheet.cell_value(&at("b1")).unwrap(), "6");
}

#[test]
fn test_enumeration_size_is_fixed() {
    let config = GridConfig::from_toml_str("columns = 4\nrows = 7").unwrap();
    let mut sheet = Sheet::new(&config).unwrap();
    for (i, key) in ["a1", "b2", "c3", "d7", "a1"].iter().enumerate() {
        sheet.set_cell(&at(key), &i.to_string()).unwrap();
    }
    assert_eq!(sheet.cells().len(), 28);
    assert_eq!(sheet.columns().len(), 4);
}

#[test]
fn test_non_finite_results_are_errors() {
    let mut sheet = Sheet::default();
    for input in ["=4/0", "=0/0", "=-1/0", "=A1/A2"] {
        sheet.set_cell(&at("e5"), input).unwrap();
        let value = sheet.cell_value(&at("e5")).unwrap();
        assert_eq!(value, ERROR_SENTINEL, "input {input:?}");
    }
}

#[test]
fn test_arithmetic_precedence_with_references() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "2").unwrap();
    sheet.set_cell(&at("a2"), "3.0").unwrap();
    sheet.set_cell(&at("a3"), "-4").unwrap();
    sheet.set_cell(&at("b1"), "=a1 + a2 * (a3 - 1) / 5").unwrap();
    assert_eq!(sheet.cell_value(&at("b1")).unwrap(), "-1");
    sheet.set_cell(&at("b2"), "=10-A3").unwrap();
    assert_eq!(sheet.cell_value(&at("b2")).unwrap(), "14");
}

#[test]
fn test_text_and_empty_references_count_as_zero() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "apples").unwrap();
    sheet.set_cell(&at("b1"), "=A1 + B2 + 1").unwrap();
    assert_eq!(sheet.cell_value(&at("b1")).unwrap(), "1");
}

#[test]
fn test_leading_numbers_in_text_are_used() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "3abc").unwrap();
    sheet.set_cell(&at("b1"), "=A1+2").unwrap();
    assert_eq!(sheet.cell_value(&at("b1")).unwrap(), "5");

    sheet.set_cell(&at("a1"), "12px").unwrap();
    sheet.set_cell(&at("b1"), "=A1*2").unwrap();
    assert_eq!(sheet.cell_value(&at("b1")).unwrap(), "24");

    sheet.set_cell(&at("a2"), "abc3").unwrap();
    sheet.set_cell(&at("a3"), ".").unwrap();
    sheet.set_cell(&at("b2"), "=A2+A3+1").unwrap();
    assert_eq!(sheet.cell_value(&at("b2")).unwrap(), "1");
}

#[test]
fn test_formula_result_feeds_later_formulas() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "=1/4").unwrap();
    sheet.set_cell(&at("a2"), "=A1*8").unwrap();
    assert_eq!(sheet.cell_value(&at("a1")).unwrap(), "0.25");
    assert_eq!(sheet.cell_value(&at("a2")).unwrap(), "2");
}

#[test]
fn test_error_cell_counts_as_zero() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "=1/0").unwrap();
    sheet.set_cell(&at("a2"), "=A1+7").unwrap();
    assert_eq!(sheet.cell_value(&at("a2")).unwrap(), "7");
}

#[test]
fn test_read_outside_grid_does_not_panic() {
    let sheet = Sheet::default();
    assert!(sheet.cell_value(&at("a101")).is_err());
    assert!(sheet.cell_value_a1("A0").is_err());
}

#[test]
fn test_snapshot_survives_later_writes() {
    let mut sheet = Sheet::default();
    sheet.set_cell(&at("a1"), "1").unwrap();
    let snapshot = sheet.snapshot();
    sheet.set_cell(&at("a1"), "2").unwrap();
    assert_eq!(snapshot.read(&at("a1")).unwrap().value, "1");
    assert_eq!(sheet.cell_value(&at("a1")).unwrap(), "2");
}

#[test]
fn test_column_definitions() {
    let sheet = Sheet::default();
    let headers: String = sheet.columns().iter().map(|c| c.header.as_str()).collect();
    assert_eq!(headers, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
    assert_eq!(sheet.columns()[2].field, Column::from_letter('c').unwrap());
}
