//! cellgrid - In-memory spreadsheet model with one-shot arithmetic formulas.
//!
//! A [`Sheet`] holds a fixed grid of cells addressed as `A1`..`Z100` (by
//! default). Input starting with `=` is evaluated once when it is written;
//! changing a referenced cell later does not update it.
//!
//! ```
//! use cellgrid::Sheet;
//!
//! let mut sheet = Sheet::default();
//! sheet.set_cell_a1("A1", "3").unwrap();
//! sheet.set_cell_a1("B1", "=A1*2").unwrap();
//! assert_eq!(sheet.cell_value_a1("B1").unwrap(), "6");
//!
//! sheet.set_cell_a1("A1", "10").unwrap();
//! assert_eq!(sheet.cell_value_a1("B1").unwrap(), "6");
//!
//! sheet.set_cell_a1("C1", "=A1/0").unwrap();
//! assert_eq!(sheet.cell_value_a1("C1").unwrap(), "#ERR");
//! ```

pub use cellgrid_core::*;
pub use cellgrid_engine::engine;
