//! Static column definitions for rendering.

use cellgrid_engine::engine::{Column, GridShape};
use serde::{Deserialize, Serialize};

/// How a UI should present one column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    /// Lowercase letter used in cell keys.
    pub field: Column,
    /// Uppercase letter shown in the header row.
    pub header: String,
    pub editable: bool,
}

impl ColumnDefinition {
    pub fn new(field: Column) -> Self {
        ColumnDefinition {
            field,
            header: field.header().to_string(),
            editable: true,
        }
    }
}

/// One definition per column of `shape`, in order.
pub fn column_definitions(shape: &GridShape) -> Vec<ColumnDefinition> {
    shape.columns().map(ColumnDefinition::new).collect()
}
