use cellgrid_engine::engine::Coordinate;
use parking_lot::RwLock;
use std::sync::Arc;

use super::Sheet;
use crate::columns::ColumnDefinition;
use crate::error::Result;
use crate::grid::Grid;

/// A sheet shared between threads with a single writer at a time.
///
/// A write holds the lock for the whole evaluate-and-store step, so readers
/// see either the grid before the write or after it.
#[derive(Clone, Debug, Default)]
pub struct SharedSheet {
    inner: Arc<RwLock<Sheet>>,
}

impl SharedSheet {
    pub fn new(sheet: Sheet) -> Self {
        SharedSheet {
            inner: Arc::new(RwLock::new(sheet)),
        }
    }

    pub fn set_cell(&self, coordinate: &Coordinate, input: &str) -> Result<()> {
        self.inner.write().set_cell(coordinate, input)
    }

    pub fn cell_value(&self, coordinate: &Coordinate) -> Result<String> {
        self.inner.read().cell_value(coordinate).map(str::to_string)
    }

    pub fn columns(&self) -> Vec<ColumnDefinition> {
        self.inner.read().columns().to_vec()
    }

    pub fn snapshot(&self) -> Grid {
        self.inner.read().snapshot()
    }

    /// Run `f` with shared access to the sheet.
    pub fn read<R>(&self, f: impl FnOnce(&Sheet) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` with exclusive access to the sheet.
    pub fn write<R>(&self, f: impl FnOnce(&mut Sheet) -> R) -> R {
        f(&mut *self.inner.write())
    }
}
