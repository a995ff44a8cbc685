//! Grid configuration.
//!
//! ```toml
//! columns = 26
//! rows = 100
//! ```

use cellgrid_engine::engine::{DEFAULT_ROWS, GridShape, MAX_COLUMNS};
use serde::Deserialize;

use crate::error::Result;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of columns, taken from the start of `a..z`.
    pub columns: u8,
    pub rows: u32,
}

impl GridConfig {
    /// Parse a config from TOML. Missing keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(text)?;
        config.shape()?;
        Ok(config)
    }

    /// The validated grid shape for this config.
    pub fn shape(&self) -> Result<GridShape> {
        Ok(GridShape::new(self.columns, self.rows)?)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            columns: MAX_COLUMNS,
            rows: DEFAULT_ROWS,
        }
    }
}
