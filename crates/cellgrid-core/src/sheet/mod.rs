//! The sheet interface consumed by UIs.

mod labels;
mod ops;
mod shared;
mod state;

pub use shared::SharedSheet;
pub use state::Sheet;
