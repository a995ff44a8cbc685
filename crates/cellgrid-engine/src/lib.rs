//! cellgrid_engine - Formula engine for the cellgrid spreadsheet model.

pub mod engine;
