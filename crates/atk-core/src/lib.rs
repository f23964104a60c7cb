//! ATK Core - shared types for the asset console table layer
//!
//! This crate provides the pieces every other ATK crate depends on:
//!
//! - `AtkError` / `Result` - the error taxonomy of the filter engine
//! - `CellValue` - the raw value a table row exposes for a column
//! - `OptionRecord` - a `{value, label}` pair used by option columns
//! - `Row` / `RowAccessor` - how predicates read cells from a row

mod error;
mod row;
mod types;

pub use error::*;
pub use row::*;
pub use types::*;
