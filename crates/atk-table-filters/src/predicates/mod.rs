//! Per-category filter predicates
//!
//! Each category has a pure `match_*` function working on an already
//! extracted cell, and a row-level `*_filter_fn` entry point that reads the
//! cell from a row and coerces it first.

mod date;
mod multi_option;
mod number;
mod text;

pub use date::{date_filter_fn, match_date};
pub use multi_option::{
    extract_option_values, match_multi_option, multi_option_filter_fn, option_filter_fn,
};
pub(crate) use multi_option::multi_option_filter_with_meta;
pub use number::{match_number, number_filter_fn};
pub use text::{match_text, text_filter_fn};
