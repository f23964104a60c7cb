//! Flexible adapters
//!
//! Column filter state reaches the table in two shapes: a bare scalar, as
//! round-tripped through shareable URLs, or a full operator descriptor built
//! by the filter builder. These adapters normalize both into descriptors so
//! the table never needs to know which shape is live.

use std::borrow::Cow;

use atk_core::{coerce_number, RowAccessor};

use crate::descriptor::{
    NumberFilter, NumberFilterInput, NumberScalar, TextFilter, TextFilterInput,
};
use crate::operators::{NumberOperator, TextOperator};
use crate::predicates::{number_filter_fn, text_filter_fn};

/// Normalize number filter state.
///
/// Scalars become an `is` filter after JS-style `Number()` coercion, so blank
/// text reads as `0`. Returns `None` when a scalar coerces to NaN, meaning
/// the filter passes every row.
pub fn adapt_number(input: &NumberFilterInput) -> Option<Cow<'_, NumberFilter>> {
    let value = match input {
        NumberFilterInput::Descriptor(filter) => return Some(Cow::Borrowed(filter)),
        NumberFilterInput::Scalar(NumberScalar::Number(n)) => *n,
        NumberFilterInput::Scalar(NumberScalar::Text(text)) => coerce_number(text),
    };

    if value.is_nan() {
        return None;
    }

    Some(Cow::Owned(NumberFilter::new(NumberOperator::Is, vec![value])))
}

/// Normalize text filter state; scalars become a `contains` filter
pub fn adapt_text(input: &TextFilterInput) -> Cow<'_, TextFilter> {
    match input {
        TextFilterInput::Scalar(text) => Cow::Owned(TextFilter::new(
            TextOperator::Contains,
            vec![text.clone()],
        )),
        TextFilterInput::Descriptor(filter) => Cow::Borrowed(filter),
    }
}

/// Row-level number predicate accepting either filter shape
pub fn flexible_number_filter_fn(
    row: &dyn RowAccessor,
    column_id: &str,
    input: &NumberFilterInput,
) -> bool {
    match adapt_number(input) {
        Some(filter) => number_filter_fn(row, column_id, &filter),
        None => true,
    }
}

/// Row-level text predicate accepting either filter shape
pub fn flexible_text_filter_fn(
    row: &dyn RowAccessor,
    column_id: &str,
    input: &TextFilterInput,
) -> bool {
    text_filter_fn(row, column_id, &adapt_text(input))
}
