use atk_core::RowAccessor;

use crate::descriptor::TextFilter;
use crate::operators::TextOperator;

/// Match a text cell against a text filter.
///
/// Comparison is case-insensitive and ignores surrounding whitespace on both
/// sides. No values, or a blank first value, matches every row.
pub fn match_text(cell: &str, filter: &TextFilter) -> bool {
    let Some(needle) = filter.values.first() else {
        return true;
    };

    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let haystack = cell.trim().to_lowercase();
    let found = haystack.contains(&needle);

    match filter.operator {
        TextOperator::Contains => found,
        TextOperator::DoesNotContain => !found,
    }
}

/// Row-level text predicate. Missing cells read as empty text.
pub fn text_filter_fn(row: &dyn RowAccessor, column_id: &str, filter: &TextFilter) -> bool {
    let cell = row
        .get_value(column_id)
        .map(|v| v.to_text())
        .unwrap_or_default();
    match_text(&cell, filter)
}
