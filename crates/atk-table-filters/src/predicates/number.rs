use atk_core::RowAccessor;

use crate::descriptor::NumberFilter;
use crate::operators::NumberOperator;

/// Match a number cell against a number filter.
///
/// Only `values[0]` (and `values[1]` for ranges) are read. A missing
/// comparison value or range bound matches every row, and ranges are
/// inclusive on both ends.
pub fn match_number(cell: f64, filter: &NumberFilter) -> bool {
    let Some(&first) = filter.values.first() else {
        return true;
    };

    match filter.operator {
        NumberOperator::Is => cell == first,
        NumberOperator::IsNot => cell != first,
        NumberOperator::GreaterThan => cell > first,
        NumberOperator::GreaterThanOrEqual => cell >= first,
        NumberOperator::LessThan => cell < first,
        NumberOperator::LessThanOrEqual => cell <= first,
        NumberOperator::IsBetween => match filter.values.get(1) {
            Some(&second) => in_range(cell, first, second),
            None => true,
        },
        NumberOperator::IsNotBetween => match filter.values.get(1) {
            Some(&second) => !in_range(cell, first, second),
            None => true,
        },
    }
}

fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Row-level number predicate. Cells without a numeric reading are NaN.
pub fn number_filter_fn(row: &dyn RowAccessor, column_id: &str, filter: &NumberFilter) -> bool {
    let cell = row
        .get_value(column_id)
        .map(|v| v.to_number())
        .unwrap_or(f64::NAN);
    match_number(cell, filter)
}
