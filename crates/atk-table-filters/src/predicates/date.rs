use atk_core::{AtkError, Result, RowAccessor};
use chrono::{DateTime, NaiveDate, Utc};

use crate::descriptor::DateFilter;
use crate::operators::{DateOperator, Operator, OperatorTarget};

/// Match a date cell against a date filter.
///
/// All comparisons work on UTC calendar days: `is after` starts at the day
/// following the filter date, `is before` ends at the start of the filter date,
/// and ranges cover whole days from the first date to the second. A missing
/// cell never matches.
///
/// Returns `InvalidFilterArity` when a single-value operator is given more
/// than one value, or a range operator is not given exactly two.
pub fn match_date(cell: Option<DateTime<Utc>>, filter: &DateFilter) -> Result<bool> {
    let Some(cell) = cell else {
        return Ok(false);
    };

    if filter.values.is_empty() {
        return Ok(true);
    }

    validate_arity(filter)?;

    let Some(d1) = filter.values[0] else {
        return Ok(false);
    };
    let d2 = filter.values.get(1).copied().flatten();

    let (cell, d1) = (cell.date_naive(), d1.date_naive());
    let d2 = d2.map(|d| d.date_naive());

    let matched = match filter.operator {
        DateOperator::Is => cell == d1,
        DateOperator::IsNot => cell != d1,
        DateOperator::IsBefore => cell < d1,
        DateOperator::IsOnOrAfter => cell >= d1,
        DateOperator::IsAfter => cell > d1,
        DateOperator::IsOnOrBefore => cell <= d1,
        DateOperator::IsBetween => match d2 {
            Some(d2) => within_days(cell, d1, d2),
            None => false,
        },
        DateOperator::IsNotBetween => match d2 {
            Some(d2) => !within_days(cell, d1, d2),
            None => false,
        },
    };

    Ok(matched)
}

fn validate_arity(filter: &DateFilter) -> Result<()> {
    let count = filter.values.len();
    match filter.operator.target() {
        OperatorTarget::Single if count > 1 => {
            tracing::warn!(
                operator = filter.operator.label(),
                values = count,
                "date filter arity violation"
            );
            Err(AtkError::InvalidFilterArity(
                "singular operators require at most one filter value".to_string(),
            ))
        }
        OperatorTarget::Plural if count != 2 => {
            tracing::warn!(
                operator = filter.operator.label(),
                values = count,
                "date filter arity violation"
            );
            Err(AtkError::InvalidFilterArity(
                "plural operators require two filter values".to_string(),
            ))
        }
        _ => Ok(()),
    }
}

/// Inclusive day interval; reversed endpoints are swapped
fn within_days(cell: NaiveDate, d1: NaiveDate, d2: NaiveDate) -> bool {
    let (from, to) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
    from <= cell && cell <= to
}

/// Row-level date predicate. Cells without a date reading never match.
pub fn date_filter_fn(
    row: &dyn RowAccessor,
    column_id: &str,
    filter: &DateFilter,
) -> Result<bool> {
    let cell = row.get_value(column_id).and_then(|v| v.to_date());
    match_date(cell, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atk_core::{CellValue, Row};
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        at(y, m, d, 0, 0)
    }

    fn filter(operator: DateOperator, values: &[Option<DateTime<Utc>>]) -> DateFilter {
        DateFilter::new(operator, values.to_vec())
    }

    #[test]
    fn test_is_after_excludes_the_filter_day() {
        let after = filter(DateOperator::IsAfter, &[Some(day(2023, 6, 15))]);
        assert!(!match_date(Some(at(2023, 6, 15, 10, 0)), &after).unwrap());
        assert!(!match_date(Some(at(2023, 6, 15, 23, 59)), &after).unwrap());
        assert!(match_date(Some(at(2023, 6, 16, 0, 1)), &after).unwrap());
    }

    #[test]
    fn test_last_instant_of_day_stays_on_that_day() {
        let d1 = Some(day(2023, 6, 15));
        let cell = Some(
            at(2023, 6, 15, 23, 59)
                + chrono::Duration::seconds(59)
                + chrono::Duration::microseconds(999_500),
        );

        assert!(!match_date(cell, &filter(DateOperator::IsAfter, &[d1])).unwrap());
        assert!(match_date(cell, &filter(DateOperator::IsOnOrBefore, &[d1])).unwrap());
        assert!(match_date(cell, &filter(DateOperator::IsBetween, &[d1, d1])).unwrap());
        assert!(!match_date(cell, &filter(DateOperator::IsNotBetween, &[d1, d1])).unwrap());
    }

    #[test]
    fn test_last_representable_day() {
        let max = Some(DateTime::<Utc>::MAX_UTC);
        assert!(!match_date(max, &filter(DateOperator::IsAfter, &[max])).unwrap());
        assert!(match_date(max, &filter(DateOperator::IsOnOrBefore, &[max])).unwrap());
        assert!(match_date(max, &filter(DateOperator::IsBetween, &[max, max])).unwrap());

        let earlier = Some(day(2023, 6, 15));
        assert!(match_date(max, &filter(DateOperator::IsAfter, &[earlier])).unwrap());
        assert!(match_date(earlier, &filter(DateOperator::IsBetween, &[max, earlier])).unwrap());
    }

    #[test]
    fn test_day_granularity() {
        let d1 = Some(at(2023, 6, 15, 18, 30));
        let cell = Some(at(2023, 6, 15, 1, 0));

        assert!(match_date(cell, &filter(DateOperator::Is, &[d1])).unwrap());
        assert!(!match_date(cell, &filter(DateOperator::IsNot, &[d1])).unwrap());
        assert!(!match_date(cell, &filter(DateOperator::IsBefore, &[d1])).unwrap());
        assert!(match_date(cell, &filter(DateOperator::IsOnOrAfter, &[d1])).unwrap());
        assert!(match_date(cell, &filter(DateOperator::IsOnOrBefore, &[d1])).unwrap());

        let earlier = Some(at(2023, 6, 14, 23, 59));
        assert!(match_date(earlier, &filter(DateOperator::IsBefore, &[d1])).unwrap());
        assert!(!match_date(earlier, &filter(DateOperator::IsOnOrAfter, &[d1])).unwrap());
        assert!(match_date(earlier, &filter(DateOperator::IsOnOrBefore, &[d1])).unwrap());
    }

    #[test]
    fn test_between_covers_whole_days() {
        let between = filter(
            DateOperator::IsBetween,
            &[Some(at(2023, 6, 10, 12, 0)), Some(at(2023, 6, 12, 8, 0))],
        );
        assert!(match_date(Some(at(2023, 6, 10, 0, 0)), &between).unwrap());
        assert!(match_date(Some(at(2023, 6, 12, 23, 59)), &between).unwrap());
        assert!(!match_date(Some(at(2023, 6, 13, 0, 0)), &between).unwrap());

        let not_between = filter(
            DateOperator::IsNotBetween,
            &[Some(day(2023, 6, 10)), Some(day(2023, 6, 12))],
        );
        assert!(!match_date(Some(at(2023, 6, 11, 9, 0)), &not_between).unwrap());
        assert!(match_date(Some(at(2023, 6, 9, 23, 0)), &not_between).unwrap());
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        let between = filter(
            DateOperator::IsBetween,
            &[Some(day(2023, 6, 12)), Some(day(2023, 6, 10))],
        );
        assert!(match_date(Some(at(2023, 6, 11, 9, 0)), &between).unwrap());
    }

    #[test]
    fn test_missing_values() {
        let d1 = Some(day(2023, 6, 15));
        // missing cell never matches, even with no filter values
        assert!(!match_date(None, &filter(DateOperator::Is, &[])).unwrap());
        assert!(match_date(d1, &filter(DateOperator::Is, &[])).unwrap());
        // missing first value
        assert!(!match_date(d1, &filter(DateOperator::IsNot, &[None])).unwrap());
        // missing second bound is a non-match for both range operators
        assert!(!match_date(d1, &filter(DateOperator::IsBetween, &[d1, None])).unwrap());
        assert!(!match_date(d1, &filter(DateOperator::IsNotBetween, &[d1, None])).unwrap());
    }

    #[test]
    fn test_arity_enforcement() {
        let now = Some(at(2024, 1, 1, 12, 0));
        let d1 = Some(day(2023, 6, 15));
        let d2 = Some(day(2023, 6, 20));

        let err = match_date(now, &filter(DateOperator::Is, &[d1, d2])).unwrap_err();
        assert!(matches!(err, AtkError::InvalidFilterArity(_)));

        let err = match_date(now, &filter(DateOperator::IsBetween, &[d1])).unwrap_err();
        assert!(matches!(err, AtkError::InvalidFilterArity(_)));

        let err =
            match_date(now, &filter(DateOperator::IsNotBetween, &[d1, d2, d2])).unwrap_err();
        assert!(matches!(err, AtkError::InvalidFilterArity(_)));
    }

    #[test]
    fn test_row_level_parses_text_dates() {
        let row = Row::new()
            .with("issued", "2023-06-15")
            .with("matures", CellValue::Date(day(2030, 1, 1)))
            .with("garbage", "soon");
        let on = filter(DateOperator::Is, &[Some(day(2023, 6, 15))]);
        assert!(date_filter_fn(&row, "issued", &on).unwrap());
        assert!(!date_filter_fn(&row, "matures", &on).unwrap());
        assert!(!date_filter_fn(&row, "garbage", &filter(DateOperator::Is, &[])).unwrap());
    }
}
