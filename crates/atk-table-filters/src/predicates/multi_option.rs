use std::collections::HashSet;

use atk_core::{CellValue, RowAccessor};

use crate::descriptor::{ColumnMeta, OptionFilter};
use crate::operators::OptionOperator;

/// Match a row's option values against a set filter.
///
/// A row without values never matches. A filter without a selection matches
/// every other row. Both sides are deduplicated before comparing.
pub fn match_multi_option<S: AsRef<str>>(cell_values: &[S], filter: &OptionFilter) -> bool {
    if cell_values.is_empty() {
        return false;
    }

    let selected = match filter.values.first() {
        Some(selected) if !selected.is_empty() => selected,
        _ => return true,
    };

    let cell_set: HashSet<&str> = cell_values.iter().map(AsRef::as_ref).collect();
    let selected_set: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let overlap = cell_set.intersection(&selected_set).count();

    match filter.operator {
        OptionOperator::Include | OptionOperator::IncludeAnyOf => overlap > 0,
        OptionOperator::Exclude | OptionOperator::ExcludeIfAnyOf => overlap == 0,
        OptionOperator::IncludeAllOf => overlap == selected_set.len(),
        OptionOperator::ExcludeIfAll => overlap != selected_set.len(),
    }
}

/// Normalize a raw cell into the list of option values it carries.
///
/// Text lists are used as they are, option-record lists are projected to their
/// values, and anything else goes through the column's `transform_option_fn`.
/// Returns `None` when the cell is falsy or cannot be read as options.
pub fn extract_option_values(cell: &CellValue, meta: &ColumnMeta) -> Option<Vec<String>> {
    if !cell.is_truthy() {
        return None;
    }

    let items: &[CellValue] = match cell {
        CellValue::List(items) => items,
        single => std::slice::from_ref(single),
    };

    if items.iter().all(|item| matches!(item, CellValue::Text(_))) {
        return Some(items.iter().map(CellValue::to_text).collect());
    }

    if items.iter().all(|item| matches!(item, CellValue::Option(_))) {
        return Some(
            items
                .iter()
                .filter_map(|item| match item {
                    CellValue::Option(record) => Some(record.value.clone()),
                    _ => None,
                })
                .collect(),
        );
    }

    let Some(transform) = meta.transform_option_fn.as_ref() else {
        tracing::trace!("option cell has no transform, treating as non-match");
        return None;
    };

    Some(
        items
            .iter()
            .filter_map(|item| transform(item))
            .map(|record| record.value)
            .collect(),
    )
}

/// Row-level multi-option predicate.
///
/// Needs the filter's column metadata; without it, or with a cell that cannot
/// be read as options, the row does not match.
pub fn multi_option_filter_fn(
    row: &dyn RowAccessor,
    column_id: &str,
    filter: &OptionFilter,
) -> bool {
    multi_option_filter_with_meta(row, column_id, filter, None)
}

/// Like [`multi_option_filter_fn`], reading `column_meta` when the filter
/// carries no metadata of its own
pub(crate) fn multi_option_filter_with_meta(
    row: &dyn RowAccessor,
    column_id: &str,
    filter: &OptionFilter,
    column_meta: Option<&ColumnMeta>,
) -> bool {
    let Some(cell) = row.get_value(column_id) else {
        return false;
    };
    let Some(meta) = filter.column_meta.as_ref().or(column_meta) else {
        return false;
    };

    match extract_option_values(cell, meta) {
        Some(values) => match_multi_option(&values, filter),
        None => false,
    }
}

/// Row-level single-option predicate, sharing the multi-option set logic
pub fn option_filter_fn(row: &dyn RowAccessor, column_id: &str, filter: &OptionFilter) -> bool {
    multi_option_filter_fn(row, column_id, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column_type::ColumnType;
    use atk_core::{OptionRecord, Row};

    fn filter(operator: OptionOperator, selected: &[&str]) -> OptionFilter {
        OptionFilter::new(
            operator,
            vec![selected.iter().map(|s| s.to_string()).collect()],
        )
    }

    #[test]
    fn test_set_operators() {
        let cell = ["a", "b"];
        let selected = ["a", "c"];
        assert!(match_multi_option(&cell, &filter(OptionOperator::Include, &selected)));
        assert!(match_multi_option(&cell, &filter(OptionOperator::IncludeAnyOf, &selected)));
        assert!(!match_multi_option(&cell, &filter(OptionOperator::IncludeAllOf, &selected)));
        assert!(!match_multi_option(&cell, &filter(OptionOperator::Exclude, &selected)));
        assert!(!match_multi_option(&cell, &filter(OptionOperator::ExcludeIfAnyOf, &selected)));
        assert!(match_multi_option(&cell, &filter(OptionOperator::ExcludeIfAll, &selected)));
    }

    #[test]
    fn test_superset_matches_include_all() {
        let cell = ["a", "b", "c"];
        assert!(match_multi_option(&cell, &filter(OptionOperator::IncludeAllOf, &["a", "c"])));
        assert!(!match_multi_option(&cell, &filter(OptionOperator::ExcludeIfAll, &["a", "c"])));
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let cell = ["a", "a", "b"];
        assert!(match_multi_option(
            &cell,
            &filter(OptionOperator::IncludeAllOf, &["a", "a", "b"])
        ));
    }

    #[test]
    fn test_empty_cell_never_matches() {
        let empty: [&str; 0] = [];
        assert!(!match_multi_option(&empty, &OptionFilter::new(OptionOperator::Include, vec![])));
        assert!(!match_multi_option(&empty, &filter(OptionOperator::Exclude, &["a"])));
    }

    #[test]
    fn test_empty_selection_matches() {
        assert!(match_multi_option(&["a"], &OptionFilter::new(OptionOperator::Exclude, vec![])));
        assert!(match_multi_option(&["a"], &filter(OptionOperator::IncludeAllOf, &[])));
    }

    #[test]
    fn test_extract_from_cell_shapes() {
        let meta = ColumnMeta::new(ColumnType::Tags);

        let text = CellValue::text_list(["equity", "bond"]);
        assert_eq!(
            extract_option_values(&text, &meta),
            Some(vec!["equity".to_string(), "bond".to_string()])
        );

        let records = CellValue::List(vec![
            CellValue::Option(OptionRecord::new("admin", "Admin")),
            CellValue::Option(OptionRecord::new("minter", "Minter")),
        ]);
        assert_eq!(
            extract_option_values(&records, &meta),
            Some(vec!["admin".to_string(), "minter".to_string()])
        );

        let single = CellValue::text("active");
        assert_eq!(
            extract_option_values(&single, &meta),
            Some(vec!["active".to_string()])
        );

        assert_eq!(extract_option_values(&CellValue::Null, &meta), None);
        assert_eq!(extract_option_values(&CellValue::text(""), &meta), None);
        // numbers without a transform cannot be read as options
        let numbers = CellValue::List(vec![CellValue::Number(1.0)]);
        assert_eq!(extract_option_values(&numbers, &meta), None);
    }

    #[test]
    fn test_extract_with_transform() {
        let meta = ColumnMeta::new(ColumnType::Status).with_transform(|item| match item {
            CellValue::Bool(true) => Some(OptionRecord::new("paused", "Paused")),
            CellValue::Bool(false) => Some(OptionRecord::new("live", "Live")),
            _ => None,
        });
        let cell = CellValue::List(vec![
            CellValue::Bool(true),
            CellValue::Number(3.0),
            CellValue::Bool(false),
        ]);
        assert_eq!(
            extract_option_values(&cell, &meta),
            Some(vec!["paused".to_string(), "live".to_string()])
        );
    }

    #[test]
    fn test_row_level_requires_column_meta() {
        let row = Row::new().with("roles", CellValue::text_list(["admin", "minter"]));
        let without_meta = filter(OptionOperator::Include, &["admin"]);
        assert!(!multi_option_filter_fn(&row, "roles", &without_meta));

        let with_meta = without_meta.with_column_meta(ColumnMeta::new(ColumnType::MultiSelect));
        assert!(multi_option_filter_fn(&row, "roles", &with_meta));
        assert!(option_filter_fn(&row, "roles", &with_meta));
        assert!(!multi_option_filter_fn(&row, "missing", &with_meta));
    }
}
