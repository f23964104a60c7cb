//! Row-set filtering
//!
//! Applies the active column filters and an optional global search to a set
//! of rows, producing the indices of the rows to display.

use atk_core::{Result, RowAccessor};
use serde::{Deserialize, Serialize};

use crate::descriptor::FilterValue;
use crate::dispatch::ColumnDef;

/// The filter state of one column, keyed by column id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    pub id: String,
    pub value: FilterValue,
}

impl ColumnFilter {
    pub fn new(id: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Indices of the rows matching every column filter and the global search.
///
/// Filters on columns that are unknown, have filtering disabled, or have no
/// filter function are ignored. A blank global search matches every row;
/// otherwise a row matches when any column's text contains the search text,
/// case-insensitively.
pub fn filter_rows<R: RowAccessor>(
    rows: &[R],
    columns: &[ColumnDef],
    filters: &[ColumnFilter],
    global_search: Option<&str>,
) -> Result<Vec<usize>> {
    let active: Vec<(&ColumnDef, &ColumnFilter)> = filters
        .iter()
        .filter_map(|filter| {
            let column = columns.iter().find(|c| c.id == filter.id);
            match column {
                Some(column) if column.is_filterable() => Some((column, filter)),
                _ => {
                    tracing::debug!(column_id = %filter.id, "ignoring filter on non-filterable column");
                    None
                }
            }
        })
        .collect();

    let search = global_search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    let mut matched = Vec::with_capacity(rows.len());
    'rows: for (index, row) in rows.iter().enumerate() {
        for (column, filter) in &active {
            let Some(filter_fn) = column.filter_fn.as_ref() else {
                continue;
            };
            if !filter_fn.evaluate(row, &column.id, &filter.value, Some(&column.meta))? {
                continue 'rows;
            }
        }

        if let Some(search) = &search {
            let hit = columns.iter().any(|column| {
                row.get_value(&column.id)
                    .map(|v| v.to_text().to_lowercase().contains(search.as_str()))
                    .unwrap_or(false)
            });
            if !hit {
                continue;
            }
        }

        matched.push(index);
    }

    tracing::trace!(
        rows = rows.len(),
        matched = matched.len(),
        filters = active.len(),
        "filtered rows"
    );

    Ok(matched)
}
