//! Type-to-predicate dispatch and column decoration

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use atk_core::{AtkError, Result, RowAccessor};

use crate::adapters::{flexible_number_filter_fn, flexible_text_filter_fn};
use crate::column_type::ColumnType;
use crate::descriptor::{ColumnMeta, FilterValue};
use crate::operators::FilterCategory;
use crate::predicates::{date_filter_fn, multi_option_filter_with_meta};

/// One of the built-in category predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnPredicate {
    /// Text predicate behind the flexible text adapter
    Text,
    /// Number predicate behind the flexible number adapter
    Number,
    Date,
    /// Set predicate, used for option and multi-option columns
    MultiOption,
}

impl ColumnPredicate {
    pub fn category(&self) -> FilterCategory {
        match self {
            Self::Text => FilterCategory::Text,
            Self::Number => FilterCategory::Number,
            Self::Date => FilterCategory::Date,
            Self::MultiOption => FilterCategory::MultiOption,
        }
    }

    /// Decide whether a row matches the column's filter value.
    ///
    /// Option filters evaluated here read `meta` when they carry no column
    /// metadata of their own.
    pub fn evaluate(
        &self,
        row: &dyn RowAccessor,
        column_id: &str,
        value: &FilterValue,
        meta: Option<&ColumnMeta>,
    ) -> Result<bool> {
        match (self, value) {
            (Self::Text, FilterValue::Text(input)) => {
                Ok(flexible_text_filter_fn(row, column_id, input))
            }
            (Self::Number, FilterValue::Number(input)) => {
                Ok(flexible_number_filter_fn(row, column_id, input))
            }
            (Self::Date, FilterValue::Date(filter)) => date_filter_fn(row, column_id, filter),
            (Self::MultiOption, FilterValue::Option(filter)) => {
                Ok(multi_option_filter_with_meta(row, column_id, filter, meta))
            }
            (predicate, value) => Err(AtkError::CategoryMismatch {
                expected: predicate.category().as_str(),
                found: value.category_name(),
            }),
        }
    }
}

/// Map a declared column type to the predicate responsible for it.
///
/// Total: a missing type, and the `NoFilter` sentinel, resolve to the text
/// predicate.
pub fn resolve_predicate(column_type: Option<ColumnType>) -> ColumnPredicate {
    let Some(category) = column_type.and_then(|t| t.category()) else {
        return ColumnPredicate::Text;
    };

    match category {
        FilterCategory::Text => ColumnPredicate::Text,
        FilterCategory::Number => ColumnPredicate::Number,
        FilterCategory::Date => ColumnPredicate::Date,
        FilterCategory::Option | FilterCategory::MultiOption => ColumnPredicate::MultiOption,
    }
}

/// Like [`resolve_predicate`] for a raw type name; unknown and empty names
/// fall back to the text predicate.
pub fn resolve_predicate_name(type_name: Option<&str>) -> ColumnPredicate {
    resolve_predicate(type_name.and_then(ColumnType::from_name))
}

/// Caller-supplied predicate
pub type CustomFilterFn =
    Arc<dyn Fn(&dyn RowAccessor, &str, &FilterValue) -> bool + Send + Sync>;

/// The filter function attached to a column
#[derive(Clone)]
pub enum FilterFn {
    Builtin(ColumnPredicate),
    Custom(CustomFilterFn),
}

impl FilterFn {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&dyn RowAccessor, &str, &FilterValue) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn evaluate(
        &self,
        row: &dyn RowAccessor,
        column_id: &str,
        value: &FilterValue,
        meta: Option<&ColumnMeta>,
    ) -> Result<bool> {
        match self {
            Self::Builtin(predicate) => predicate.evaluate(row, column_id, value, meta),
            Self::Custom(f) => Ok(f(row, column_id, value)),
        }
    }

    pub fn as_builtin(&self) -> Option<ColumnPredicate> {
        match self {
            Self::Builtin(predicate) => Some(*predicate),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Debug for FilterFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(predicate) => f.debug_tuple("Builtin").field(predicate).finish(),
            Self::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

/// A table column definition as seen by the filter engine
#[derive(Debug, Clone, Default)]
pub struct ColumnDef {
    pub id: String,
    pub header: Option<String>,
    pub meta: ColumnMeta,
    /// `Some(false)` explicitly disables filtering on the column
    pub enable_column_filter: Option<bool>,
    pub filter_fn: Option<FilterFn>,
}

impl ColumnDef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, column_type: ColumnType) -> Self {
        self.meta.column_type = Some(column_type);
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_meta(mut self, meta: ColumnMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_filter_fn(mut self, filter_fn: FilterFn) -> Self {
        self.filter_fn = Some(filter_fn);
        self
    }

    pub fn with_filter_enabled(mut self, enabled: bool) -> Self {
        self.enable_column_filter = Some(enabled);
        self
    }

    pub fn is_filterable(&self) -> bool {
        self.enable_column_filter != Some(false) && self.filter_fn.is_some()
    }
}

/// Attach the predicate matching the column's declared type.
///
/// The column comes back borrowed and untouched when it already has a filter
/// function, when filtering is disabled on it, or when its type is the
/// `NoFilter` sentinel. Otherwise an owned copy with the resolved predicate is
/// returned.
pub fn decorate_column(column: &ColumnDef) -> Cow<'_, ColumnDef> {
    if column.filter_fn.is_some()
        || column.enable_column_filter == Some(false)
        || column.meta.column_type == Some(ColumnType::NoFilter)
    {
        return Cow::Borrowed(column);
    }

    let predicate = resolve_predicate(column.meta.column_type);
    tracing::trace!(
        column_id = %column.id,
        column_type = ?column.meta.column_type,
        predicate = ?predicate,
        "attaching filter predicate"
    );

    let mut decorated = column.clone();
    decorated.filter_fn = Some(FilterFn::Builtin(predicate));
    Cow::Owned(decorated)
}

/// Batch form of [`decorate_column`], order-preserving
pub fn decorate_columns(columns: &[ColumnDef]) -> Vec<ColumnDef> {
    columns
        .iter()
        .map(|column| decorate_column(column).into_owned())
        .collect()
}
