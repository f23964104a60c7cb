//! Filter descriptors and column metadata

use std::fmt;
use std::sync::Arc;

use atk_core::{CellValue, OptionRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column_type::ColumnType;
use crate::operators::{
    DateOperator, FilterCategory, NumberOperator, Operator, OptionOperator, TextOperator,
};

/// Maps a raw cell element to an option record, `None` drops the element
pub type TransformOptionFn = Arc<dyn Fn(&CellValue) -> Option<OptionRecord> + Send + Sync>;

/// Column metadata, shared by the column definition and the filters evaluated on it
#[derive(Clone, Default)]
pub struct ColumnMeta {
    /// Declared semantic type of the column
    pub column_type: Option<ColumnType>,
    pub display_name: Option<String>,
    /// Options offered by the filter builder for option columns
    pub options: Vec<OptionRecord>,
    pub transform_option_fn: Option<TransformOptionFn>,
}

impl ColumnMeta {
    pub fn new(column_type: ColumnType) -> Self {
        Self {
            column_type: Some(column_type),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_options(mut self, options: Vec<OptionRecord>) -> Self {
        self.options = options;
        self
    }

    pub fn with_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&CellValue) -> Option<OptionRecord> + Send + Sync + 'static,
    {
        self.transform_option_fn = Some(Arc::new(transform));
        self
    }
}

impl fmt::Debug for ColumnMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnMeta")
            .field("column_type", &self.column_type)
            .field("display_name", &self.display_name)
            .field("options", &self.options)
            .field(
                "transform_option_fn",
                &self.transform_option_fn.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

/// A user-supplied filter: an operator of one category and its comparison values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDescriptor<Op, V> {
    pub operator: Op,
    pub values: Vec<V>,
    #[serde(skip)]
    pub column_meta: Option<ColumnMeta>,
}

impl<Op: Operator, V> FilterDescriptor<Op, V> {
    pub fn new(operator: Op, values: Vec<V>) -> Self {
        Self {
            operator,
            values,
            column_meta: None,
        }
    }

    pub fn with_column_meta(mut self, meta: ColumnMeta) -> Self {
        self.column_meta = Some(meta);
        self
    }

    pub fn category(&self) -> FilterCategory {
        Op::CATEGORY
    }

    /// Whether the filter carries no comparison values at all
    pub fn is_vacuous(&self) -> bool {
        self.values.is_empty()
    }
}

impl<Op: PartialEq, V: PartialEq> PartialEq for FilterDescriptor<Op, V> {
    // Column metadata is context, not part of the filter's identity
    fn eq(&self, other: &Self) -> bool {
        self.operator == other.operator && self.values == other.values
    }
}

pub type TextFilter = FilterDescriptor<TextOperator, String>;
pub type NumberFilter = FilterDescriptor<NumberOperator, f64>;
/// An absent entry models a half-filled range picker
pub type DateFilter = FilterDescriptor<DateOperator, Option<DateTime<Utc>>>;
/// `values[0]` is the list of selected option values
pub type OptionFilter = FilterDescriptor<OptionOperator, Vec<String>>;

/// A bare scalar number filter, as round-tripped through URL query parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberScalar {
    Number(f64),
    Text(String),
}

/// Number filter state in either of its two live shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberFilterInput {
    Scalar(NumberScalar),
    Descriptor(NumberFilter),
}

impl From<f64> for NumberFilterInput {
    fn from(value: f64) -> Self {
        Self::Scalar(NumberScalar::Number(value))
    }
}

impl From<&str> for NumberFilterInput {
    fn from(value: &str) -> Self {
        Self::Scalar(NumberScalar::Text(value.to_string()))
    }
}

impl From<NumberFilter> for NumberFilterInput {
    fn from(value: NumberFilter) -> Self {
        Self::Descriptor(value)
    }
}

/// Text filter state in either of its two live shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextFilterInput {
    Scalar(String),
    Descriptor(TextFilter),
}

impl From<&str> for TextFilterInput {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for TextFilterInput {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<TextFilter> for TextFilterInput {
    fn from(value: TextFilter) -> Self {
        Self::Descriptor(value)
    }
}

/// The filter state of one column, tagged with its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "filter")]
pub enum FilterValue {
    Text(TextFilterInput),
    Number(NumberFilterInput),
    Date(DateFilter),
    /// Used for both option and multi-option columns
    Option(OptionFilter),
}

impl FilterValue {
    pub fn category_name(&self) -> &'static str {
        match self {
            Self::Text(_) => FilterCategory::Text.as_str(),
            Self::Number(_) => FilterCategory::Number.as_str(),
            Self::Date(_) => FilterCategory::Date.as_str(),
            Self::Option(_) => FilterCategory::MultiOption.as_str(),
        }
    }
}

impl From<TextFilter> for FilterValue {
    fn from(value: TextFilter) -> Self {
        Self::Text(TextFilterInput::Descriptor(value))
    }
}

impl From<NumberFilter> for FilterValue {
    fn from(value: NumberFilter) -> Self {
        Self::Number(NumberFilterInput::Descriptor(value))
    }
}

impl From<DateFilter> for FilterValue {
    fn from(value: DateFilter) -> Self {
        Self::Date(value)
    }
}

impl From<OptionFilter> for FilterValue {
    fn from(value: OptionFilter) -> Self {
        Self::Option(value)
    }
}
