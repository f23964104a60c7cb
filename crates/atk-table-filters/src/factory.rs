//! Strict column factory
//!
//! Unlike the forgiving auto-dispatch in [`crate::dispatch`], the factory only
//! knows the five filter data types and rejects anything else. It is used
//! where column definitions come from configuration and a typo should surface
//! instead of silently degrading to a text filter.

use std::fmt;
use std::str::FromStr;

use atk_core::{AtkError, CellValue, OptionRecord, Result};
use serde::{Deserialize, Serialize};

use crate::column_type::ColumnType;
use crate::descriptor::ColumnMeta;
use crate::dispatch::{ColumnDef, ColumnPredicate, FilterFn};

/// Filter data types known to the factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnDataType {
    Text,
    Number,
    Date,
    Option,
    MultiOption,
}

impl ColumnDataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Option => "option",
            Self::MultiOption => "multiOption",
        }
    }

    pub fn predicate(&self) -> ColumnPredicate {
        match self {
            Self::Text => ColumnPredicate::Text,
            Self::Number => ColumnPredicate::Number,
            Self::Date => ColumnPredicate::Date,
            Self::Option | Self::MultiOption => ColumnPredicate::MultiOption,
        }
    }

    fn column_type(&self) -> ColumnType {
        match self {
            Self::Text => ColumnType::Text,
            Self::Number => ColumnType::Number,
            Self::Date => ColumnType::Date,
            Self::Option => ColumnType::Option,
            Self::MultiOption => ColumnType::MultiOption,
        }
    }
}

impl fmt::Display for ColumnDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnDataType {
    type Err = AtkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "number" => Ok(Self::Number),
            "date" => Ok(Self::Date),
            "option" => Ok(Self::Option),
            "multiOption" => Ok(Self::MultiOption),
            other => Err(AtkError::InvalidColumnDataType(other.to_string())),
        }
    }
}

/// Predicate for a filter data type name, `InvalidColumnDataType` for unknown names
pub fn filter_fn(data_type: &str) -> Result<ColumnPredicate> {
    let data_type = data_type.parse::<ColumnDataType>().inspect_err(|err| {
        tracing::debug!(error = %err, "strict factory rejected column data type");
    })?;
    Ok(data_type.predicate())
}

/// Builder for filterable column definitions
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    id: String,
    data_type: ColumnDataType,
    meta: ColumnMeta,
}

impl ColumnConfig {
    pub fn new(id: impl Into<String>, data_type: ColumnDataType) -> Self {
        Self {
            id: id.into(),
            data_type,
            meta: ColumnMeta::new(data_type.column_type()),
        }
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self::new(id, ColumnDataType::Text)
    }

    pub fn number(id: impl Into<String>) -> Self {
        Self::new(id, ColumnDataType::Number)
    }

    pub fn date(id: impl Into<String>) -> Self {
        Self::new(id, ColumnDataType::Date)
    }

    pub fn option(id: impl Into<String>) -> Self {
        Self::new(id, ColumnDataType::Option)
    }

    pub fn multi_option(id: impl Into<String>) -> Self {
        Self::new(id, ColumnDataType::MultiOption)
    }

    /// Config for a data type given by name
    pub fn named(id: impl Into<String>, data_type: &str) -> Result<Self> {
        Ok(Self::new(id, data_type.parse()?))
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.meta.display_name = Some(name.into());
        self
    }

    /// Keep a more specific semantic type (e.g. `currency`) on the column meta
    pub fn column_type(mut self, column_type: ColumnType) -> Self {
        self.meta.column_type = Some(column_type);
        self
    }

    pub fn options(mut self, options: Vec<OptionRecord>) -> Self {
        self.meta.options = options;
        self
    }

    pub fn transform_options<F>(mut self, transform: F) -> Self
    where
        F: Fn(&CellValue) -> Option<OptionRecord> + Send + Sync + 'static,
    {
        self.meta = self.meta.with_transform(transform);
        self
    }

    pub fn data_type(&self) -> ColumnDataType {
        self.data_type
    }

    pub fn build(self) -> ColumnDef {
        let header = self.meta.display_name.clone();
        ColumnDef {
            id: self.id,
            header,
            meta: self.meta,
            enable_column_filter: Some(true),
            filter_fn: Some(FilterFn::Builtin(self.data_type.predicate())),
        }
    }
}
