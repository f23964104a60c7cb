//! Semantic column types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::operators::FilterCategory;

/// Declared semantic type of a table column.
///
/// The type decides which predicate filters the column. `NoFilter` is the
/// explicit opt-out sentinel and is serialized as `"none"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnType {
    // Text-like
    Text,
    Address,
    Email,
    Url,
    Hash,

    // Number-like
    Number,
    Currency,
    Percentage,
    Decimals,

    // Date-like
    Date,
    DateTime,

    // Option-like
    Option,
    MultiOption,
    MultiSelect,
    Status,
    Badge,
    Tags,

    #[serde(rename = "none")]
    NoFilter,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Address => "address",
            Self::Email => "email",
            Self::Url => "url",
            Self::Hash => "hash",
            Self::Number => "number",
            Self::Currency => "currency",
            Self::Percentage => "percentage",
            Self::Decimals => "decimals",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Option => "option",
            Self::MultiOption => "multiOption",
            Self::MultiSelect => "multiSelect",
            Self::Status => "status",
            Self::Badge => "badge",
            Self::Tags => "tags",
            Self::NoFilter => "none",
        }
    }

    pub fn all() -> &'static [ColumnType] {
        &[
            Self::Text,
            Self::Address,
            Self::Email,
            Self::Url,
            Self::Hash,
            Self::Number,
            Self::Currency,
            Self::Percentage,
            Self::Decimals,
            Self::Date,
            Self::DateTime,
            Self::Option,
            Self::MultiOption,
            Self::MultiSelect,
            Self::Status,
            Self::Badge,
            Self::Tags,
            Self::NoFilter,
        ]
    }

    /// Filter category this type is evaluated with, `None` for the opt-out sentinel
    pub fn category(&self) -> Option<FilterCategory> {
        match self {
            Self::Text | Self::Address | Self::Email | Self::Url | Self::Hash => {
                Some(FilterCategory::Text)
            }
            Self::Number | Self::Currency | Self::Percentage | Self::Decimals => {
                Some(FilterCategory::Number)
            }
            Self::Date | Self::DateTime => Some(FilterCategory::Date),
            Self::Option => Some(FilterCategory::Option),
            Self::MultiOption | Self::MultiSelect | Self::Status | Self::Badge | Self::Tags => {
                Some(FilterCategory::MultiOption)
            }
            Self::NoFilter => None,
        }
    }

    /// Parse a type name, `None` for names outside the known set
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = atk_core::AtkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| atk_core::AtkError::InvalidColumnDataType(s.to_string()))
    }
}
