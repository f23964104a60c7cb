//! Operator catalog
//!
//! Each filter category has a closed set of operators. Every operator knows its
//! display label, its arity (one comparison value or a two-value range), its
//! logical negation and the operator to switch to when the number of selected
//! values crosses the single/plural boundary.

use std::fmt;
use std::str::FromStr;

use atk_core::AtkError;
use serde::{Deserialize, Serialize};

/// Filter categories, each with its own operator vocabulary and value shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCategory {
    Text,
    Number,
    Date,
    Option,
    MultiOption,
}

impl FilterCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Option => "option",
            Self::MultiOption => "multiOption",
        }
    }

    pub fn all() -> &'static [FilterCategory] {
        &[
            Self::Text,
            Self::Number,
            Self::Date,
            Self::Option,
            Self::MultiOption,
        ]
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How many comparison values an operator expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorTarget {
    /// At most one value
    Single,
    /// Exactly two values (a range)
    Plural,
}

/// Behaviour shared by every category's operator enum
pub trait Operator: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Category this operator belongs to
    const CATEGORY: FilterCategory;

    /// Display label, also the serialized form
    fn label(&self) -> &'static str;

    fn target(&self) -> OperatorTarget;

    /// The logically opposite operator within the category
    fn negation(&self) -> Self;

    /// Whether this operator is the negative form of a pair
    fn is_negated(&self) -> bool;

    /// Operator to switch to when the filter grows from one value to several
    fn plural_form(&self) -> Option<Self> {
        None
    }

    /// Operator to switch to when the filter shrinks from several values to one
    fn singular_form(&self) -> Option<Self> {
        None
    }

    /// All operators of the category in display order
    fn all() -> &'static [Self];

    fn from_label(label: &str) -> Result<Self, AtkError> {
        Self::all()
            .iter()
            .copied()
            .find(|op| op.label() == label)
            .ok_or_else(|| AtkError::UnknownOperator {
                category: Self::CATEGORY.as_str(),
                operator: label.to_string(),
            })
    }
}

/// Pick the operator to use after the number of filter values changed.
///
/// The operator only changes when the count moves across the single/plural
/// boundary: growing from at most one value to two or more switches to the
/// plural form, shrinking from two or more to at most one switches to the
/// singular form. Operators without a counterpart are kept.
pub fn determine_new_operator<O: Operator>(current: O, old_len: usize, new_len: usize) -> O {
    if old_len == new_len || (old_len >= 2 && new_len >= 2) || (old_len <= 1 && new_len <= 1) {
        return current;
    }

    if old_len < new_len && new_len >= 2 {
        return current.plural_form().unwrap_or(current);
    }

    if old_len > new_len && new_len <= 1 {
        return current.singular_form().unwrap_or(current);
    }

    current
}

// ============ Text ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextOperator {
    #[default]
    #[serde(rename = "contains")]
    Contains,
    #[serde(rename = "does not contain")]
    DoesNotContain,
}

impl Operator for TextOperator {
    const CATEGORY: FilterCategory = FilterCategory::Text;

    fn label(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::DoesNotContain => "does not contain",
        }
    }

    fn target(&self) -> OperatorTarget {
        OperatorTarget::Single
    }

    fn negation(&self) -> Self {
        match self {
            Self::Contains => Self::DoesNotContain,
            Self::DoesNotContain => Self::Contains,
        }
    }

    fn is_negated(&self) -> bool {
        matches!(self, Self::DoesNotContain)
    }

    fn all() -> &'static [Self] {
        &[Self::Contains, Self::DoesNotContain]
    }
}

// ============ Number ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NumberOperator {
    #[default]
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "is not")]
    IsNot,
    #[serde(rename = "is greater than")]
    GreaterThan,
    #[serde(rename = "is greater than or equal to")]
    GreaterThanOrEqual,
    #[serde(rename = "is less than")]
    LessThan,
    #[serde(rename = "is less than or equal to")]
    LessThanOrEqual,
    #[serde(rename = "is between")]
    IsBetween,
    #[serde(rename = "is not between")]
    IsNotBetween,
}

impl Operator for NumberOperator {
    const CATEGORY: FilterCategory = FilterCategory::Number;

    fn label(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::GreaterThan => "is greater than",
            Self::GreaterThanOrEqual => "is greater than or equal to",
            Self::LessThan => "is less than",
            Self::LessThanOrEqual => "is less than or equal to",
            Self::IsBetween => "is between",
            Self::IsNotBetween => "is not between",
        }
    }

    fn target(&self) -> OperatorTarget {
        match self {
            Self::IsBetween | Self::IsNotBetween => OperatorTarget::Plural,
            _ => OperatorTarget::Single,
        }
    }

    fn negation(&self) -> Self {
        match self {
            Self::Is => Self::IsNot,
            Self::IsNot => Self::Is,
            Self::GreaterThan => Self::LessThanOrEqual,
            Self::LessThanOrEqual => Self::GreaterThan,
            Self::GreaterThanOrEqual => Self::LessThan,
            Self::LessThan => Self::GreaterThanOrEqual,
            Self::IsBetween => Self::IsNotBetween,
            Self::IsNotBetween => Self::IsBetween,
        }
    }

    fn is_negated(&self) -> bool {
        matches!(self, Self::IsNot | Self::IsNotBetween)
    }

    fn plural_form(&self) -> Option<Self> {
        match self {
            Self::IsNot => Some(Self::IsNotBetween),
            Self::IsBetween | Self::IsNotBetween => None,
            _ => Some(Self::IsBetween),
        }
    }

    fn singular_form(&self) -> Option<Self> {
        match self {
            Self::IsBetween => Some(Self::Is),
            Self::IsNotBetween => Some(Self::IsNot),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Is,
            Self::IsNot,
            Self::GreaterThan,
            Self::GreaterThanOrEqual,
            Self::LessThan,
            Self::LessThanOrEqual,
            Self::IsBetween,
            Self::IsNotBetween,
        ]
    }
}

// ============ Date ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateOperator {
    #[default]
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "is not")]
    IsNot,
    #[serde(rename = "is before")]
    IsBefore,
    #[serde(rename = "is on or after")]
    IsOnOrAfter,
    #[serde(rename = "is after")]
    IsAfter,
    #[serde(rename = "is on or before")]
    IsOnOrBefore,
    #[serde(rename = "is between")]
    IsBetween,
    #[serde(rename = "is not between")]
    IsNotBetween,
}

impl Operator for DateOperator {
    const CATEGORY: FilterCategory = FilterCategory::Date;

    fn label(&self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is not",
            Self::IsBefore => "is before",
            Self::IsOnOrAfter => "is on or after",
            Self::IsAfter => "is after",
            Self::IsOnOrBefore => "is on or before",
            Self::IsBetween => "is between",
            Self::IsNotBetween => "is not between",
        }
    }

    fn target(&self) -> OperatorTarget {
        match self {
            Self::IsBetween | Self::IsNotBetween => OperatorTarget::Plural,
            _ => OperatorTarget::Single,
        }
    }

    fn negation(&self) -> Self {
        match self {
            Self::Is => Self::IsNot,
            Self::IsNot => Self::Is,
            Self::IsBefore => Self::IsOnOrAfter,
            Self::IsOnOrAfter => Self::IsBefore,
            Self::IsAfter => Self::IsOnOrBefore,
            Self::IsOnOrBefore => Self::IsAfter,
            Self::IsBetween => Self::IsNotBetween,
            Self::IsNotBetween => Self::IsBetween,
        }
    }

    fn is_negated(&self) -> bool {
        matches!(self, Self::IsNot | Self::IsNotBetween)
    }

    fn plural_form(&self) -> Option<Self> {
        match self {
            Self::IsNot => Some(Self::IsNotBetween),
            Self::IsBetween | Self::IsNotBetween => None,
            _ => Some(Self::IsBetween),
        }
    }

    fn singular_form(&self) -> Option<Self> {
        match self {
            Self::IsBetween => Some(Self::Is),
            Self::IsNotBetween => Some(Self::IsNot),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Is,
            Self::IsNot,
            Self::IsBefore,
            Self::IsOnOrAfter,
            Self::IsAfter,
            Self::IsOnOrBefore,
            Self::IsBetween,
            Self::IsNotBetween,
        ]
    }
}

// ============ Option / MultiOption ============

/// Set operators shared by option and multi-option columns.
///
/// `values[0]` of an option filter is itself the list of selected options, so
/// every operator here is single-target in the arity sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OptionOperator {
    #[default]
    #[serde(rename = "include")]
    Include,
    #[serde(rename = "include any of")]
    IncludeAnyOf,
    #[serde(rename = "exclude")]
    Exclude,
    #[serde(rename = "exclude if any of")]
    ExcludeIfAnyOf,
    #[serde(rename = "include all of")]
    IncludeAllOf,
    #[serde(rename = "exclude if all")]
    ExcludeIfAll,
}

impl Operator for OptionOperator {
    const CATEGORY: FilterCategory = FilterCategory::MultiOption;

    fn label(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::IncludeAnyOf => "include any of",
            Self::Exclude => "exclude",
            Self::ExcludeIfAnyOf => "exclude if any of",
            Self::IncludeAllOf => "include all of",
            Self::ExcludeIfAll => "exclude if all",
        }
    }

    fn target(&self) -> OperatorTarget {
        OperatorTarget::Single
    }

    fn negation(&self) -> Self {
        match self {
            Self::Include => Self::Exclude,
            Self::Exclude => Self::Include,
            Self::IncludeAnyOf => Self::ExcludeIfAnyOf,
            Self::ExcludeIfAnyOf => Self::IncludeAnyOf,
            Self::IncludeAllOf => Self::ExcludeIfAll,
            Self::ExcludeIfAll => Self::IncludeAllOf,
        }
    }

    fn is_negated(&self) -> bool {
        matches!(self, Self::Exclude | Self::ExcludeIfAnyOf | Self::ExcludeIfAll)
    }

    fn plural_form(&self) -> Option<Self> {
        match self {
            Self::Include => Some(Self::IncludeAnyOf),
            Self::Exclude => Some(Self::ExcludeIfAnyOf),
            _ => None,
        }
    }

    fn singular_form(&self) -> Option<Self> {
        match self {
            Self::IncludeAnyOf | Self::IncludeAllOf => Some(Self::Include),
            Self::ExcludeIfAnyOf | Self::ExcludeIfAll => Some(Self::Exclude),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Include,
            Self::IncludeAnyOf,
            Self::Exclude,
            Self::ExcludeIfAnyOf,
            Self::IncludeAllOf,
            Self::ExcludeIfAll,
        ]
    }
}

macro_rules! impl_display_and_from_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = AtkError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Operator>::from_label(s)
                }
            }
        )*
    };
}

impl_display_and_from_str!(TextOperator, NumberOperator, DateOperator, OptionOperator);
