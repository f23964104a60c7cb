//! ATK Table Filters - typed filter predicates for the asset data tables
//!
//! The data tables of the asset console filter rows client-side. Each column
//! has a semantic type, the type selects a category predicate, and the
//! predicate decides per row whether the cell satisfies the user's filter.
//!
//! # Layout
//!
//! ```text
//! operators   closed operator set per category, arity, negation
//! descriptor  FilterDescriptor { operator, values, column_meta }
//! predicates  match_text / match_number / match_date / match_multi_option
//! adapters    scalar-or-descriptor normalization (URL state vs filter builder)
//! dispatch    ColumnType -> ColumnPredicate, column decoration
//! factory     strict data-type factory and ColumnConfig builder
//! table       row-set filtering over column filter state
//! ```
//!
//! All predicates are pure and synchronous; nothing here holds state between
//! calls.

mod adapters;
mod column_type;
mod descriptor;
mod dispatch;
mod factory;
mod operators;
pub mod predicates;
mod table;

pub use adapters::{adapt_number, adapt_text, flexible_number_filter_fn, flexible_text_filter_fn};
pub use column_type::ColumnType;
pub use descriptor::{
    ColumnMeta, DateFilter, FilterDescriptor, FilterValue, NumberFilter, NumberFilterInput,
    NumberScalar, OptionFilter, TextFilter, TextFilterInput, TransformOptionFn,
};
pub use dispatch::{
    decorate_column, decorate_columns, resolve_predicate, resolve_predicate_name, ColumnDef,
    ColumnPredicate, CustomFilterFn, FilterFn,
};
pub use factory::{filter_fn, ColumnConfig, ColumnDataType};
pub use operators::{
    determine_new_operator, DateOperator, FilterCategory, NumberOperator, Operator,
    OperatorTarget, OptionOperator, TextOperator,
};
pub use predicates::{
    date_filter_fn, match_date, match_multi_option, match_number, match_text,
    multi_option_filter_fn, number_filter_fn, option_filter_fn, text_filter_fn,
};
pub use table::{filter_rows, ColumnFilter};
