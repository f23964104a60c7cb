//! Integration tests for the filter engine's documented properties
//!
//! Exercises the public API the data table consumes: category predicates,
//! adapters, dispatch and decoration.

use std::borrow::Cow;
use std::sync::Once;

use atk_core::{AtkError, CellValue, OptionRecord, Row};
use atk_table_filters::{
    decorate_column, decorate_columns, filter_rows, match_date, match_multi_option, match_number,
    match_text, resolve_predicate, resolve_predicate_name, ColumnConfig, ColumnDef, ColumnFilter,
    ColumnMeta, ColumnPredicate, ColumnType, DateFilter, DateOperator, FilterFn, FilterValue,
    NumberFilter, NumberFilterInput, NumberOperator, OptionFilter, OptionOperator, TextFilter,
    TextOperator,
};
use chrono::{DateTime, TimeZone, Utc};

fn init_test_logging() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("atk_table_filters=debug".parse().unwrap()),
            )
            .with_test_writer()
            .finish();

        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

// ============ Vacuous filter law ============

#[test]
fn empty_values_match_every_cell_except_for_option_columns() {
    for op in [TextOperator::Contains, TextOperator::DoesNotContain] {
        for cell in ["", "anything", "  "] {
            assert!(match_text(cell, &TextFilter::new(op, vec![])));
        }
    }

    for op in [
        NumberOperator::Is,
        NumberOperator::IsNot,
        NumberOperator::GreaterThan,
        NumberOperator::IsNotBetween,
    ] {
        for cell in [0.0, -1.5, 1e9, f64::NAN] {
            assert!(match_number(cell, &NumberFilter::new(op, vec![])));
        }
    }

    for op in [DateOperator::IsAfter, DateOperator::IsBetween] {
        assert!(match_date(Some(utc(2020, 1, 1, 0, 0)), &DateFilter::new(op, vec![])).unwrap());
    }

    // option columns: a row with values passes, a row without values never does
    let empty_filter = OptionFilter::new(OptionOperator::Include, vec![]);
    assert!(match_multi_option(&["a"], &empty_filter));
    let no_values: [&str; 0] = [];
    assert!(!match_multi_option(&no_values, &empty_filter));
}

// ============ Spot properties ============

#[test]
fn text_is_case_and_whitespace_insensitive() {
    let filter = TextFilter::new(TextOperator::Contains, vec!["  HELLO  ".into()]);
    assert!(match_text("Hello World", &filter));
}

#[test]
fn date_is_after_starts_on_the_next_day() {
    let d1 = Some(utc(2023, 6, 15, 0, 0));
    let filter = DateFilter::new(DateOperator::IsAfter, vec![d1]);
    assert!(!match_date(Some(utc(2023, 6, 15, 10, 0)), &filter).unwrap());
    assert!(match_date(Some(utc(2023, 6, 16, 0, 1)), &filter).unwrap());
}

#[test]
fn number_between_is_inclusive() {
    let filter = NumberFilter::new(NumberOperator::IsBetween, vec![5.0, 10.0]);
    assert!(match_number(5.0, &filter));
    assert!(match_number(10.0, &filter));
    assert!(!match_number(10.0001, &filter));
}

#[test]
fn set_operators_on_partial_overlap() {
    let cell = ["a", "b"];
    let selection = || vec![vec!["a".to_string(), "c".to_string()]];
    let check = |op| match_multi_option(&cell, &OptionFilter::new(op, selection()));

    assert!(check(OptionOperator::Include));
    assert!(!check(OptionOperator::IncludeAllOf));
    assert!(!check(OptionOperator::Exclude));
    assert!(check(OptionOperator::ExcludeIfAll));
}

#[test]
fn date_arity_is_enforced() {
    let now = Some(utc(2024, 5, 1, 12, 0));
    let d1 = Some(utc(2023, 1, 1, 0, 0));
    let d2 = Some(utc(2023, 2, 1, 0, 0));

    let err = match_date(now, &DateFilter::new(DateOperator::Is, vec![d1, d2])).unwrap_err();
    assert!(matches!(err, AtkError::InvalidFilterArity(_)));
    assert!(err.is_programming_error());

    let err = match_date(now, &DateFilter::new(DateOperator::IsBetween, vec![d1])).unwrap_err();
    assert!(matches!(err, AtkError::InvalidFilterArity(_)));
}

#[test]
fn range_bound_policies_differ_between_number_and_date() {
    let number = NumberFilter::new(NumberOperator::IsBetween, vec![5.0]);
    assert!(match_number(1.0, &number));

    let d1 = Some(utc(2023, 1, 1, 0, 0));
    let date = DateFilter::new(DateOperator::IsBetween, vec![d1, None]);
    assert!(!match_date(d1, &date).unwrap());
}

// ============ Dispatch & decoration ============

#[test]
fn dispatch_is_total() {
    let text = resolve_predicate(Some(ColumnType::Text));
    assert_eq!(resolve_predicate(None), text);
    assert_eq!(resolve_predicate_name(Some("")), text);
    assert_eq!(resolve_predicate_name(Some("nonexistent-type")), text);
    for ty in ColumnType::all() {
        // every declared type resolves
        let _ = resolve_predicate(Some(*ty));
    }
}

#[test]
fn decoration_keeps_existing_filter_fn_by_reference() {
    let column = ColumnDef::new("holder").with_filter_fn(FilterFn::custom(|_, _, _| true));
    match decorate_column(&column) {
        Cow::Borrowed(same) => assert!(std::ptr::eq(same, &column)),
        Cow::Owned(_) => panic!("column with a filter fn must not be copied"),
    }

    let disabled = ColumnDef::new("holder")
        .with_type(ColumnType::Address)
        .with_filter_enabled(false);
    assert!(decorate_column(&disabled).filter_fn.is_none());
}

// ============ End to end ============

fn asset_columns() -> Vec<ColumnDef> {
    decorate_columns(&[
        ColumnDef::new("name").with_type(ColumnType::Text),
        ColumnDef::new("totalSupply").with_type(ColumnType::Currency),
        ColumnDef::new("createdAt").with_type(ColumnType::DateTime),
        ColumnDef::new("status").with_meta(ColumnMeta::new(ColumnType::Status).with_transform(
            |item| match item {
                CellValue::Bool(true) => Some(OptionRecord::new("paused", "Paused")),
                CellValue::Bool(false) => Some(OptionRecord::new("active", "Active")),
                _ => None,
            },
        )),
        ColumnConfig::multi_option("roles").display_name("Roles").build(),
    ])
}

fn asset_rows() -> Vec<Row> {
    vec![
        Row::new()
            .with("name", "Green Bond 2030")
            .with("totalSupply", 1_000_000.0)
            .with("createdAt", utc(2024, 3, 1, 9, 30))
            .with("status", CellValue::Bool(false))
            .with(
                "roles",
                CellValue::List(vec![
                    CellValue::Option(OptionRecord::new("admin", "Admin")),
                    CellValue::Option(OptionRecord::new("supplyManagement", "Supply")),
                ]),
            ),
        Row::new()
            .with("name", "Euro Stablecoin")
            .with("totalSupply", "250000")
            .with("createdAt", "2024-04-12")
            .with("status", CellValue::Bool(true))
            .with("roles", CellValue::text_list(["admin"])),
        Row::new()
            .with("name", "Real Estate Fund")
            .with("totalSupply", CellValue::Null)
            .with("createdAt", CellValue::Null)
            .with("status", CellValue::Bool(false))
            .with("roles", CellValue::Null),
    ]
}

#[test]
fn filters_a_realistic_asset_table() {
    init_test_logging();
    let columns = asset_columns();
    let rows = asset_rows();

    let by_supply = vec![ColumnFilter::new(
        "totalSupply",
        NumberFilter::new(NumberOperator::GreaterThanOrEqual, vec![500_000.0]),
    )];
    assert_eq!(filter_rows(&rows, &columns, &by_supply, None).unwrap(), vec![0]);

    let created_in_april = vec![ColumnFilter::new(
        "createdAt",
        DateFilter::new(
            DateOperator::IsBetween,
            vec![Some(utc(2024, 4, 1, 0, 0)), Some(utc(2024, 4, 30, 0, 0))],
        ),
    )];
    assert_eq!(filter_rows(&rows, &columns, &created_in_april, None).unwrap(), vec![1]);

    let paused = vec![ColumnFilter::new(
        "status",
        OptionFilter::new(OptionOperator::Include, vec![vec!["paused".into()]]),
    )];
    assert_eq!(filter_rows(&rows, &columns, &paused, None).unwrap(), vec![1]);

    let active = vec![ColumnFilter::new(
        "status",
        OptionFilter::new(OptionOperator::Include, vec![vec!["active".into()]]),
    )];
    // a lone `false` cell is falsy and never reaches the transform
    assert_eq!(filter_rows(&rows, &columns, &active, None).unwrap(), Vec::<usize>::new());

    let admins_with_supply_role = vec![ColumnFilter::new(
        "roles",
        OptionFilter::new(
            OptionOperator::IncludeAllOf,
            vec![vec!["admin".into(), "supplyManagement".into()]],
        ),
    )];
    assert_eq!(
        filter_rows(&rows, &columns, &admins_with_supply_role, None).unwrap(),
        vec![0]
    );

    let url_state = vec![ColumnFilter::new(
        "totalSupply",
        FilterValue::Number(NumberFilterInput::from("250000")),
    )];
    assert_eq!(filter_rows(&rows, &columns, &url_state, None).unwrap(), vec![1]);

    assert_eq!(
        filter_rows(&rows, &columns, &[], Some("estate")).unwrap(),
        vec![2]
    );
}

#[test]
fn decorated_columns_resolve_expected_predicates() {
    let predicates: Vec<Option<ColumnPredicate>> = asset_columns()
        .iter()
        .map(|c| c.filter_fn.as_ref().and_then(FilterFn::as_builtin))
        .collect();
    assert_eq!(
        predicates,
        vec![
            Some(ColumnPredicate::Text),
            Some(ColumnPredicate::Number),
            Some(ColumnPredicate::Date),
            Some(ColumnPredicate::MultiOption),
            Some(ColumnPredicate::MultiOption),
        ]
    );
}
