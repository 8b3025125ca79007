#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Listing-query integration tests.
//!
//! Render the queries the pages actually issue, using the real table
//! and column constants, and check the generated SQL.

use folio_server::catalog::{ListQuery, SortDirection, TextFilter, WorkSort};
use folio_server::models::{Author, Work};

/// The titles page: letter filter, whitelisted sort, 20 rows.
#[test]
fn titles_page_query_renders_filter_sort_and_limit() {
    let sort = WorkSort::from_param(Some("english_title"));
    let sql = ListQuery::new(Work::TABLE, Work::COLUMNS)
        .filter(TextFilter::prefix("original_title", "m"))
        .sort(sort.column().unwrap(), SortDirection::Desc)
        .limit(20)
        .build();

    assert!(sql.contains("FROM \"works\""));
    assert!(sql.contains("ILIKE 'm%'"), "letter prefix expected: {sql}");
    assert!(sql.contains("ORDER BY \"works\".\"english_title\" DESC"));
    assert!(sql.contains("LIMIT 20"));
}

/// The title search path matches either title column.
#[test]
fn title_search_query_spans_both_title_columns() {
    let sql = ListQuery::new(Work::TABLE, Work::COLUMNS)
        .filter(TextFilter::any_substring(
            &["original_title", "english_title"],
            "peace",
        ))
        .limit(50)
        .build();

    assert!(sql.contains("\"works\".\"original_title\" ILIKE '%peace%'"));
    assert!(sql.contains("\"works\".\"english_title\" ILIKE '%peace%'"));
    assert!(sql.contains(" OR "), "title columns should OR-combine: {sql}");
    assert!(sql.contains("LIMIT 50"));
}

/// The author search path is a plain substring match on the name.
#[test]
fn author_search_query_matches_name_substring() {
    let sql = ListQuery::new(Author::TABLE, Author::COLUMNS)
        .filter(TextFilter::substring("name", "tolstoy"))
        .limit(10)
        .build();

    assert!(sql.contains("FROM \"authors\""));
    assert!(sql.contains("\"authors\".\"name\" ILIKE '%tolstoy%'"));
    assert!(sql.contains("LIMIT 10"));
}

/// A hostile sort parameter never reaches the SQL: the whitelist maps
/// it to the default title column.
#[test]
fn hostile_sort_parameter_cannot_inject() {
    let sort = WorkSort::from_param(Some("id; DROP TABLE works --"));
    let sql = ListQuery::new(Work::TABLE, Work::COLUMNS)
        .sort(sort.column().unwrap(), SortDirection::Asc)
        .build();

    assert!(!sql.contains("DROP TABLE"));
    assert!(sql.contains("ORDER BY \"works\".\"original_title\" ASC"));
}

/// Wildcard characters in a search term match literally.
#[test]
fn search_term_wildcards_are_escaped() {
    let sql = ListQuery::new(Work::TABLE, Work::COLUMNS)
        .filter(TextFilter::substring("original_title", "50%_off"))
        .build();

    assert!(sql.contains("50\\%\\_off"), "escaped pattern expected: {sql}");
}
