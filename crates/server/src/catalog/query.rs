//! List-query builder using SeaQuery.
//!
//! The store supports prefix and substring text filters, single-column
//! sorts, and row limits; this builder turns those parameters into
//! PostgreSQL. Sort keys that are not columns of the base table (such
//! as "author" on a work listing) cannot be expressed here — callers
//! fetch unsorted-by-that-key and defer to in-memory sorting in the
//! aggregation layer.

use anyhow::{Context, Result};
use sea_query::extension::postgres::PgExpr;
use sea_query::{Alias, Cond, Expr, Order, PostgresQueryBuilder, Query};
use sqlx::PgPool;
use sqlx::postgres::PgRow;

/// Sort direction for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A text filter on one or more columns of the base table.
#[derive(Debug, Clone)]
pub enum TextFilter {
    /// Case-insensitive prefix match on a single column
    /// (alphabetical browsing).
    Prefix { column: String, value: String },

    /// Case-insensitive substring match on a single column (search).
    Substring { column: String, value: String },

    /// Case-insensitive substring match on any of several columns,
    /// OR-combined (title-or-english-title search).
    AnySubstring { columns: Vec<String>, value: String },
}

impl TextFilter {
    /// Prefix match filter.
    pub fn prefix(column: &str, value: &str) -> Self {
        Self::Prefix {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Substring match filter.
    pub fn substring(column: &str, value: &str) -> Self {
        Self::Substring {
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Substring match across several columns.
    pub fn any_substring(columns: &[&str], value: &str) -> Self {
        Self::AnySubstring {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            value: value.to_string(),
        }
    }
}

/// A read query against one entity table with optional filter, sort,
/// and limit.
#[derive(Debug, Clone)]
pub struct ListQuery {
    table: String,
    columns: Vec<String>,
    filter: Option<TextFilter>,
    sort: Option<(String, SortDirection)>,
    limit: Option<u64>,
}

impl ListQuery {
    /// Create a query over a table with an explicit column list.
    pub fn new(table: &str, columns: &[&str]) -> Self {
        Self {
            table: table.to_string(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            filter: None,
            sort: None,
            limit: None,
        }
    }

    /// Apply a text filter.
    pub fn filter(mut self, filter: TextFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sort by a column of the base table.
    ///
    /// Callers must pass a known column name; user-supplied sort keys
    /// are mapped through a whitelist before reaching this builder.
    pub fn sort(mut self, column: &str, direction: SortDirection) -> Self {
        self.sort = Some((column.to_string(), direction));
        self
    }

    /// Cap the number of returned rows.
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render the query as PostgreSQL.
    pub fn build(&self) -> String {
        let mut query = Query::select();

        for column in &self.columns {
            query.column((Alias::new(&self.table), Alias::new(column)));
        }
        query.from(Alias::new(&self.table));

        match &self.filter {
            Some(TextFilter::Prefix { column, value }) => {
                query.and_where(
                    self.column_expr(column)
                        .ilike(format!("{}%", escape_like_wildcards(value))),
                );
            }
            Some(TextFilter::Substring { column, value }) => {
                query.and_where(
                    self.column_expr(column)
                        .ilike(format!("%{}%", escape_like_wildcards(value))),
                );
            }
            Some(TextFilter::AnySubstring { columns, value }) => {
                let pattern = format!("%{}%", escape_like_wildcards(value));
                let mut cond = Cond::any();
                for column in columns {
                    cond = cond.add(self.column_expr(column).ilike(pattern.clone()));
                }
                query.cond_where(cond);
            }
            None => {}
        }

        if let Some((column, direction)) = &self.sort {
            let order = match direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query.order_by((Alias::new(&self.table), Alias::new(column)), order);
        }

        if let Some(limit) = self.limit {
            query.limit(limit);
        }

        query.to_string(PostgresQueryBuilder)
    }

    /// Execute the query, mapping rows into `T`.
    pub async fn fetch_all<T>(&self, pool: &PgPool) -> Result<Vec<T>>
    where
        T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = self.build();
        let rows = sqlx::query_as::<_, T>(&sql)
            .fetch_all(pool)
            .await
            .with_context(|| format!("list query failed on {}", self.table))?;

        Ok(rows)
    }

    fn column_expr(&self, column: &str) -> Expr {
        Expr::col((Alias::new(&self.table), Alias::new(column)))
    }
}

/// Escape SQL LIKE wildcard characters (`%`, `_`, `\`) in a value.
fn escape_like_wildcards(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
