//! Edition model.
//!
//! One specific published printing of a work, tied to a publisher and
//! optionally a series. Carries the physical description of the
//! object itself.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

use crate::catalog::query::{ListQuery, TextFilter};

const COLUMN_LIST: &str = r#"
    id, work_id, publisher_id, series_id, title, isbn, publication_year,
    language, slipcase, dustjacket, size_dimensions, pages_description,
    binding_type, typeface, printer, binder, details, notes
"#;

/// A published printing of a work.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Edition {
    /// Unique identifier.
    pub id: i64,

    /// Work this edition prints.
    pub work_id: i64,

    /// Publisher of this edition.
    pub publisher_id: Option<i64>,

    /// Series within the publisher's catalog, when part of one.
    pub series_id: Option<i64>,

    /// Edition title as printed. Never empty.
    pub title: String,

    /// ISBN when the printing carries one.
    pub isbn: Option<String>,

    /// Year this edition was published.
    pub publication_year: Option<i32>,

    /// Language of this printing.
    pub language: Option<String>,

    /// Whether the edition ships in a slipcase.
    pub slipcase: bool,

    /// Whether the edition carries a dust jacket.
    pub dustjacket: bool,

    /// Physical dimensions description.
    pub size_dimensions: Option<String>,

    /// Page count / pagination description.
    pub pages_description: Option<String>,

    /// Binding description.
    pub binding_type: Option<String>,

    /// Typeface used for the text.
    pub typeface: Option<String>,

    /// Printer of the book block.
    pub printer: Option<String>,

    /// Bindery.
    pub binder: Option<String>,

    /// Free-text details.
    pub details: Option<String>,

    /// Free-text notes.
    pub notes: Option<String>,
}

impl Edition {
    /// Table name in the store.
    pub const TABLE: &'static str = "editions";

    /// Fetch a single edition by id. Absence is `None`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>> {
        let edition = sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMN_LIST} FROM editions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch edition")?;

        Ok(edition)
    }

    /// List every edition, newest id first.
    ///
    /// The featured listing filters and truncates this after photo
    /// enrichment, so no limit is applied here.
    pub async fn list_newest(pool: &PgPool) -> Result<Vec<Self>> {
        let editions = sqlx::query_as::<_, Self>(&format!(
            "SELECT {COLUMN_LIST} FROM editions ORDER BY id DESC"
        ))
        .fetch_all(pool)
        .await
        .context("failed to list editions")?;

        Ok(editions)
    }

    /// List the editions of one work, publication year descending.
    /// Editions with no year sort last.
    pub async fn list_for_work(pool: &PgPool, work_id: i64) -> Result<Vec<Self>> {
        let editions = sqlx::query_as::<_, Self>(&Self::list_for_work_statement())
            .bind(work_id)
            .fetch_all(pool)
            .await
            .context("failed to list editions for work")?;

        Ok(editions)
    }

    fn list_for_work_statement() -> String {
        // NULLS LAST: Postgres defaults to NULLS FIRST on DESC, which
        // would float undated editions to the top of the page.
        format!(
            "SELECT {COLUMN_LIST} FROM editions \
             WHERE work_id = $1 ORDER BY publication_year DESC NULLS LAST"
        )
    }

    /// Work ids of editions whose title matches a case-insensitive
    /// substring search.
    pub async fn search_work_ids_by_title(
        pool: &PgPool,
        term: &str,
        limit: u64,
    ) -> Result<Vec<i64>> {
        let query = ListQuery::new(Self::TABLE, &["work_id"])
            .filter(TextFilter::substring("title", term))
            .limit(limit);

        let ids: Vec<i64> = sqlx::query_scalar(&query.build())
            .fetch_all(pool)
            .await
            .context("failed to search editions by title")?;

        Ok(ids)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn work_editions_sort_year_descending_undated_last() {
        let sql = Edition::list_for_work_statement();

        assert!(sql.contains("ORDER BY publication_year DESC NULLS LAST"));
    }
}
