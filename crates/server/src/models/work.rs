//! Work model.
//!
//! A work is the abstract literary work, independent of any physical
//! printing; editions reference it by id.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

/// An abstract literary work.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Work {
    /// Unique identifier.
    pub id: i64,

    /// Title in the original language. Never empty.
    pub original_title: String,

    /// English title, when the original is not English.
    pub english_title: Option<String>,

    /// Original publication year as a display string (source data
    /// holds ranges such as "1870-71").
    pub original_publication_year: Option<String>,

    /// Original language.
    pub original_language: Option<String>,

    /// Optional external reference link.
    pub wiki_link: Option<String>,
}

impl Work {
    /// Table name in the store.
    pub const TABLE: &'static str = "works";

    /// Columns fetched for this entity.
    pub const COLUMNS: &'static [&'static str] = &[
        "id",
        "original_title",
        "english_title",
        "original_publication_year",
        "original_language",
        "wiki_link",
    ];

    /// Fetch a single work by id. Absence is `None`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>> {
        let work = sqlx::query_as::<_, Self>(
            r#"
            SELECT id, original_title, english_title, original_publication_year,
                   original_language, wiki_link
            FROM works
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch work")?;

        Ok(work)
    }

    /// Fetch all works matching a set of ids in one call.
    ///
    /// Returns only the rows that exist; order is unspecified.
    pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<Self>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let works = sqlx::query_as::<_, Self>(
            r#"
            SELECT id, original_title, english_title, original_publication_year,
                   original_language, wiki_link
            FROM works
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(pool)
        .await
        .context("failed to fetch works by ids")?;

        Ok(works)
    }
}
