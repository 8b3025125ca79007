//! Author model.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

use crate::catalog::query::{ListQuery, TextFilter};

/// An author of one or more works.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Author {
    /// Unique identifier.
    pub id: i64,

    /// Display name. Never empty.
    pub name: String,

    /// Optional external reference link.
    pub wiki_link: Option<String>,
}

impl Author {
    /// Table name in the store.
    pub const TABLE: &'static str = "authors";

    /// Columns fetched for this entity.
    pub const COLUMNS: &'static [&'static str] = &["id", "name", "wiki_link"];

    /// Fetch a single author by id. Absence is `None`, not an error.
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>> {
        let author = sqlx::query_as::<_, Self>(
            "SELECT id, name, wiki_link FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch author")?;

        Ok(author)
    }

    /// Fetch all authors matching a set of ids in one call.
    ///
    /// Returns only the rows that exist; order is unspecified.
    pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<Self>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let authors = sqlx::query_as::<_, Self>(
            "SELECT id, name, wiki_link FROM authors WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
        .context("failed to fetch authors by ids")?;

        Ok(authors)
    }

    /// Case-insensitive substring search on the author name.
    pub async fn search_by_name(pool: &PgPool, term: &str, limit: u64) -> Result<Vec<Self>> {
        let query = ListQuery::new(Self::TABLE, Self::COLUMNS)
            .filter(TextFilter::substring("name", term))
            .limit(limit);

        query.fetch_all(pool).await.context("failed to search authors")
    }
}
