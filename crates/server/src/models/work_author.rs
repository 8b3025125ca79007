//! Work/author join model.
//!
//! The join table carries no ordinal column. Rows are fetched ordered
//! by `(work_id, author_id)` so the "first linked author" used for
//! compact display is deterministic, but callers must treat the order
//! as stable-but-unspecified.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

/// A link between a work and one of its authors.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct WorkAuthor {
    /// Work side of the link.
    pub work_id: i64,

    /// Author side of the link.
    pub author_id: i64,
}

impl WorkAuthor {
    /// Fetch the author links for a batch of works in one call.
    pub async fn for_works(pool: &PgPool, work_ids: &[i64]) -> Result<Vec<Self>> {
        if work_ids.is_empty() {
            return Ok(Vec::new());
        }

        let links = sqlx::query_as::<_, Self>(
            r#"
            SELECT work_id, author_id
            FROM work_authors
            WHERE work_id = ANY($1)
            ORDER BY work_id, author_id
            "#,
        )
        .bind(work_ids)
        .fetch_all(pool)
        .await
        .context("failed to fetch work/author links")?;

        Ok(links)
    }

    /// Ids of the works linked to a single author.
    pub async fn work_ids_for_author(pool: &PgPool, author_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT work_id FROM work_authors WHERE author_id = $1 ORDER BY work_id",
        )
        .bind(author_id)
        .fetch_all(pool)
        .await
        .context("failed to fetch work ids for author")?;

        Ok(ids)
    }

    /// Ids of the works linked to any of a set of authors.
    pub async fn work_ids_for_authors(
        pool: &PgPool,
        author_ids: &[i64],
        limit: u64,
    ) -> Result<Vec<i64>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT work_id
            FROM work_authors
            WHERE author_id = ANY($1)
            ORDER BY work_id
            LIMIT $2
            "#,
        )
        .bind(author_ids)
        .bind(limit as i64)
        .fetch_all(pool)
        .await
        .context("failed to fetch work ids for authors")?;

        Ok(ids)
    }
}
