//! Series model.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

/// A named grouping of editions under one publisher.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Series {
    /// Unique identifier.
    pub id: i64,

    /// Display name. Never empty.
    pub name: String,

    /// Owning publisher, when present.
    pub publisher_id: Option<i64>,
}

impl Series {
    /// Fetch all series matching a set of ids in one call.
    pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<Self>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let series = sqlx::query_as::<_, Self>(
            "SELECT id, name, publisher_id FROM series WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
        .context("failed to fetch series by ids")?;

        Ok(series)
    }

    /// List all series, name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        let series = sqlx::query_as::<_, Self>(
            "SELECT id, name, publisher_id FROM series ORDER BY name ASC",
        )
        .fetch_all(pool)
        .await
        .context("failed to list series")?;

        Ok(series)
    }
}
