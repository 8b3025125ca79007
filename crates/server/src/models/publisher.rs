//! Publisher model.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

/// A publishing house.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Publisher {
    /// Unique identifier.
    pub id: i64,

    /// Display name. Never empty.
    pub name: String,
}

impl Publisher {
    /// Fetch all publishers matching a set of ids in one call.
    pub async fn find_by_ids(pool: &PgPool, ids: &[i64]) -> Result<Vec<Self>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let publishers =
            sqlx::query_as::<_, Self>("SELECT id, name FROM publishers WHERE id = ANY($1)")
                .bind(ids)
                .fetch_all(pool)
                .await
                .context("failed to fetch publishers by ids")?;

        Ok(publishers)
    }

    /// List all publishers, name ascending.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Self>> {
        let publishers =
            sqlx::query_as::<_, Self>("SELECT id, name FROM publishers ORDER BY name ASC")
                .fetch_all(pool)
                .await
                .context("failed to list publishers")?;

        Ok(publishers)
    }
}
