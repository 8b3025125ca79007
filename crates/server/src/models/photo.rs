//! Photo model.
//!
//! Photos belong to exactly one edition (or none, if unattached).
//! `sort_order` defines the display order within an edition; cover
//! selection and ordering happen in the aggregation layer, not here.

use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::PgPool;

/// A photo of an edition, stored in external object storage.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Photo {
    /// Unique identifier.
    pub id: i64,

    /// Owning edition, when attached.
    pub edition_id: Option<i64>,

    /// Relative path in object storage.
    pub storage_path: String,

    /// Display order within the owning edition; lowest is the cover.
    pub sort_order: i32,

    /// Optional caption.
    pub caption: Option<String>,

    /// Optional copyright statement.
    pub copyright_statement: Option<String>,
}

impl Photo {
    /// Fetch the photos of a batch of editions in one call.
    ///
    /// Single-edition pages go through this too, with a one-element
    /// batch.
    pub async fn list_for_editions(pool: &PgPool, edition_ids: &[i64]) -> Result<Vec<Self>> {
        if edition_ids.is_empty() {
            return Ok(Vec::new());
        }

        let photos = sqlx::query_as::<_, Self>(
            r#"
            SELECT id, edition_id, storage_path, sort_order, caption, copyright_statement
            FROM photos
            WHERE edition_id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(edition_ids)
        .fetch_all(pool)
        .await
        .context("failed to fetch photos for editions")?;

        Ok(photos)
    }
}
