//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::catalog::CatalogService;
use crate::config::Config;
use crate::db;
use crate::storage::PhotoStorage;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// PostgreSQL connection pool.
    db: PgPool,

    /// Catalog aggregation service.
    catalog: Arc<CatalogService>,

    /// Public URL mapping for stored photos.
    photos: PhotoStorage,
}

impl AppState {
    /// Create new application state with database connections.
    pub async fn new(config: &Config) -> Result<Self> {
        let db = db::create_pool(config)
            .await
            .context("failed to create database pool")?;

        let catalog = CatalogService::new(db.clone());
        let photos = PhotoStorage::new(config.photo_base_url.clone());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                db,
                catalog,
                photos,
            }),
        })
    }

    /// Get the catalog service.
    pub fn catalog(&self) -> &Arc<CatalogService> {
        &self.inner.catalog
    }

    /// Get the photo storage mapping.
    pub fn photos(&self) -> &PhotoStorage {
        &self.inner.photos
    }

    /// Check if PostgreSQL is healthy.
    pub async fn postgres_healthy(&self) -> bool {
        db::check_health(&self.inner.db).await
    }
}
