//! Shared view-model pieces used by several route modules.

use serde::Serialize;

use crate::catalog::enrich;
use crate::models::{Photo, Publisher, Series};
use crate::storage::PhotoStorage;

/// A photo rendered for display.
#[derive(Serialize)]
pub(super) struct PhotoView {
    pub id: i64,
    /// Absent when the stored path does not form a usable URL.
    pub url: Option<String>,
    pub sort_order: i32,
    pub caption: Option<String>,
    pub copyright_statement: Option<String>,
}

impl PhotoView {
    pub fn from_photo(photo: &Photo, storage: &PhotoStorage) -> Self {
        Self {
            id: photo.id,
            url: storage.public_url(&photo.storage_path),
            sort_order: photo.sort_order,
            caption: photo.caption.clone(),
            copyright_statement: photo.copyright_statement.clone(),
        }
    }
}

/// The cover photo of an edition: lowest sort order wins.
pub(super) fn cover_photo_view(photos: &[Photo], storage: &PhotoStorage) -> Option<PhotoView> {
    enrich::cover_photo(photos).map(|photo| PhotoView::from_photo(photo, storage))
}

#[derive(Serialize)]
pub(super) struct PublisherView {
    pub id: i64,
    pub name: String,
}

impl PublisherView {
    pub fn from_publisher(publisher: &Publisher) -> Self {
        Self {
            id: publisher.id,
            name: publisher.name.clone(),
        }
    }
}

#[derive(Serialize)]
pub(super) struct SeriesView {
    pub id: i64,
    pub name: String,
    pub publisher_id: Option<i64>,
}

impl SeriesView {
    pub fn from_series(series: &Series) -> Self {
        Self {
            id: series.id,
            name: series.name.clone(),
            publisher_id: series.publisher_id,
        }
    }
}
