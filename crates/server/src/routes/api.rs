//! JSON API routes consumed by widgets outside the page flow.

use axum::extract::State;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::routes::helpers::{cover_photo_view, PhotoView, PublisherView, SeriesView};
use crate::state::AppState;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/featured-editions", get(featured_editions))
        .route("/api/publishers-series", get(publishers_series))
}

// -------------------------------------------------------------------------
// Response types
// -------------------------------------------------------------------------

#[derive(Serialize)]
struct FeaturedEditionResponse {
    id: i64,
    title: String,
    publication_year: Option<i32>,
    cover_photo: Option<PhotoView>,
    work: Option<FeaturedWorkResponse>,
    publisher: Option<PublisherView>,
    series: Option<SeriesView>,
}

#[derive(Serialize)]
struct FeaturedWorkResponse {
    id: i64,
    original_title: String,
    english_title: Option<String>,
    author: Option<String>,
}

#[derive(Serialize)]
struct PublishersSeriesResponse {
    publishers: Vec<PublisherView>,
    series: Vec<SeriesEntryResponse>,
}

#[derive(Serialize)]
struct SeriesEntryResponse {
    id: i64,
    name: String,
    publisher: Option<PublisherView>,
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

/// Newest photo-bearing editions, fully enriched, at most eight.
async fn featured_editions(
    State(state): State<AppState>,
) -> Json<Vec<FeaturedEditionResponse>> {
    let featured = state.catalog().featured_editions().await;

    Json(
        featured
            .into_iter()
            .map(|item| FeaturedEditionResponse {
                id: item.edition.id,
                title: item.edition.title.clone(),
                publication_year: item.edition.publication_year,
                cover_photo: cover_photo_view(&item.photos, state.photos()),
                work: item.work.as_ref().map(|w| FeaturedWorkResponse {
                    id: w.work.id,
                    original_title: w.work.original_title.clone(),
                    english_title: w.work.english_title.clone(),
                    author: w.primary_author().map(|a| a.name.clone()),
                }),
                publisher: item.publisher.as_ref().map(PublisherView::from_publisher),
                series: item.series.as_ref().map(SeriesView::from_series),
            })
            .collect(),
    )
}

/// All publishers and all series, each name-ascending; series carry
/// their resolved publisher.
async fn publishers_series(State(state): State<AppState>) -> Json<PublishersSeriesResponse> {
    let (publishers, series) = state.catalog().publishers_and_series().await;

    Json(PublishersSeriesResponse {
        publishers: publishers.iter().map(PublisherView::from_publisher).collect(),
        series: series
            .into_iter()
            .map(|entry| SeriesEntryResponse {
                id: entry.series.id,
                name: entry.series.name.clone(),
                publisher: entry.publisher.as_ref().map(PublisherView::from_publisher),
            })
            .collect(),
    })
}
