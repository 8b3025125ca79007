//! Edition detail page.

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::routes::helpers::{PhotoView, PublisherView, SeriesView};
use crate::state::AppState;

/// Create the edition router.
pub fn router() -> Router<AppState> {
    Router::new().route("/edition/{id}", get(edition_detail))
}

// -------------------------------------------------------------------------
// Response types
// -------------------------------------------------------------------------

#[derive(Serialize)]
struct EditionDetailResponse {
    id: i64,
    title: String,
    isbn: Option<String>,
    publication_year: Option<i32>,
    language: Option<String>,
    slipcase: bool,
    dustjacket: bool,
    size_dimensions: Option<String>,
    pages_description: Option<String>,
    binding_type: Option<String>,
    typeface: Option<String>,
    printer: Option<String>,
    binder: Option<String>,
    details: Option<String>,
    notes: Option<String>,
    work: Option<EditionWorkResponse>,
    publisher: Option<PublisherView>,
    series: Option<SeriesView>,
    /// Photos in display order.
    photos: Vec<PhotoView>,
}

#[derive(Serialize)]
struct EditionWorkResponse {
    id: i64,
    original_title: String,
    english_title: Option<String>,
    authors: Vec<EditionAuthorResponse>,
}

#[derive(Serialize)]
struct EditionAuthorResponse {
    id: i64,
    name: String,
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

/// Full edition detail with every relation attached.
async fn edition_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<EditionDetailResponse>> {
    let detail = state
        .catalog()
        .edition_detail(id)
        .await
        .ok_or(AppError::NotFound)?;

    let photos = detail
        .photos
        .iter()
        .map(|photo| PhotoView::from_photo(photo, state.photos()))
        .collect();

    let work = detail.work.map(|w| EditionWorkResponse {
        id: w.work.id,
        original_title: w.work.original_title,
        english_title: w.work.english_title,
        authors: w
            .authors
            .into_iter()
            .map(|a| EditionAuthorResponse {
                id: a.id,
                name: a.name,
            })
            .collect(),
    });

    let edition = detail.edition;
    Ok(Json(EditionDetailResponse {
        id: edition.id,
        title: edition.title,
        isbn: edition.isbn,
        publication_year: edition.publication_year,
        language: edition.language,
        slipcase: edition.slipcase,
        dustjacket: edition.dustjacket,
        size_dimensions: edition.size_dimensions,
        pages_description: edition.pages_description,
        binding_type: edition.binding_type,
        typeface: edition.typeface,
        printer: edition.printer,
        binder: edition.binder,
        details: edition.details,
        notes: edition.notes,
        work,
        publisher: detail.publisher.as_ref().map(PublisherView::from_publisher),
        series: detail.series.as_ref().map(SeriesView::from_series),
        photos,
    }))
}
