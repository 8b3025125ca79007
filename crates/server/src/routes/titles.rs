//! Work listing, search, and work detail pages.

use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::catalog::{SortDirection, WorkSort, WorkWithAuthors};
use crate::error::{AppError, AppResult};
use crate::routes::helpers::{cover_photo_view, PhotoView, PublisherView, SeriesView};
use crate::state::AppState;

/// Shown when a work has no linked author.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Create the titles router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/titles", get(list_titles))
        .route("/titles/search", get(search_titles))
        .route("/titles/{id}", get(work_detail))
}

// -------------------------------------------------------------------------
// Request types
// -------------------------------------------------------------------------

#[derive(Deserialize)]
struct ListParams {
    /// Case-insensitive first-letter filter on the original title.
    letter: Option<String>,
    /// Sort key; unknown values fall back to the title sort.
    sort: Option<String>,
    /// `asc` (default) or `desc`.
    order: Option<String>,
}

#[derive(Deserialize)]
struct SearchParams {
    q: Option<String>,
}

// -------------------------------------------------------------------------
// Response types
// -------------------------------------------------------------------------

#[derive(Serialize)]
struct TitlesResponse {
    count: usize,
    works: Vec<WorkSummaryResponse>,
}

#[derive(Serialize)]
struct SearchResponse {
    query: String,
    count: usize,
    works: Vec<WorkSummaryResponse>,
}

#[derive(Serialize)]
struct WorkSummaryResponse {
    id: i64,
    original_title: String,
    english_title: Option<String>,
    original_publication_year: Option<String>,
    original_language: Option<String>,
    /// Primary author name, or "Unknown" when no author is linked.
    author_display: String,
    authors: Vec<AuthorRefResponse>,
}

#[derive(Serialize)]
struct AuthorRefResponse {
    id: i64,
    name: String,
}

#[derive(Serialize)]
struct WorkDetailResponse {
    id: i64,
    original_title: String,
    english_title: Option<String>,
    original_publication_year: Option<String>,
    original_language: Option<String>,
    wiki_link: Option<String>,
    authors: Vec<AuthorRefResponse>,
    editions: Vec<WorkEditionResponse>,
}

#[derive(Serialize)]
struct WorkEditionResponse {
    id: i64,
    title: String,
    publication_year: Option<i32>,
    language: Option<String>,
    publisher: Option<PublisherView>,
    series: Option<SeriesView>,
    cover_photo: Option<PhotoView>,
}

impl WorkSummaryResponse {
    fn from_work(entry: WorkWithAuthors) -> Self {
        Self {
            author_display: entry
                .primary_author()
                .map_or_else(|| UNKNOWN_AUTHOR.to_string(), |a| a.name.clone()),
            id: entry.work.id,
            original_title: entry.work.original_title,
            english_title: entry.work.english_title,
            original_publication_year: entry.work.original_publication_year,
            original_language: entry.work.original_language,
            authors: entry
                .authors
                .into_iter()
                .map(|a| AuthorRefResponse {
                    id: a.id,
                    name: a.name,
                })
                .collect(),
        }
    }
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

/// Work listing: optional letter filter, whitelisted sort, 20 rows.
async fn list_titles(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<TitlesResponse> {
    let sort = WorkSort::from_param(params.sort.as_deref());
    let direction = match params.order.as_deref() {
        Some("desc") => SortDirection::Desc,
        _ => SortDirection::Asc,
    };
    let letter = params.letter.as_deref().filter(|l| !l.is_empty());

    let works = state.catalog().list_works(letter, sort, direction).await;

    Json(TitlesResponse {
        count: works.len(),
        works: works
            .into_iter()
            .map(WorkSummaryResponse::from_work)
            .collect(),
    })
}

/// Free-text search across work titles, author names, and edition
/// titles. An empty query returns an empty result without touching
/// the store.
async fn search_titles(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResponse> {
    let query = params.q.unwrap_or_default();
    let term = query.trim();

    let works = if term.is_empty() {
        Vec::new()
    } else {
        state.catalog().search_works(term).await
    };

    Json(SearchResponse {
        query: term.to_string(),
        count: works.len(),
        works: works
            .into_iter()
            .map(WorkSummaryResponse::from_work)
            .collect(),
    })
}

/// Work detail: the work, its authors, and its editions newest-first.
async fn work_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<WorkDetailResponse>> {
    let detail = state
        .catalog()
        .work_detail(id)
        .await
        .ok_or(AppError::NotFound)?;

    let editions = detail
        .editions
        .into_iter()
        .map(|entry| WorkEditionResponse {
            id: entry.edition.id,
            title: entry.edition.title.clone(),
            publication_year: entry.edition.publication_year,
            language: entry.edition.language.clone(),
            publisher: entry.publisher.as_ref().map(PublisherView::from_publisher),
            series: entry.series.as_ref().map(SeriesView::from_series),
            cover_photo: cover_photo_view(&entry.photos, state.photos()),
        })
        .collect();

    Ok(Json(WorkDetailResponse {
        id: detail.work.work.id,
        original_title: detail.work.work.original_title,
        english_title: detail.work.work.english_title,
        original_publication_year: detail.work.work.original_publication_year,
        original_language: detail.work.work.original_language,
        wiki_link: detail.work.work.wiki_link,
        authors: detail
            .work
            .authors
            .into_iter()
            .map(|a| AuthorRefResponse {
                id: a.id,
                name: a.name,
            })
            .collect(),
        editions,
    }))
}
