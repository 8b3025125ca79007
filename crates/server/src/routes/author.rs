//! Author detail page.

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Create the author router.
pub fn router() -> Router<AppState> {
    Router::new().route("/author/{id}", get(author_detail))
}

#[derive(Serialize)]
struct AuthorDetailResponse {
    id: i64,
    name: String,
    wiki_link: Option<String>,
    /// The author's works, title ascending.
    works: Vec<AuthorWorkResponse>,
}

#[derive(Serialize)]
struct AuthorWorkResponse {
    id: i64,
    original_title: String,
    english_title: Option<String>,
    original_publication_year: Option<String>,
}

/// Author detail: the author plus their works.
async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<AuthorDetailResponse>> {
    let detail = state
        .catalog()
        .author_detail(id)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(AuthorDetailResponse {
        id: detail.author.id,
        name: detail.author.name,
        wiki_link: detail.author.wiki_link,
        works: detail
            .works
            .into_iter()
            .map(|w| AuthorWorkResponse {
                id: w.id,
                original_title: w.original_title,
                english_title: w.english_title,
                original_publication_year: w.original_publication_year,
            })
            .collect(),
    }))
}
