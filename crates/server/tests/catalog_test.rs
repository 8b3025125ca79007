#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Catalog aggregation integration tests.
//!
//! Exercise the enrichment pipeline over fixtures: featured-edition
//! selection, multi-path search combination, author attachment, and
//! photo URL construction.

use folio_server::catalog::enrich;
use folio_server::catalog::{EditionWithRelations, SortDirection, WorkSort, WorkWithAuthors};
use folio_server::models::{Edition, Photo, Work};
use folio_server::storage::PhotoStorage;
use folio_test_utils::{author, edition, link, photo, work};

fn enriched(edition: Edition, photos: Vec<Photo>) -> EditionWithRelations {
    EditionWithRelations {
        edition,
        work: None,
        publisher: None,
        series: None,
        photos,
    }
}

// -------------------------------------------------------------------------
// Featured selection
// -------------------------------------------------------------------------

/// The home page shows the newest photo-bearing editions, capped at
/// eight, no matter how many photoless editions sit in between.
#[test]
fn featured_selection_skips_photoless_editions_and_caps_at_eight() {
    // Editions 1..=20, newest (highest id) first, as the store lists
    // them. Only even-numbered editions have a photo.
    let editions: Vec<EditionWithRelations> = (1..=20)
        .rev()
        .map(|id| {
            let photos = if id % 2 == 0 {
                vec![photo(id * 100, id, 0)]
            } else {
                Vec::new()
            };
            enriched(edition(id, id, "Ed"), photos)
        })
        .collect();

    let featured: Vec<i64> = enrich::select_featured(editions, 8)
        .into_iter()
        .map(|e| e.edition.id)
        .collect();

    assert_eq!(featured, vec![20, 18, 16, 14, 12, 10, 8, 6]);
}

/// Fewer than eight photo-bearing editions is not padded.
#[test]
fn featured_selection_returns_short_list_when_catalog_is_small() {
    let editions = vec![
        enriched(edition(3, 1, "A"), Vec::new()),
        enriched(edition(2, 1, "B"), vec![photo(9, 2, 0)]),
        enriched(edition(1, 1, "C"), Vec::new()),
    ];

    let featured: Vec<i64> = enrich::select_featured(editions, 8)
        .into_iter()
        .map(|e| e.edition.id)
        .collect();

    assert_eq!(featured, vec![2]);
}

// -------------------------------------------------------------------------
// Search combination
// -------------------------------------------------------------------------

/// The three search paths concatenate title-first; a work found by
/// several paths keeps its earliest position.
#[test]
fn search_combination_dedups_first_occurrence_wins() {
    let by_title = vec![work(1, "War and Peace"), work(2, "Peace Talks")];
    let by_author = vec![work(3, "Anna Karenina"), work(1, "War and Peace")];
    let by_edition = vec![work(2, "Peace Talks"), work(4, "A Separate Peace")];

    let ids: Vec<i64> = enrich::combine_search_paths(by_title, by_author, by_edition, 50)
        .into_iter()
        .map(|w| w.id)
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4]);
}

/// The combined result never exceeds the cap even when each path is
/// full.
#[test]
fn search_combination_caps_total_results() {
    let by_title: Vec<Work> = (1..=50).map(|id| work(id, "T")).collect();
    let by_author: Vec<Work> = (51..=60).map(|id| work(id, "A")).collect();
    let by_edition: Vec<Work> = (61..=80).map(|id| work(id, "E")).collect();

    let capped = enrich::combine_search_paths(by_title, by_author, by_edition, 50);

    assert_eq!(capped.len(), 50);
    assert_eq!(capped.last().unwrap().id, 50);
}

// -------------------------------------------------------------------------
// Author attachment and ordering
// -------------------------------------------------------------------------

/// End-to-end author attachment: links plus a resolved author batch
/// produce per-work author lists, and the author sort orders works by
/// the first linked author, case-insensitively.
#[test]
fn works_sorted_by_attached_primary_author() {
    let links = vec![link(1, 10), link(2, 11), link(2, 10), link(3, 12)];
    let authors = enrich::index_by_id(
        vec![
            author(10, "Melville, Herman"),
            author(11, "austen, jane"),
            author(12, "Tolstoy, Leo"),
        ],
        |a| a.id,
    );

    let mut by_work = enrich::group_authors_by_work(&links, &authors);

    let mut works: Vec<WorkWithAuthors> = [
        work(1, "Moby-Dick"),
        work(2, "Emma"),
        work(3, "Anna Karenina"),
    ]
    .into_iter()
    .map(|w| {
        let authors = by_work.remove(&w.id).unwrap_or_default();
        WorkWithAuthors { work: w, authors }
    })
    .collect();

    enrich::sort_works_by_author(&mut works, SortDirection::Asc);

    let titles: Vec<&str> = works.iter().map(|w| w.work.original_title.as_str()).collect();
    assert_eq!(titles, vec!["Emma", "Moby-Dick", "Anna Karenina"]);
    // Work 2 keeps both linked authors, link order preserved.
    assert_eq!(works[0].authors.len(), 2);
    assert_eq!(works[0].authors[0].name, "austen, jane");
}

/// The sort parameter whitelist feeds the listing: unknown keys fall
/// back to the title column, author has no column at all.
#[test]
fn listing_sort_parameters_resolve_through_whitelist() {
    assert_eq!(
        WorkSort::from_param(Some("english_title")).column(),
        Some("english_title")
    );
    assert_eq!(
        WorkSort::from_param(Some("no_such_column")).column(),
        Some("original_title")
    );
    assert_eq!(WorkSort::from_param(Some("author")).column(), None);
}

// -------------------------------------------------------------------------
// Photo display
// -------------------------------------------------------------------------

/// Cover photo of an enriched edition maps onto a public URL under
/// the configured base.
#[test]
fn cover_photo_url_joins_base_and_storage_path() {
    let storage = PhotoStorage::new("https://cdn.example.com/book-photos".parse().unwrap());
    let photos = vec![photo(2, 7, 1), photo(1, 7, 0)];

    let cover = enrich::cover_photo(&photos).unwrap();
    let url = storage.public_url(&cover.storage_path).unwrap();

    assert_eq!(cover.id, 1);
    assert_eq!(url, "https://cdn.example.com/book-photos/editions/7/1.jpg");
}

/// Detail pages show all photos ascending by sort order; ties keep
/// fetch order.
#[test]
fn detail_photos_render_in_display_order() {
    let mut photos = vec![photo(5, 7, 2), photo(6, 7, 0), photo(7, 7, 2), photo(8, 7, 1)];
    enrich::sort_photos(&mut photos);

    let ids: Vec<i64> = photos.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![6, 8, 5, 7]);
}
