//! Catalog aggregation service.
//!
//! Composes gateway fetches into view-ready records: batch
//! foreign-key resolution, author attachment, cover/photo handling,
//! and the multi-source search. One instance is constructed at
//! startup with the injected pool and shared via [`AppState`].
//!
//! Failure policy: the page-defining lookup of a detail page maps to
//! `None` (the route renders NotFound); every other store failure is
//! logged and degrades to an empty list or absent field, so pages
//! render an empty state instead of an error page. No retries, no
//! caching.
//!
//! [`AppState`]: crate::state::AppState

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use tracing::error;

use crate::catalog::enrich;
use crate::catalog::query::{ListQuery, SortDirection, TextFilter};
use crate::catalog::types::{
    AuthorDetail, EditionWithRelations, SeriesWithPublisher, WorkDetail, WorkSort,
    WorkWithAuthors,
};
use crate::models::{Author, Edition, Photo, Publisher, Series, Work, WorkAuthor};

/// Featured grid size on the home page.
const FEATURED_LIMIT: usize = 8;

/// Row cap on the titles listing.
const TITLES_LIMIT: u64 = 20;

/// Final cap on combined search results.
const SEARCH_RESULT_LIMIT: usize = 50;

/// Per-path caps for the three search lookups.
const SEARCH_TITLE_LIMIT: u64 = 50;
const SEARCH_AUTHOR_LIMIT: u64 = 10;
const SEARCH_AUTHOR_WORKS_LIMIT: u64 = 50;
const SEARCH_EDITION_LIMIT: u64 = 20;

/// Read-only aggregation over the catalog store.
pub struct CatalogService {
    pool: PgPool,
}

impl CatalogService {
    /// Create the service with an injected connection pool.
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }

    /// Newest photo-bearing editions for the home page, enriched with
    /// work, authors, publisher, and series; capped at 8.
    pub async fn featured_editions(&self) -> Vec<EditionWithRelations> {
        let editions = or_empty(Edition::list_newest(&self.pool).await, "editions");
        let enriched = self.enrich_editions(editions, true).await;

        enrich::select_featured(enriched, FEATURED_LIMIT)
    }

    /// All publishers and all series, each list name-ascending.
    ///
    /// The two listings are independent and fetched concurrently.
    /// Series resolve their publisher from the publisher listing; a
    /// dangling publisher id leaves the field absent.
    pub async fn publishers_and_series(&self) -> (Vec<Publisher>, Vec<SeriesWithPublisher>) {
        let (publishers, series) = tokio::join!(
            Publisher::list_all(&self.pool),
            Series::list_all(&self.pool),
        );
        let publishers = or_empty(publishers, "publishers");
        let series = or_empty(series, "series");

        let by_id: HashMap<i64, Publisher> =
            publishers.iter().map(|p| (p.id, p.clone())).collect();
        let series = series
            .into_iter()
            .map(|series| SeriesWithPublisher {
                publisher: series.publisher_id.and_then(|id| by_id.get(&id).cloned()),
                series,
            })
            .collect();

        (publishers, series)
    }

    /// Work listing with authors, capped at 20 rows.
    ///
    /// `letter` applies a case-insensitive prefix filter on the
    /// original title. Column sorts are pushed to the store; the
    /// author sort is performed in memory because the author is not a
    /// column of the works table.
    pub async fn list_works(
        &self,
        letter: Option<&str>,
        sort: WorkSort,
        direction: SortDirection,
    ) -> Vec<WorkWithAuthors> {
        let mut query = ListQuery::new(Work::TABLE, Work::COLUMNS).limit(TITLES_LIMIT);

        if let Some(letter) = letter {
            query = query.filter(TextFilter::prefix("original_title", letter));
        }

        query = match sort.column() {
            Some(column) => query.sort(column, direction),
            // Deferred sort: fetch title-ascending, order in memory.
            None => query.sort("original_title", SortDirection::Asc),
        };

        let works = or_empty(query.fetch_all::<Work>(&self.pool).await, "works");
        let mut works = self.attach_authors(works).await;

        if sort == WorkSort::Author {
            enrich::sort_works_by_author(&mut works, direction);
        }

        works
    }

    /// Free-text search over the catalog.
    ///
    /// Spans three lookups: work titles (original or English), author
    /// names expanded to their works, and edition titles expanded to
    /// their owning works. Results are concatenated in that priority
    /// order, deduplicated by work id (first occurrence wins), and
    /// capped at 50.
    pub async fn search_works(&self, term: &str) -> Vec<WorkWithAuthors> {
        if term.is_empty() {
            return Vec::new();
        }

        let (by_title, by_author, by_edition) = tokio::join!(
            self.works_by_title(term),
            self.works_by_author_name(term),
            self.works_by_edition_title(term),
        );

        let works =
            enrich::combine_search_paths(by_title, by_author, by_edition, SEARCH_RESULT_LIMIT);

        self.attach_authors(works).await
    }

    /// Work detail page: the work with authors plus its editions,
    /// publication year descending. `None` only when the work itself
    /// cannot be fetched; zero editions is a normal result.
    pub async fn work_detail(&self, id: i64) -> Option<WorkDetail> {
        let work = page_entity(Work::find_by_id(&self.pool, id).await, "work")?;
        let work = self.attach_authors(vec![work]).await.pop()?;

        let editions = or_empty(
            Edition::list_for_work(&self.pool, id).await,
            "editions for work",
        );
        let editions = self.enrich_editions(editions, false).await;

        Some(WorkDetail { work, editions })
    }

    /// Edition detail page with every relation attached and photos in
    /// display order.
    pub async fn edition_detail(&self, id: i64) -> Option<EditionWithRelations> {
        let edition = page_entity(Edition::find_by_id(&self.pool, id).await, "edition")?;

        let mut detail = self.enrich_editions(vec![edition], true).await.pop()?;
        enrich::sort_photos(&mut detail.photos);

        Some(detail)
    }

    /// Author detail page: the author plus their works, title
    /// ascending.
    pub async fn author_detail(&self, id: i64) -> Option<AuthorDetail> {
        let author = page_entity(Author::find_by_id(&self.pool, id).await, "author")?;

        let work_ids = or_empty(
            WorkAuthor::work_ids_for_author(&self.pool, id).await,
            "work ids for author",
        );
        let mut works = or_empty(
            Work::find_by_ids(&self.pool, &work_ids).await,
            "works for author",
        );
        works.sort_by_cached_key(|w| w.original_title.to_lowercase());

        Some(AuthorDetail { author, works })
    }

    /// Works whose original or English title contains the term.
    async fn works_by_title(&self, term: &str) -> Vec<Work> {
        let query = ListQuery::new(Work::TABLE, Work::COLUMNS)
            .filter(TextFilter::any_substring(
                &["original_title", "english_title"],
                term,
            ))
            .limit(SEARCH_TITLE_LIMIT);

        or_empty(query.fetch_all(&self.pool).await, "works by title")
    }

    /// Works linked to an author whose name contains the term.
    async fn works_by_author_name(&self, term: &str) -> Vec<Work> {
        let authors = or_empty(
            Author::search_by_name(&self.pool, term, SEARCH_AUTHOR_LIMIT).await,
            "authors by name",
        );
        if authors.is_empty() {
            return Vec::new();
        }

        let author_ids: Vec<i64> = authors.iter().map(|a| a.id).collect();
        let work_ids = or_empty(
            WorkAuthor::work_ids_for_authors(&self.pool, &author_ids, SEARCH_AUTHOR_WORKS_LIMIT)
                .await,
            "work ids for authors",
        );

        or_empty(
            Work::find_by_ids(&self.pool, &work_ids).await,
            "works by author",
        )
    }

    /// Works owning an edition whose title contains the term.
    async fn works_by_edition_title(&self, term: &str) -> Vec<Work> {
        let work_ids = or_empty(
            Edition::search_work_ids_by_title(&self.pool, term, SEARCH_EDITION_LIMIT).await,
            "work ids by edition title",
        );
        let work_ids = enrich::distinct_ids(&work_ids, |id| Some(*id));

        or_empty(
            Work::find_by_ids(&self.pool, &work_ids).await,
            "works by edition title",
        )
    }

    /// Batch foreign-key resolution for a list of editions.
    ///
    /// Collects the distinct work/publisher/series ids, issues one
    /// id-set fetch per entity type plus the photo batch, and attaches
    /// the resolved entities by id. A foreign key that resolves to
    /// nothing leaves the field absent.
    async fn enrich_editions(
        &self,
        editions: Vec<Edition>,
        attach_work: bool,
    ) -> Vec<EditionWithRelations> {
        if editions.is_empty() {
            return Vec::new();
        }

        let edition_ids: Vec<i64> = editions.iter().map(|e| e.id).collect();
        let work_ids = if attach_work {
            enrich::distinct_ids(&editions, |e| Some(e.work_id))
        } else {
            Vec::new()
        };
        let publisher_ids = enrich::distinct_ids(&editions, |e| e.publisher_id);
        let series_ids = enrich::distinct_ids(&editions, |e| e.series_id);

        let (photos, works, publishers, series) = tokio::join!(
            Photo::list_for_editions(&self.pool, &edition_ids),
            Work::find_by_ids(&self.pool, &work_ids),
            Publisher::find_by_ids(&self.pool, &publisher_ids),
            Series::find_by_ids(&self.pool, &series_ids),
        );
        let photos = or_empty(photos, "photos");
        let works = or_empty(works, "works");
        let publishers = or_empty(publishers, "publishers");
        let series = or_empty(series, "series");

        // Second hop depends on the fetched works.
        let works = self.attach_authors(works).await;
        let works = enrich::index_by_id(works, |w| w.work.id);
        let publishers = enrich::index_by_id(publishers, |p| p.id);
        let series = enrich::index_by_id(series, |s| s.id);

        let mut photos_by_edition: HashMap<i64, Vec<Photo>> = HashMap::new();
        for photo in photos {
            if let Some(edition_id) = photo.edition_id {
                photos_by_edition.entry(edition_id).or_default().push(photo);
            }
        }

        editions
            .into_iter()
            .map(|edition| {
                let work = works.get(&edition.work_id).cloned();
                let publisher = edition
                    .publisher_id
                    .and_then(|id| publishers.get(&id).cloned());
                let linked_series = edition.series_id.and_then(|id| series.get(&id).cloned());
                let photos = photos_by_edition.remove(&edition.id).unwrap_or_default();

                EditionWithRelations {
                    work,
                    publisher,
                    series: linked_series,
                    photos,
                    edition,
                }
            })
            .collect()
    }

    /// Attach linked authors to a batch of works, in join-table order.
    async fn attach_authors(&self, works: Vec<Work>) -> Vec<WorkWithAuthors> {
        let work_ids: Vec<i64> = works.iter().map(|w| w.id).collect();

        let links = or_empty(
            WorkAuthor::for_works(&self.pool, &work_ids).await,
            "work/author links",
        );
        let author_ids = enrich::distinct_ids(&links, |l| Some(l.author_id));
        let authors = or_empty(Author::find_by_ids(&self.pool, &author_ids).await, "authors");

        let mut by_work =
            enrich::group_authors_by_work(&links, &enrich::index_by_id(authors, |a| a.id));

        works
            .into_iter()
            .map(|work| {
                let authors = by_work.remove(&work.id).unwrap_or_default();
                WorkWithAuthors { work, authors }
            })
            .collect()
    }
}

/// Treat a failed list fetch as empty, with a log trail.
fn or_empty<T>(result: anyhow::Result<Vec<T>>, what: &'static str) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(e) => {
            error!(error = %e, what, "catalog fetch failed, treating as empty");
            Vec::new()
        }
    }
}

/// Unwrap a page-defining lookup; both absence and failure render the
/// page as NotFound.
fn page_entity<T>(result: anyhow::Result<Option<T>>, what: &'static str) -> Option<T> {
    match result {
        Ok(found) => found,
        Err(e) => {
            error!(error = %e, what, "page-defining lookup failed");
            None
        }
    }
}
