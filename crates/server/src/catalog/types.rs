//! Enriched record types produced by the aggregation layer.

use crate::models::{Author, Edition, Photo, Publisher, Series, Work};

/// A work with its linked authors, in join-table order.
#[derive(Debug, Clone)]
pub struct WorkWithAuthors {
    pub work: Work,
    pub authors: Vec<Author>,
}

impl WorkWithAuthors {
    /// First linked author, used for compact display and author
    /// sorting. Join-table order is stable but unspecified.
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }
}

/// A series with its resolved publisher.
///
/// The publisher is absent when the series has none or when
/// resolution failed; a dangling reference never blocks rendering.
#[derive(Debug, Clone)]
pub struct SeriesWithPublisher {
    pub series: Series,
    pub publisher: Option<Publisher>,
}

/// An edition with its related entities attached.
///
/// Every relation is optional: a foreign key that cannot be resolved
/// leaves the field absent rather than failing the record.
#[derive(Debug, Clone)]
pub struct EditionWithRelations {
    pub edition: Edition,
    pub work: Option<WorkWithAuthors>,
    pub publisher: Option<Publisher>,
    pub series: Option<Series>,
    pub photos: Vec<Photo>,
}

/// A work detail page: the work plus all of its editions.
#[derive(Debug, Clone)]
pub struct WorkDetail {
    pub work: WorkWithAuthors,
    pub editions: Vec<EditionWithRelations>,
}

/// An author detail page: the author plus their works.
#[derive(Debug, Clone)]
pub struct AuthorDetail {
    pub author: Author,
    pub works: Vec<Work>,
}

/// Sort key for the work listing.
///
/// User-supplied `sort` parameters map onto this whitelist; unknown
/// values fall back to the default title sort. `Author` is not a
/// column of the works table and is sorted in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkSort {
    #[default]
    OriginalTitle,
    EnglishTitle,
    OriginalPublicationYear,
    Author,
}

impl WorkSort {
    /// Map a query parameter onto the whitelist.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("english_title") => Self::EnglishTitle,
            Some("original_publication_year") => Self::OriginalPublicationYear,
            Some("author") => Self::Author,
            _ => Self::OriginalTitle,
        }
    }

    /// The store column to sort by, when one exists.
    pub fn column(self) -> Option<&'static str> {
        match self {
            Self::OriginalTitle => Some("original_title"),
            Self::EnglishTitle => Some("english_title"),
            Self::OriginalPublicationYear => Some("original_publication_year"),
            Self::Author => None,
        }
    }
}
