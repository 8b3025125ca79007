//! Folio test utilities.
//!
//! Fixture builders for catalog entities. Every builder fills the
//! non-essential fields with quiet defaults so tests only state what
//! they care about; fields are public, so a test that needs more can
//! set them directly.

use folio_server::models::{Author, Edition, Photo, Publisher, Series, Work, WorkAuthor};

/// Create a test author.
pub fn author(id: i64, name: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
        wiki_link: None,
    }
}

/// Create a test work with the given original title.
pub fn work(id: i64, original_title: &str) -> Work {
    Work {
        id,
        original_title: original_title.to_string(),
        english_title: None,
        original_publication_year: None,
        original_language: None,
        wiki_link: None,
    }
}

/// Create a test edition of a work. No publisher, series, or
/// physical description.
pub fn edition(id: i64, work_id: i64, title: &str) -> Edition {
    Edition {
        id,
        work_id,
        publisher_id: None,
        series_id: None,
        title: title.to_string(),
        isbn: None,
        publication_year: None,
        language: None,
        slipcase: false,
        dustjacket: false,
        size_dimensions: None,
        pages_description: None,
        binding_type: None,
        typeface: None,
        printer: None,
        binder: None,
        details: None,
        notes: None,
    }
}

/// Create a test photo attached to an edition.
pub fn photo(id: i64, edition_id: i64, sort_order: i32) -> Photo {
    Photo {
        id,
        edition_id: Some(edition_id),
        storage_path: format!("editions/{edition_id}/{id}.jpg"),
        sort_order,
        caption: None,
        copyright_statement: None,
    }
}

/// Create a test publisher.
pub fn publisher(id: i64, name: &str) -> Publisher {
    Publisher {
        id,
        name: name.to_string(),
    }
}

/// Create a test series.
pub fn series(id: i64, name: &str, publisher_id: Option<i64>) -> Series {
    Series {
        id,
        name: name.to_string(),
        publisher_id,
    }
}

/// Create a work/author link.
pub fn link(work_id: i64, author_id: i64) -> WorkAuthor {
    WorkAuthor { work_id, author_id }
}
