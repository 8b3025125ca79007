//! Catalog aggregation: dynamic listing queries, batch enrichment,
//! and the service layer that composes them into view-ready records.

pub mod enrich;
pub mod query;
pub mod service;
pub mod types;

pub use query::{ListQuery, SortDirection, TextFilter};
pub use service::CatalogService;
pub use types::{
    AuthorDetail, EditionWithRelations, SeriesWithPublisher, WorkDetail, WorkSort,
    WorkWithAuthors,
};
