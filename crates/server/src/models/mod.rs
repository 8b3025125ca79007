//! Entity models for the catalog.
//!
//! All rows are typed at this boundary; the aggregation layer never
//! handles untyped data. The catalog is read-only: models expose only
//! fetch operations, every entity is maintained out-of-band.

pub mod author;
pub mod edition;
pub mod photo;
pub mod publisher;
pub mod series;
pub mod work;
pub mod work_author;

pub use author::Author;
pub use edition::Edition;
pub use photo::Photo;
pub use publisher::Publisher;
pub use series::Series;
pub use work::Work;
pub use work_author::WorkAuthor;
