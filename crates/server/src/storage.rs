//! Photo display-URL construction.
//!
//! Photo binaries live in external object storage; rows only carry a
//! relative `storage_path`. This service joins that path onto the
//! configured public base URL at render time. It never uploads or
//! mutates storage.

use url::Url;

/// Builds public display URLs for stored photos.
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    base_url: Url,
}

impl PhotoStorage {
    /// Create a storage URL builder from the configured base URL.
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    /// Public display URL for a stored photo path.
    ///
    /// Returns `None` when the stored path does not form a valid URL
    /// against the base; a bad path must never fail a page.
    pub fn public_url(&self, storage_path: &str) -> Option<String> {
        // Url::join treats the base as a directory only when it ends
        // with a slash; normalize so relative paths append.
        let base = if self.base_url.path().ends_with('/') {
            self.base_url.clone()
        } else {
            let mut with_slash = self.base_url.clone();
            with_slash.set_path(&format!("{}/", self.base_url.path()));
            with_slash
        };

        match base.join(storage_path.trim_start_matches('/')) {
            Ok(url) => Some(url.to_string()),
            Err(e) => {
                tracing::warn!(storage_path, error = %e, "unusable photo storage path");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn storage(base: &str) -> PhotoStorage {
        PhotoStorage::new(base.parse().unwrap())
    }

    #[test]
    fn joins_relative_path() {
        let s = storage("https://cdn.example.com/book-photos");
        assert_eq!(
            s.public_url("editions/42/cover.jpg").as_deref(),
            Some("https://cdn.example.com/book-photos/editions/42/cover.jpg")
        );
    }

    #[test]
    fn base_with_trailing_slash() {
        let s = storage("https://cdn.example.com/book-photos/");
        assert_eq!(
            s.public_url("cover.jpg").as_deref(),
            Some("https://cdn.example.com/book-photos/cover.jpg")
        );
    }

    #[test]
    fn leading_slash_in_stored_path_is_tolerated() {
        let s = storage("https://cdn.example.com/book-photos");
        assert_eq!(
            s.public_url("/cover.jpg").as_deref(),
            Some("https://cdn.example.com/book-photos/cover.jpg")
        );
    }
}
