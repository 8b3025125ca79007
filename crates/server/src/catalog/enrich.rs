//! Pure aggregation helpers.
//!
//! The store cannot express these joins and derivations in one call,
//! so they run in memory after the batch fetches. Several pages need
//! the same behavior (cover photo, author sort, search dedup), which
//! is why it lives here and not in page handlers.

use std::collections::HashMap;

use crate::catalog::query::SortDirection;
use crate::catalog::types::{EditionWithRelations, WorkWithAuthors};
use crate::models::{Author, Photo, Work, WorkAuthor};

/// Index fetched rows by id.
///
/// The map contains exactly the ids present in `items`; ids the store
/// did not return are simply absent.
pub fn index_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> i64) -> HashMap<i64, T> {
    items.into_iter().map(|item| (id(&item), item)).collect()
}

/// Distinct non-null foreign-key values, in order of first appearance.
pub fn distinct_ids<T>(items: &[T], key: impl Fn(&T) -> Option<i64>) -> Vec<i64> {
    let mut seen = std::collections::HashSet::new();
    items
        .iter()
        .filter_map(|item| key(item))
        .filter(|id| seen.insert(*id))
        .collect()
}

/// The representative photo of an edition: lowest sort order, ties
/// broken by slice order.
pub fn cover_photo(photos: &[Photo]) -> Option<&Photo> {
    photos.iter().min_by_key(|p| p.sort_order)
}

/// Stable ascending sort by sort order.
pub fn sort_photos(photos: &mut [Photo]) {
    photos.sort_by_key(|p| p.sort_order);
}

/// Group resolved authors per work, preserving join-table row order.
///
/// Links whose author failed to resolve are dropped; a missing author
/// never blocks the work.
pub fn group_authors_by_work(
    links: &[WorkAuthor],
    authors: &HashMap<i64, Author>,
) -> HashMap<i64, Vec<Author>> {
    let mut grouped: HashMap<i64, Vec<Author>> = HashMap::new();
    for link in links {
        if let Some(author) = authors.get(&link.author_id) {
            grouped.entry(link.work_id).or_default().push(author.clone());
        }
    }
    grouped
}

/// In-memory comparator sort by primary-author name.
///
/// The author is not a column of the works table, so the store cannot
/// sort by it; the comparison is case-insensitive. Works without
/// authors sort with an empty key, i.e. first ascending.
pub fn sort_works_by_author(works: &mut [WorkWithAuthors], direction: SortDirection) {
    works.sort_by_cached_key(|w| {
        w.primary_author()
            .map(|a| a.name.to_lowercase())
            .unwrap_or_default()
    });
    if direction == SortDirection::Desc {
        works.reverse();
    }
}

/// Deduplicate by id, first occurrence wins.
///
/// Search results concatenate three lookup paths before calling this,
/// so concatenation order decides which path a duplicate keeps.
pub fn dedup_by_id<T>(items: Vec<T>, id: impl Fn(&T) -> i64) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|item| seen.insert(id(item))).collect()
}

/// Featured selection over the enriched edition list: drop photo-less
/// entries, keep input order, cap the grid size.
pub fn select_featured(
    editions: Vec<EditionWithRelations>,
    cap: usize,
) -> Vec<EditionWithRelations> {
    editions
        .into_iter()
        .filter(|e| !e.photos.is_empty())
        .take(cap)
        .collect()
}

/// Combine the three search paths into one result list.
///
/// Concatenates in priority order (title, then author, then edition),
/// deduplicates by work id with the earliest position winning, and
/// caps the total.
pub fn combine_search_paths(
    by_title: Vec<Work>,
    by_author: Vec<Work>,
    by_edition: Vec<Work>,
    cap: usize,
) -> Vec<Work> {
    let mut combined = by_title;
    combined.extend(by_author);
    combined.extend(by_edition);

    dedup_by_id(combined, |w| w.id).into_iter().take(cap).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::Work;

    fn photo(id: i64, sort_order: i32) -> Photo {
        Photo {
            id,
            edition_id: Some(1),
            storage_path: format!("p/{id}.jpg"),
            sort_order,
            caption: None,
            copyright_statement: None,
        }
    }

    fn author(id: i64, name: &str) -> Author {
        Author {
            id,
            name: name.to_string(),
            wiki_link: None,
        }
    }

    fn work_with_author(id: i64, title: &str, author_name: &str) -> WorkWithAuthors {
        WorkWithAuthors {
            work: Work {
                id,
                original_title: title.to_string(),
                english_title: None,
                original_publication_year: None,
                original_language: None,
                wiki_link: None,
            },
            authors: vec![author(id * 100, author_name)],
        }
    }

    #[test]
    fn index_contains_exactly_fetched_ids() {
        let map = index_by_id(vec![author(1, "A"), author(3, "C")], |a| a.id);

        assert_eq!(map.len(), 2);
        assert!(map.contains_key(&1));
        assert!(map.contains_key(&3));
        assert!(!map.contains_key(&2));
    }

    #[test]
    fn distinct_ids_skip_nulls_and_duplicates() {
        let keys = [Some(5), None, Some(3), Some(5), Some(3), None];
        let ids = distinct_ids(&keys, |k| *k);

        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn cover_photo_is_minimum_sort_order_any_permutation() {
        let a = photo(1, 2);
        let b = photo(2, 0);
        let c = photo(3, 1);

        for photos in [
            vec![a.clone(), b.clone(), c.clone()],
            vec![c.clone(), a.clone(), b.clone()],
            vec![b.clone(), c.clone(), a.clone()],
        ] {
            assert_eq!(cover_photo(&photos).map(|p| p.id), Some(2));
        }
    }

    #[test]
    fn cover_photo_tie_broken_by_slice_order() {
        let photos = vec![photo(7, 1), photo(4, 1), photo(9, 1)];
        assert_eq!(cover_photo(&photos).map(|p| p.id), Some(7));
    }

    #[test]
    fn cover_photo_of_empty_set_is_none() {
        assert!(cover_photo(&[]).is_none());
    }

    #[test]
    fn sort_photos_is_stable() {
        let mut photos = vec![photo(7, 1), photo(4, 0), photo(9, 1)];
        sort_photos(&mut photos);

        let ids: Vec<i64> = photos.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 7, 9]);
    }

    #[test]
    fn group_authors_preserves_link_order_and_drops_unresolved() {
        let links = vec![
            WorkAuthor { work_id: 1, author_id: 10 },
            WorkAuthor { work_id: 1, author_id: 11 },
            WorkAuthor { work_id: 2, author_id: 99 },
        ];
        let authors = index_by_id(vec![author(10, "First"), author(11, "Second")], |a| a.id);

        let grouped = group_authors_by_work(&links, &authors);

        let names: Vec<&str> = grouped[&1].iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert!(!grouped.contains_key(&2), "unresolved author dropped");
    }

    #[test]
    fn author_sort_ascending() {
        let mut works = vec![
            work_with_author(1, "Zorba", "B"),
            work_with_author(2, "Anna", "A"),
        ];
        sort_works_by_author(&mut works, SortDirection::Asc);

        let ids: Vec<i64> = works.iter().map(|w| w.work.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn author_sort_descending_equals_reversed_ascending() {
        let make = || {
            vec![
                work_with_author(1, "C", "Melville"),
                work_with_author(2, "A", "austen"),
                work_with_author(3, "B", "Tolstoy"),
                work_with_author(4, "D", "Borges"),
            ]
        };

        let mut asc = make();
        sort_works_by_author(&mut asc, SortDirection::Asc);
        let mut reversed: Vec<i64> = asc.iter().map(|w| w.work.id).collect();
        reversed.reverse();

        let mut desc = make();
        sort_works_by_author(&mut desc, SortDirection::Desc);
        let desc_ids: Vec<i64> = desc.iter().map(|w| w.work.id).collect();

        assert_eq!(desc_ids, reversed);
    }

    #[test]
    fn works_without_authors_sort_first_ascending() {
        let mut works = vec![
            work_with_author(1, "Zorba", "B"),
            WorkWithAuthors {
                work: Work {
                    id: 2,
                    original_title: "Anon".to_string(),
                    english_title: None,
                    original_publication_year: None,
                    original_language: None,
                    wiki_link: None,
                },
                authors: vec![],
            },
        ];
        sort_works_by_author(&mut works, SortDirection::Asc);

        assert_eq!(works[0].work.id, 2);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let items = vec![(1, "title-path"), (2, "title-path"), (1, "author-path")];
        let deduped = dedup_by_id(items, |(id, _)| *id);

        assert_eq!(deduped, vec![(1, "title-path"), (2, "title-path")]);
    }
}
