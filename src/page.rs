//! Pure pagination over a cached result list.
//!
//! Slicing is total: any page index is acceptable and out-of-range pages
//! simply yield no items, with the navigation flags computed from the same
//! arithmetic. Nothing here touches the network or the cache.

use crate::types::ResultRecord;
use serde::{Deserialize, Serialize};

/// One rendered page of a result list: the menu render model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Records on this page, in cached order.
    pub items: Vec<ResultRecord>,
    /// The 0-based page index this view was computed for.
    pub page_index: usize,
    /// Total number of records in the underlying list.
    pub total: usize,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl Page {
    /// Menu labels for this page, numbered from the page's first item.
    ///
    /// Numbering is global across pages: page 1 of a page-size-5 list
    /// starts at "6.".
    pub fn labels(&self, page_size: usize) -> Vec<String> {
        let start = self.page_index * page_size;
        self.items
            .iter()
            .enumerate()
            .map(|(i, record)| record.label(start + i + 1))
            .collect()
    }
}

/// Slice `records` into the page at `page_index`.
///
/// `items = records[page_index * page_size .. page_index * page_size + page_size]`,
/// clamped to the list bounds. Never panics, for any index.
pub fn page(records: &[ResultRecord], page_index: usize, page_size: usize) -> Page {
    let start = page_index.saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());

    Page {
        items: records[start..end].to_vec(),
        page_index,
        total: records.len(),
        has_previous: page_index > 0,
        has_next: page_index
            .saturating_add(1)
            .saturating_mul(page_size)
            < records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SourceId;

    fn records(n: usize) -> Vec<ResultRecord> {
        (0..n)
            .map(|i| ResultRecord {
                title: format!("Item {i}"),
                size: None,
                detail_ref: format!("/file/{i}"),
                source: SourceId::Scloud,
            })
            .collect()
    }

    #[test]
    fn first_page_of_twelve_items() {
        let list = records(12);
        let p = page(&list, 0, 5);
        assert_eq!(p.items.len(), 5);
        assert_eq!(p.items[0].title, "Item 0");
        assert_eq!(p.items[4].title, "Item 4");
        assert!(!p.has_previous);
        assert!(p.has_next);
        assert_eq!(p.total, 12);
    }

    #[test]
    fn middle_page_has_both_flags() {
        let list = records(12);
        let p = page(&list, 1, 5);
        assert_eq!(p.items.len(), 5);
        assert_eq!(p.items[0].title, "Item 5");
        assert!(p.has_previous);
        assert!(p.has_next);
    }

    #[test]
    fn last_partial_page_of_twelve_items() {
        let list = records(12);
        let p = page(&list, 2, 5);
        assert_eq!(p.items.len(), 2);
        assert_eq!(p.items[0].title, "Item 10");
        assert_eq!(p.items[1].title, "Item 11");
        assert!(p.has_previous);
        assert!(!p.has_next);
    }

    #[test]
    fn page_beyond_end_is_empty_never_panics() {
        let list = records(12);
        let p = page(&list, 99, 5);
        assert!(p.items.is_empty());
        assert!(p.has_previous);
        assert!(!p.has_next);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let list = records(10);
        let p = page(&list, 1, 5);
        assert_eq!(p.items.len(), 5);
        assert!(!p.has_next);
    }

    #[test]
    fn empty_list_pages_cleanly() {
        let p = page(&[], 0, 5);
        assert!(p.items.is_empty());
        assert!(!p.has_previous);
        assert!(!p.has_next);
        assert_eq!(p.total, 0);
    }

    #[test]
    fn huge_index_does_not_overflow() {
        let list = records(3);
        let p = page(&list, usize::MAX, usize::MAX);
        assert!(p.items.is_empty());
        assert!(!p.has_next);
    }

    #[test]
    fn labels_number_globally_across_pages() {
        let list = records(12);
        let p = page(&list, 1, 5);
        let labels = p.labels(5);
        assert_eq!(labels[0], "6. Item 5");
        assert_eq!(labels[4], "10. Item 9");
    }
}
