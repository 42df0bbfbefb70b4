//! Pagination metadata

use serde::{Deserialize, Serialize};

/// Fixed page size used by the listings endpoint
pub const PER_PAGE: u32 = 10;

/// Number of pages needed to show `total` items, `per_page` at a time.
///
/// Returns 0 when there is nothing to show or the page size is 0.
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let per_page = u64::from(per_page);
    let full = total / per_page;
    let partial = u64::from(total % per_page > 0);
    u32::try_from(full + partial).unwrap_or(u32::MAX)
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        Self {
            page,
            per_page,
            total,
            total_pages: total_pages(total, per_page),
        }
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// True on the last page, and also when there are no pages at all.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Whether `page` is a page this pagination can show.
    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, PER_PAGE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, PER_PAGE), 0);
        assert_eq!(total_pages(1, PER_PAGE), 1);
        assert_eq!(total_pages(10, PER_PAGE), 1);
        assert_eq!(total_pages(11, PER_PAGE), 2);
        assert_eq!(total_pages(22, PER_PAGE), 3);
        assert_eq!(total_pages(25, PER_PAGE), 3);
        assert_eq!(total_pages(30, PER_PAGE), 3);
    }

    #[test]
    fn total_pages_matches_ceil_for_all_small_totals() {
        for total in 0..=1_000u64 {
            let expected = total.div_ceil(u64::from(PER_PAGE)) as u32;
            assert_eq!(total_pages(total, PER_PAGE), expected, "total = {total}");
            assert_eq!(total_pages(total, PER_PAGE) == 0, total == 0);
        }
    }

    #[test]
    fn zero_page_size_yields_no_pages() {
        assert_eq!(total_pages(42, 0), 0);
    }

    #[test]
    fn boundaries() {
        let p = Pagination::new(1, PER_PAGE, 25);
        assert!(p.is_first());
        assert!(!p.is_last());
        assert!(p.contains(3));
        assert!(!p.contains(4));
        assert!(!p.contains(0));

        let last = Pagination::new(3, PER_PAGE, 25);
        assert!(last.is_last());

        let empty = Pagination::default();
        assert!(empty.is_first());
        assert!(empty.is_last());
        assert!(!empty.contains(1));
    }
}
