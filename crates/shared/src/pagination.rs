//! Offset-based pagination utilities.

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on rows per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Normalized pagination parameters.
///
/// Pages are 1-indexed. Out-of-range input is clamped rather than rejected:
/// `page` is floored at 1 and `page_size` is clamped to `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    page: i64,
    page_size: i64,
}

impl PageParams {
    /// Normalize raw (possibly absent) page and page-size values.
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Row offset for the current page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Total page count for `total` matching rows.
    pub fn total_pages(&self, total: i64) -> i64 {
        pages_for(total, self.page_size)
    }
}

/// Number of pages needed for `total` rows at `page_size` rows per page.
/// Zero rows (or a nonpositive page size) is zero pages.
pub fn pages_for(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        0
    } else {
        (total + page_size - 1) / page_size
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PageParams::new(None, None);
        assert_eq!(params.page(), 1);
        assert_eq!(params.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_offset_derivation() {
        let params = PageParams::new(Some(2), Some(10));
        assert_eq!(params.offset(), 10);

        let params = PageParams::new(Some(5), Some(25));
        assert_eq!(params.offset(), 100);
    }

    #[test]
    fn test_page_floored_at_one() {
        let params = PageParams::new(Some(0), Some(10));
        assert_eq!(params.page(), 1);
        assert_eq!(params.offset(), 0);

        let params = PageParams::new(Some(-3), Some(10));
        assert_eq!(params.page(), 1);
    }

    #[test]
    fn test_page_size_clamped() {
        let params = PageParams::new(Some(1), Some(0));
        assert_eq!(params.page_size(), 1);

        let params = PageParams::new(Some(1), Some(10_000));
        assert_eq!(params.page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn test_total_pages() {
        let params = PageParams::new(Some(1), Some(10));
        assert_eq!(params.total_pages(0), 0);
        assert_eq!(params.total_pages(1), 1);
        assert_eq!(params.total_pages(10), 1);
        assert_eq!(params.total_pages(11), 2);
        assert_eq!(params.total_pages(95), 10);
    }

    #[test]
    fn test_default_trait() {
        assert_eq!(PageParams::default(), PageParams::new(None, None));
    }

    #[test]
    fn test_pages_for_standalone() {
        assert_eq!(pages_for(7, 3), 3);
        assert_eq!(pages_for(6, 3), 2);
        assert_eq!(pages_for(0, 3), 0);
        assert_eq!(pages_for(5, 0), 0);
        assert_eq!(pages_for(5, -1), 0);
    }
}
