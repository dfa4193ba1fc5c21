//! Pagination types

use serde::{Deserialize, Serialize};

use crate::error::{PageError, Result};

/// Default items per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Validated pagination parameters
///
/// Only constructible through [`Pagination::new`] (or `Default`), so the
/// OFFSET `(page - 1) * page_size` always fits in a BIGINT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    page_size: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// Values below 1 are rejected, not clamped. A `page` whose offset
    /// would overflow a BIGINT for this `page_size` is rejected too.
    ///
    /// # Example
    /// ```
    /// use pagekit_core::models::Pagination;
    ///
    /// assert_eq!(Pagination::new(3, 25).unwrap().offset(), 50);
    /// assert!(Pagination::new(0, 10).is_err());
    /// assert!(Pagination::new(u32::MAX.into(), u32::MAX.into()).is_err());
    /// ```
    pub fn new(page: i64, page_size: i64) -> Result<Self> {
        let page = u32::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| PageError::invalid_pagination("page", page))?;
        let page_size = u32::try_from(page_size)
            .ok()
            .filter(|s| *s >= 1)
            .ok_or_else(|| PageError::invalid_pagination("pageSize", page_size))?;

        let max_page = max_page_for(page_size);
        if page > max_page {
            return Err(PageError::InvalidPaginationParameter {
                field: "page",
                value: i64::from(page),
                max: max_page,
            });
        }
        Ok(Self { page, page_size })
    }

    /// Page number (1-indexed)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Items per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// SQL OFFSET value: `(page - 1) * page_size`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// Largest page whose offset fits in an `i64` for `page_size`.
fn max_page_for(page_size: u32) -> u32 {
    let last_offset_page = i64::MAX / i64::from(page_size);
    u32::try_from(last_offset_page.saturating_add(1)).unwrap_or(u32::MAX)
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub page_size: u32,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    /// Derive page metadata from the total row count.
    pub fn new(pagination: Pagination, total_count: u64) -> Self {
        let total_pages = total_count.div_ceil(u64::from(pagination.page_size));
        Self {
            current_page: pagination.page,
            page_size: pagination.page_size,
            total_count,
            total_pages,
            has_next: u64::from(pagination.page) < total_pages,
            has_previous: pagination.page > 1,
        }
    }
}

/// Paginated response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Rows for the current page
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(total: u64, page: i64, page_size: i64) -> PageInfo {
        PageInfo::new(Pagination::new(page, page_size).unwrap(), total)
    }

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1, 10).unwrap();
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2, 10).unwrap();
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(3, 25).unwrap();
        assert_eq!(p.offset(), 50);
        assert_eq!(p.limit(), 25);
    }

    #[test]
    fn rejects_pages_whose_offset_overflows() {
        let max = i64::from(u32::MAX);
        assert!(matches!(
            Pagination::new(max, max),
            Err(PageError::InvalidPaginationParameter { field: "page", value, .. }) if value == max
        ));

        // Largest accepted page for the largest page size still has a valid offset
        let last = i64::MAX / max + 1;
        let p = Pagination::new(last, max).unwrap();
        assert_eq!(p.offset(), (last - 1) * max);
        assert!(Pagination::new(last + 1, max).is_err());

        // Small page sizes allow every u32 page
        let p = Pagination::new(max, 10).unwrap();
        assert_eq!(p.offset(), (max - 1) * 10);
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            Pagination::new(0, 10),
            Err(PageError::InvalidPaginationParameter { field: "page", value: 0, .. })
        ));
        assert!(matches!(
            Pagination::new(1, -5),
            Err(PageError::InvalidPaginationParameter { field: "pageSize", value: -5, .. })
        ));
        assert!(Pagination::new(1, i64::MAX).is_err());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(info(0, 1, 10).total_pages, 0);
        assert_eq!(info(25, 1, 10).total_pages, 3);
        assert_eq!(info(100, 1, 10).total_pages, 10);
        assert_eq!(info(1, 1, 10).total_pages, 1);
        assert_eq!(info(7, 1, 1).total_pages, 7);
    }

    #[test]
    fn has_next_prev() {
        let first = info(30, 1, 10);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let middle = info(30, 2, 10);
        assert!(middle.has_next);
        assert!(middle.has_previous);

        let last = info(30, 3, 10);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }

    #[test]
    fn empty_result_metadata() {
        let page = info(0, 2, 10);
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(info(25, 1, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "currentPage": 1,
                "pageSize": 10,
                "totalCount": 25,
                "totalPages": 3,
                "hasNext": true,
                "hasPrevious": false
            })
        );
    }
}
