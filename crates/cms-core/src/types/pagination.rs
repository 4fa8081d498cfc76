//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size.
const DEFAULT_PAGE_SIZE: u64 = 10;
/// Maximum page size.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request, clamping out-of-range values.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        (self.page.saturating_sub(1)) * self.limit
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Current page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub limit: u64,
}

impl<T> Page<T> {
    /// Create a new page envelope.
    pub fn new(data: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            data,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Create an empty envelope for the given request.
    pub fn empty(request: &PageRequest) -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: request.page,
            limit: request.limit,
        }
    }

    /// Map the items into another type, keeping the envelope.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_math() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 5).offset(), 5);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
    }

    #[test]
    fn test_clamping() {
        let req = PageRequest::new(0, 0);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 1);

        let req = PageRequest::new(1, 10_000);
        assert_eq!(req.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_defaults() {
        let req = PageRequest::default();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 10);
    }

    #[test]
    fn test_empty_page_keeps_request_shape() {
        let req = PageRequest::new(4, 20);
        let page: Page<i32> = Page::empty(&req);
        assert_eq!(page.page, 4);
        assert_eq!(page.limit, 20);
        assert_eq!(page.total, 0);
        assert!(page.data.is_empty());
    }
}
