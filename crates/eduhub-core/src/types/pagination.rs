//! Pagination types for paged list endpoints.

use serde::{Deserialize, Serialize};

/// Default page size used by the console list views.
const DEFAULT_PAGE_SIZE: u64 = 8;
/// Maximum page size the backend accepts.
const MAX_PAGE_SIZE: u64 = 100;

/// Request parameters for paginated queries.
///
/// Serialized as `page`/`limit` query parameters, the names the backend
/// expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size", rename = "limit")]
    pub limit: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// The request for the following page.
    pub fn next(&self) -> Self {
        Self::new(self.page + 1, self.limit)
    }

    /// The request for the preceding page (saturating at page 1).
    pub fn previous(&self) -> Self {
        Self::new(self.page.saturating_sub(1).max(1), self.limit)
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

/// One page of results together with the backend's page count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create a new page of results.
    pub fn new(items: Vec<T>, page: u64, total_pages: u64) -> Self {
        Self {
            items,
            page,
            total_pages: total_pages.max(1),
        }
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_clamps() {
        let req = PageRequest::new(0, 500);
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_previous_saturates_at_one() {
        let req = PageRequest::new(1, 8);
        assert_eq!(req.previous().page, 1);
    }

    #[test]
    fn test_paginated_navigation() {
        let page: Paginated<u32> = Paginated::new(vec![1, 2], 2, 3);
        assert!(page.has_next());
        assert!(page.has_previous());
    }
}
