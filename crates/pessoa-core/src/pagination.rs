//! Pagination types.
//!
//! Page numbers are 0-based, matching the request model the generated REST
//! layer uses (`page`, `size`, `sort`). A `Page` carries the slice of
//! records for one page plus the total count for the whole filtered set, so
//! the transport layer can build navigation headers.

use serde::{Deserialize, Serialize};

/// A page request: 0-based page number and page size.
///
/// The sort specification travels separately (it is entity-specific, see
/// `pessoa-queries::sorts`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// Page number, 0-based
    pub page: i64,
    /// Items per page
    pub size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self {
            page: page.max(0),
            size: size.clamp(1, 1000),
        }
    }

    /// First record index covered by this page.
    ///
    /// The fields are public and a deserialized request bypasses [`new`],
    /// so out-of-range values are clamped here as well: page below 0 reads
    /// as the first page, size outside 1..=1000 is clamped.
    ///
    /// [`new`]: PageRequest::new
    pub fn offset(&self) -> i64 {
        self.page.max(0) * self.limit()
    }

    pub fn limit(&self) -> i64 {
        self.size.clamp(1, 1000)
    }
}

/// One page of results plus the total count for the same filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages
    pub total: i64,
    /// Page number, 0-based
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page.max(0),
            size: request.limit(),
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.size == 0 {
            1
        } else {
            (self.total + self.size - 1) / self.size
        }
    }

    pub fn has_next(&self) -> bool {
        (self.page + 1) * self.size < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Map page items while keeping the pagination metadata.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            size: self.size,
        }
    }
}
