//! Page/page-size resolution for paginated listings.
//!
//! Handlers receive raw `?page=&page_size=` values; [`PageRequest::resolve`]
//! applies defaults, rejects values below 1 and clamps oversize pages to the
//! configured maximum. The repository only ever sees a resolved request.

use serde::Serialize;

use crate::error::CoreError;

/// First page number. Pages are 1-based.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a client can obtain; larger requests are clamped.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Configured page-size bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// A validated page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: i64,
    pub page_size: i64,
}

impl PageRequest {
    /// Resolve raw query values into a page request.
    ///
    /// - `page` defaults to 1 and must be >= 1.
    /// - `page_size` defaults to `limits.default_page_size`, must be >= 1 and
    ///   is clamped to `limits.max_page_size`.
    /// - A page whose offset would overflow `i64` is rejected.
    pub fn resolve(
        page: Option<i64>,
        page_size: Option<i64>,
        limits: &PageLimits,
    ) -> Result<Self, CoreError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(CoreError::Validation(format!(
                "page must be >= 1, got {page}"
            )));
        }

        let max = limits.max_page_size.max(1);
        let page_size = page_size.unwrap_or(limits.default_page_size.clamp(1, max));
        if page_size < 1 {
            return Err(CoreError::Validation(format!(
                "page_size must be >= 1, got {page_size}"
            )));
        }
        let page_size = page_size.min(max);

        if (page - 1).checked_mul(page_size).is_none() {
            return Err(CoreError::Validation(format!(
                "page {page} is out of range"
            )));
        }

        Ok(Self { page, page_size })
    }

    /// Number of rows to skip.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }

    /// Number of rows to fetch.
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

/// One page of results plus the pre-pagination total.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: i64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            page_size: request.page_size,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
