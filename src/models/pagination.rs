//! Pagination primitives shared across all list views.

use serde::{Deserialize, Serialize};

/// Response envelope returned by the backend list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    #[serde(rename = "totalCount")]
    pub total_count: u64,
}

impl<T> ListPage<T> {
    /// Display window for this page under the given pagination state.
    pub fn window(&self, page: u64, limit: u64) -> PageWindow {
        window(self.total_count, page, limit)
    }
}

/// Display window derived from `(total_count, page, limit)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    /// Total page count. Kept as `f64`: a page size of zero yields an
    /// unbounded count, reported as `f64::INFINITY` (see [`window`]).
    pub total_pages: f64,
    /// 1-based index of the first visible row; 0 when there are no results.
    pub start_index: u64,
    /// 1-based index of the last visible row; 0 when there are no results.
    pub end_index: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Derive the display window for a list view.
///
/// An empty result set still reports one page, so the pager never renders
/// "page 1 of 0". A `limit` of zero reports infinitely many pages and leaves
/// `has_next` set. Out-of-range pages are not clamped: the backend answers
/// them with an empty page, and callers disable the next control through
/// `has_next` rather than capping `page`.
pub fn window(total_count: u64, page: u64, limit: u64) -> PageWindow {
    let raw = (total_count as f64 / limit as f64).ceil();
    let total_pages = if raw.is_nan() || raw < 1.0 { 1.0 } else { raw };

    let (start_index, end_index) = if total_count == 0 {
        (0, 0)
    } else {
        let start = page.saturating_sub(1) * limit + 1;
        let end = (start + limit - 1).min(total_count);
        (start, end)
    };

    PageWindow {
        total_pages,
        start_index,
        end_index,
        has_prev: page > 1,
        has_next: (page as f64) < total_pages,
    }
}
