//! Pagination over the filtered set.
//!
//! Pages are 1-based. Every function keeps the current page inside
//! `[1, page_count(len, rows)]`.

use crate::config::defaults;
use crate::models::coerce_number;

/// Number of pages for `len` items, never less than 1.
#[must_use]
pub fn page_count(len: usize, rows_per_page: usize) -> usize {
    len.div_ceil(rows_per_page.max(1)).max(1)
}

/// Clamp a page number into the valid range.
#[must_use]
pub fn clamp_page(page: usize, len: usize, rows_per_page: usize) -> usize {
    page.clamp(1, page_count(len, rows_per_page))
}

/// The contiguous slice `[(page-1)*rows, page*rows)` of `items`.
#[must_use]
pub fn page_slice<T>(items: &[T], page: usize, rows_per_page: usize) -> &[T] {
    let rows = rows_per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(rows).min(items.len());
    let end = start.saturating_add(rows).min(items.len());
    &items[start..end]
}

/// Page after "Previous": decrements only above page 1.
#[must_use]
pub fn prev_page(page: usize) -> usize {
    if page > 1 { page - 1 } else { page }
}

/// Page after "Next": increments only below the last page.
#[must_use]
pub fn next_page(page: usize, len: usize, rows_per_page: usize) -> usize {
    if page < len.div_ceil(rows_per_page.max(1)) { page + 1 } else { page }
}

/// Coerce a raw rows-per-page input; anything not positive uses the default.
#[must_use]
pub fn coerce_rows_per_page(raw: &str) -> usize {
    let n = coerce_number(raw).floor();
    if n >= 1.0 { n as usize } else { defaults::ROWS_PER_PAGE }
}

/// Position summary for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-based).
    pub page: usize,
    /// Total pages (at least 1).
    pub pages: usize,
    /// 1-based index of the first item shown, 0 when nothing is shown.
    pub first: usize,
    /// 1-based index of the last item shown, 0 when nothing is shown.
    pub last: usize,
    /// Items in the filtered set.
    pub total: usize,
}

impl PageInfo {
    /// Compute the summary for a page.
    #[must_use]
    pub fn new(page: usize, len: usize, rows_per_page: usize) -> Self {
        let rows = rows_per_page.max(1);
        let page = clamp_page(page, len, rows);
        let shown = page_slice_len(page, len, rows);
        let first = if shown == 0 { 0 } else { (page - 1) * rows + 1 };
        let last = if shown == 0 { 0 } else { first + shown - 1 };
        Self { page, pages: page_count(len, rows), first, last, total: len }
    }

    /// Whether "Previous" would move.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether "Next" would move.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.total > 0 && self.page < self.pages
    }
}

impl std::fmt::Display for PageInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Showing {}-{} of {} (page {}/{})",
            self.first, self.last, self.total, self.page, self.pages
        )
    }
}

fn page_slice_len(page: usize, len: usize, rows: usize) -> usize {
    let start = (page - 1).saturating_mul(rows).min(len);
    (start + rows).min(len) - start
}
