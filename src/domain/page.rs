// src/domain/page.rs

/// One page of an ordered result set plus the navigation metadata the
/// templates need.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: i64,
    pub per_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, page: i64, per_page: i64, total_items: i64) -> Self {
        let total_pages = if per_page > 0 {
            (total_items + per_page - 1) / per_page
        } else {
            0
        };
        Self {
            items,
            page,
            per_page,
            total_items,
            total_pages,
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn prev_num(&self) -> Option<i64> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next_num(&self) -> Option<i64> {
        self.has_next().then(|| self.page + 1)
    }

    /// Row offset for a 1-based page number, or `None` when it does not fit
    /// in an `i64` (such a page is necessarily past the end).
    pub fn offset(page: i64, per_page: i64) -> Option<i64> {
        (page.max(1) - 1).checked_mul(per_page)
    }
}

/// Reads `page=N` from a query string. Missing, unparseable or non-positive
/// values fall back to the first page.
pub fn page_from_query(query: Option<&str>) -> i64 {
    query
        .into_iter()
        .flat_map(|q| q.split('&'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "page")
        .and_then(|(_, v)| v.parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}
