use crate::domain::model::{PaginationState, ParameterSet};
use serde::Serialize;
use std::fmt;

/// One entry in a rendered row of page controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageItem {
    Page(u64),
    Ellipsis,
}

/// "Showing X to Y of Z results".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRange {
    pub from: u64,
    pub to: u64,
    pub total: u64,
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} results",
            self.from, self.to, self.total
        )
    }
}

impl PaginationState {
    pub fn new(current_page: u64, limit: u64, total_count: u64) -> Self {
        Self {
            current_page: current_page.max(1),
            limit: limit.max(1),
            total_count,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total_count.div_ceil(self.limit.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn display_range(&self) -> DisplayRange {
        let to = self
            .current_page
            .saturating_mul(self.limit)
            .min(self.total_count);
        let from = if self.total_count == 0 {
            0
        } else {
            self.current_page
                .saturating_sub(1)
                .saturating_mul(self.limit)
                .saturating_add(1)
        };

        DisplayRange {
            from,
            to,
            total: self.total_count,
        }
    }

    /// Page numbers to render: the first and last page, `window` pages either
    /// side of the current one, and an ellipsis for each gap.
    pub fn page_items(&self, window: u64) -> Vec<PageItem> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }

        let current = self.current_page.min(total);
        let start = current.saturating_sub(window).max(1);
        let end = current.saturating_add(window).min(total);

        let mut items = Vec::new();
        if start > 1 {
            items.push(PageItem::Page(1));
            if start > 2 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.extend((start..=end).map(PageItem::Page));
        if end < total {
            if end < total - 1 {
                items.push(PageItem::Ellipsis);
            }
            items.push(PageItem::Page(total));
        }
        items
    }
}

/// Builds relative result-page URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrlBuilder {
    results_path: String,
}

impl PageUrlBuilder {
    pub fn new(results_path: impl Into<String>) -> Self {
        Self {
            results_path: results_path.into(),
        }
    }

    /// URL for `target_page` with every other parameter kept verbatim.
    ///
    /// The target is not checked against the total page count; an
    /// out-of-range page is left for the listing query to answer.
    pub fn page_url(&self, params: &ParameterSet, target_page: u64) -> String {
        let mut params = params.clone();
        params.set("page", target_page.max(1).to_string());
        format!("{}?{}", self.results_path, params.to_query_string())
    }

    pub fn previous_url(&self, state: &PaginationState, params: &ParameterSet) -> Option<String> {
        state
            .has_previous()
            .then(|| self.page_url(params, state.current_page - 1))
    }

    pub fn next_url(&self, state: &PaginationState, params: &ParameterSet) -> Option<String> {
        state
            .has_next()
            .then(|| self.page_url(params, state.current_page + 1))
    }
}

impl Default for PageUrlBuilder {
    fn default() -> Self {
        Self::new("/results")
    }
}
