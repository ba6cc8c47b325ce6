//! Pagination control.
//!
//! Builds the page-link strip from the server's pagination metadata and
//! decides what a click does. Moving to another page is a full page load,
//! so a click either stays put or yields the URL to navigate to.

/// One rendered page link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page: u32,
    pub current: bool,
}

/// What a click on a page link does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Current page or out-of-range link, nothing happens.
    Stay,
    /// Full page load at this URL.
    Goto(String),
}

/// Client-side mirror of the server's pagination state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControl {
    base: String,
    current: u32,
    total_pages: u32,
}

impl PaginationControl {
    /// `base` is the list path without a query string; `total` and
    /// `page_size` come from the rendered page. An empty list still gets a
    /// single page.
    #[must_use]
    pub fn new(base: impl Into<String>, current: u32, total: u64, page_size: u32) -> Self {
        let total_pages = total
            .div_ceil(u64::from(page_size.max(1)))
            .try_into()
            .unwrap_or(u32::MAX);

        Self {
            base: base.into(),
            current: current.max(1),
            total_pages: total_pages.max(1),
        }
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// The link strip, one entry per page with the current one marked.
    #[must_use]
    pub fn links(&self) -> Vec<PageLink> {
        (1..=self.total_pages)
            .map(|page| PageLink {
                page,
                current: page == self.current,
            })
            .collect()
    }

    /// Resolve a click on a page link.
    #[must_use]
    pub fn click(&self, page: u32) -> Navigation {
        if page == self.current || page < 1 || page > self.total_pages {
            return Navigation::Stay;
        }

        Navigation::Goto(format!("{}?page={page}", self.base))
    }
}
