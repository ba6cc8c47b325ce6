//! Page-number handling.

/// Rows per page, fixed process-wide.
pub const PAGE_SIZE: u32 = 10;

/// A validated, 1-indexed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    /// Interpret the raw `page` query parameter. Missing, non-numeric, and
    /// below-1 values all coerce to page 1.
    #[must_use]
    pub fn from_param(raw: Option<&str>) -> Self {
        let page = raw
            .and_then(|value| value.trim().parse::<u32>().ok())
            .filter(|&page| page >= 1)
            .unwrap_or(1);

        Self { page }
    }

    #[must_use]
    pub fn page(self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn limit(self) -> u32 {
        PAGE_SIZE
    }

    /// Row offset of this page's first row.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(PAGE_SIZE)
    }
}
