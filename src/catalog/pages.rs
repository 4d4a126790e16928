//! Pagination

/// Products fetched per page by the catalog listing.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// An offset/limit window over a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first record
    pub offset: usize,

    /// Maximum number of records
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_LIMIT)
    }
}

impl PageRequest {
    /// Create a page request.
    #[must_use]
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// The following page.
    #[must_use]
    pub fn next(self) -> Self {
        Self::new(self.offset.saturating_add(self.limit), self.limit)
    }

    /// The preceding page, stopping at the first page.
    #[must_use]
    pub fn previous(self) -> Self {
        Self::new(self.offset.saturating_sub(self.limit), self.limit)
    }

    /// Whether this is the first page.
    #[must_use]
    pub fn is_first(self) -> bool {
        self.offset == 0
    }

    /// Apply the window to an in-memory list. Out of range windows give an empty slice.
    pub fn slice<T>(self, records: &[T]) -> &[T] {
        let start = self.offset.min(records.len());
        let end = start.saturating_add(self.limit).min(records.len());

        records.get(start..end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_is_first_ten() {
        let page = PageRequest::default();

        assert_eq!(page, PageRequest::new(0, 10));
        assert!(page.is_first());
    }

    #[test]
    fn next_and_previous_step_by_limit() {
        let page = PageRequest::default().next().next();

        assert_eq!(page.offset, 20);
        assert_eq!(page.previous().offset, 10);
    }

    #[test]
    fn previous_stops_at_zero() {
        let page = PageRequest::new(5, 10).previous();

        assert_eq!(page.offset, 0);
        assert_eq!(page.previous().offset, 0);
    }

    #[test]
    fn slice_clamps_to_list() {
        let records = [1, 2, 3, 4, 5];

        assert_eq!(PageRequest::new(0, 2).slice(&records), [1, 2]);
        assert_eq!(PageRequest::new(4, 2).slice(&records), [5]);
        assert!(PageRequest::new(9, 2).slice(&records).is_empty());
        assert!(PageRequest::new(usize::MAX, usize::MAX).slice(&records).is_empty());
    }
}
