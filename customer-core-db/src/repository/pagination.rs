/// Page size used when a caller asks for a non-positive or oversized page
pub const DEFAULT_PAGE_SIZE: usize = 20;
/// Largest page a caller may request
pub const MAX_PAGE_SIZE: usize = 200;

/// Pagination parameters for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Create a page request for a specific page number (1-based)
    ///
    /// # Example
    /// ```
    /// use customer_core_db::repository::pagination::PageRequest;
    ///
    /// let page_1 = PageRequest::for_page(20, 1); // offset: 0
    /// let page_2 = PageRequest::for_page(20, 2); // offset: 20
    /// assert_eq!(page_2.offset, 20);
    /// ```
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1).saturating_mul(page_size),
        }
    }

    /// Build a request from untrusted caller paging.
    ///
    /// Never fails: a non-positive `page` becomes 1 and a `limit` outside
    /// `1..=MAX_PAGE_SIZE` becomes `DEFAULT_PAGE_SIZE`.
    ///
    /// # Example
    /// ```
    /// use customer_core_db::repository::pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::clamped(0, 0), PageRequest::for_page(20, 1));
    /// assert_eq!(PageRequest::clamped(3, 50).offset, 100);
    /// ```
    pub fn clamped(page: i64, limit: i64) -> Self {
        let page = if page <= 0 { 1 } else { page as usize };
        let limit = match usize::try_from(limit) {
            Ok(limit) if (1..=MAX_PAGE_SIZE).contains(&limit) => limit,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self::for_page(limit, page)
    }

    /// Get the page number (1-based) for this request
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// A page of results plus the total number of matching rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }
}
