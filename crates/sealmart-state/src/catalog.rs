use sealmart_types::{ExtensionRecord, ExtensionStatus};

/// Records shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One immutable snapshot of what the catalog view shows.
///
/// Holds the records as loaded (newest first, the reader's order) together
/// with the user's current filter, search, and page choices. The `with_*`
/// builders return an updated value; `filtered`, `page_count`, and
/// `current_page` are pure views over it.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    records: Vec<ExtensionRecord>,
    status_filter: Option<ExtensionStatus>,
    category_filter: Option<String>,
    query: String,
    page: usize,
    page_size: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Catalog {
    /// A catalog over freshly loaded records, unfiltered, on the first page.
    pub fn new(records: Vec<ExtensionRecord>) -> Self {
        Self {
            records,
            status_filter: None,
            category_filter: None,
            query: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// An empty catalog with no records loaded yet.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Replace the loaded records, keeping filters but resetting the page.
    pub fn with_records(self, records: Vec<ExtensionRecord>) -> Self {
        Self {
            records,
            page: 0,
            ..self
        }
    }

    /// Show only records with `status`, or everything for `None`.
    pub fn with_status_filter(self, status: Option<ExtensionStatus>) -> Self {
        Self {
            status_filter: status,
            page: 0,
            ..self
        }
    }

    /// Show only records in `category` (exact match), or everything.
    pub fn with_category_filter(self, category: Option<String>) -> Self {
        Self {
            category_filter: category,
            page: 0,
            ..self
        }
    }

    /// Search by name or description, case-insensitive.
    pub fn with_query(self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 0,
            ..self
        }
    }

    /// Jump to a page. Out-of-range pages clamp at view time.
    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    pub fn with_page_size(self, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            page: 0,
            ..self
        }
    }

    /// All loaded records in load order.
    pub fn records(&self) -> &[ExtensionRecord] {
        &self.records
    }

    /// Records passing the current filters and search, in load order.
    pub fn filtered(&self) -> Vec<&ExtensionRecord> {
        let query = self.query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| match self.status_filter {
                Some(status) => r.status == status,
                None => true,
            })
            .filter(|r| match &self.category_filter {
                Some(category) => &r.category == category,
                None => true,
            })
            .filter(|r| {
                query.is_empty()
                    || r.name.to_lowercase().contains(&query)
                    || r.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Number of pages the filtered records fill. Zero when nothing passes.
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    /// The page currently shown, clamped to the last non-empty page.
    pub fn current_page(&self) -> Vec<&ExtensionRecord> {
        let filtered = self.filtered();
        if filtered.is_empty() {
            return Vec::new();
        }
        let last = (filtered.len() - 1) / self.page_size;
        let page = self.page.min(last);
        filtered
            .into_iter()
            .skip(page * self.page_size)
            .take(self.page_size)
            .collect()
    }
}
