//! Search and filter state for the property listing.
//!
//! [`SearchController`] is the single owner of the query text, price bounds,
//! sort key, and page. The request parameters are derived from that state
//! after every mutation, so [`SearchController::filters`] always reflects the
//! latest committed values.

use estate_model::{DEFAULT_PAGE, PROPERTY_PAGE_SIZE, PropertyFilters, SortOption};

/// Factor applied to a bare number typed in the search box to get the upper
/// price bound.
pub const NUMERIC_QUERY_SPREAD: f64 = 1.5;

/// Optional lower and upper price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceBounds {
    /// Lower bound, `None` when unbounded.
    pub min: Option<f64>,
    /// Upper bound, `None` when unbounded.
    pub max: Option<f64>,
}

impl PriceBounds {
    /// Create bounds from optional values.
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Whether neither bound is set.
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Owner of the listing's search state.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchController {
    query: String,
    bounds: PriceBounds,
    sort: SortOption,
    page: u32,
    page_size: u32,
    filters: PropertyFilters,
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(PROPERTY_PAGE_SIZE)
    }
}

impl SearchController {
    /// Create a controller with the given page size.
    pub fn new(page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let mut controller = Self {
            query: String::new(),
            bounds: PriceBounds::default(),
            sort: SortOption::Default,
            page: DEFAULT_PAGE,
            page_size,
            filters: PropertyFilters::default(),
        };
        controller.recompute();
        controller
    }

    /// Store the trimmed query text and go back to the first page.
    ///
    /// Returns whether the derived filters changed.
    pub fn set_search_query(&mut self, text: &str) -> bool {
        self.query = text.trim().to_string();
        self.page = DEFAULT_PAGE;
        self.recompute()
    }

    /// Store the price bounds and go back to the first page.
    ///
    /// Bounds are passed through as given; ordering is not enforced here.
    /// Returns whether the derived filters changed.
    pub fn set_price_range(&mut self, bounds: PriceBounds) -> bool {
        self.bounds = bounds;
        self.page = DEFAULT_PAGE;
        self.recompute()
    }

    /// Store the sort key. The page is kept and no refetch is needed.
    pub fn set_sort_option(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// Store a 1-based page number.
    ///
    /// Returns whether the derived filters changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        self.page = page;
        self.recompute()
    }

    /// Current request parameters.
    pub fn filters(&self) -> &PropertyFilters {
        &self.filters
    }

    /// Committed query text (trimmed).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Committed price bounds.
    pub fn bounds(&self) -> PriceBounds {
        self.bounds
    }

    /// Current sort key.
    pub fn sort(&self) -> SortOption {
        self.sort
    }

    /// Current page.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Fixed page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    fn recompute(&mut self) -> bool {
        let next = derive_filters(&self.query, self.bounds, self.page, self.page_size);
        let changed = next != self.filters;
        self.filters = next;
        changed
    }
}

/// Derive request parameters from search state.
///
/// A query that parses entirely as a finite number, typed while no price bound
/// is set, is treated as a price hint: it becomes the range `[n, n * 1.5]` and
/// the text itself is not sent. Any other non-empty query is sent verbatim.
pub fn derive_filters(query: &str, bounds: PriceBounds, page: u32, page_size: u32) -> PropertyFilters {
    let mut filters = PropertyFilters {
        query: None,
        min_price: bounds.min,
        max_price: bounds.max,
        page,
        page_size,
    };

    let query = query.trim();
    if query.is_empty() {
        return filters;
    }

    match numeric_hint(query) {
        Some(value) if bounds.is_unbounded() => {
            filters.min_price = Some(value);
            filters.max_price = Some(value * NUMERIC_QUERY_SPREAD);
        }
        _ => filters.query = Some(query.to_string()),
    }
    filters
}

fn numeric_hint(query: &str) -> Option<f64> {
    query.parse::<f64>().ok().filter(|v| v.is_finite())
}
