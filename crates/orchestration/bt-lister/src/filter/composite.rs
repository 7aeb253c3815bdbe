//! Composite filter for combining multiple filters.
//!
//! Provides the ability to combine multiple filters with AND logic.

use bt_types::Entry;

use super::Filter;

/// A composite filter that combines multiple filters with AND logic.
///
/// An entry is kept only if ALL constituent filters keep it. Since every
/// constituent here is an exclusion rule, this reads as "excluded if any
/// rule excludes it".
///
/// # Example
///
/// ```
/// use bt_lister::filter::{CompositeFilter, ExcludePatternFilter, Filter, ReservedFilter};
/// use bt_types::Entry;
/// use chrono::Utc;
///
/// let filter = CompositeFilter::new()
///     .with_filter(Box::new(ReservedFilter::default()))
///     .with_filter(Box::new(ExcludePatternFilter::new(&["*.bak"]).unwrap()));
///
/// let entry = |key: &str| Entry::new(key, Utc::now(), "", 0).unwrap();
///
/// assert!(filter.matches(&entry("photo.png")));
/// assert!(!filter.matches(&entry("favicon.ico"))); // reserved
/// assert!(!filter.matches(&entry("photo.bak")));   // pattern
/// ```
pub struct CompositeFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl Default for CompositeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeFilter {
    /// Create a new empty composite filter.
    ///
    /// An empty filter keeps all entries.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the composite (builder pattern).
    pub fn with_filter(mut self, filter: Box<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a filter to the composite.
    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Get the number of filters in the composite.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the composite has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Get descriptions of all filters.
    pub fn filter_descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Filter for CompositeFilter {
    fn matches(&self, entry: &Entry) -> bool {
        self.filters.iter().all(|f| f.matches(entry))
    }

    fn description(&self) -> String {
        if self.filters.is_empty() {
            "composite(empty)".to_string()
        } else {
            format!("composite({})", self.filter_descriptions().join(" AND "))
        }
    }
}

// Box<dyn Filter> doesn't implement Debug
impl std::fmt::Debug for CompositeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeFilter")
            .field("filters", &self.filter_descriptions())
            .finish()
    }
}
