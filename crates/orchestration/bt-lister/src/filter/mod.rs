//! Entry filtering.
//!
//! This module provides a trait-based filter infrastructure. A filter
//! decides per entry whether it is kept; [`filter_entries`] applies one to
//! a whole sequence without reordering it.
//!
//! # Examples
//!
//! ```
//! use bt_lister::filter::{CompositeFilter, ExcludePatternFilter, ReservedFilter, filter_entries};
//! use bt_types::Entry;
//! use chrono::Utc;
//!
//! let filter = CompositeFilter::new()
//!     .with_filter(Box::new(ReservedFilter::default()))
//!     .with_filter(Box::new(ExcludePatternFilter::new(&["*.tmp"]).unwrap()));
//!
//! let entries: Vec<Entry> = ["x.png", "index.html", "images/y.png", "scratch.tmp"]
//!     .iter()
//!     .map(|key| Entry::new(*key, Utc::now(), "", 1).unwrap())
//!     .collect();
//!
//! let kept = filter_entries(&filter, entries);
//! assert_eq!(kept.len(), 1);
//! assert_eq!(kept[0].key(), "x.png");
//! ```

mod composite;
mod pattern;
mod reserved;

pub use composite::CompositeFilter;
pub use pattern::{ExcludePatternFilter, MatchAllFilter};
pub use reserved::{
    DEFAULT_RESERVED_BASE_NAMES, DEFAULT_RESERVED_EXTENSIONS, DEFAULT_RESERVED_NAMES,
    ReservedFilter,
};

use bt_types::Entry;

/// Trait for filtering listing entries.
///
/// Filters are pure: the same entry always gets the same answer, which
/// makes filtering idempotent.
pub trait Filter: Send + Sync {
    /// Check if an entry should be kept.
    ///
    /// Returns `true` if the entry passes, `false` if it is excluded.
    fn matches(&self, entry: &Entry) -> bool;

    /// Get a human-readable description of this filter.
    ///
    /// Used for logging and debugging purposes.
    fn description(&self) -> String;
}

/// Keep only the entries `filter` accepts, preserving their order.
pub fn filter_entries<F>(filter: &F, entries: Vec<Entry>) -> Vec<Entry>
where
    F: Filter + ?Sized,
{
    entries
        .into_iter()
        .filter(|entry| filter.matches(entry))
        .collect()
}
