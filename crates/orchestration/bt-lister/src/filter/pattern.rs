//! Glob-based exclusion for entries.
//!
//! Supports multiple patterns with OR logic: an entry matching any
//! pattern is dropped.

use bt_error::{BtError, Result};
use bt_types::Entry;
use glob::Pattern;

use super::Filter;

/// A filter that excludes entries whose name matches any glob pattern.
///
/// Matches against the name (after the last `/`) by default, or the full
/// key when `match_full_path` is enabled.
///
/// # Pattern Syntax
///
/// - `*` matches any sequence of characters
/// - `?` matches any single character
/// - `[abc]` matches any character in the brackets
/// - `[!abc]` matches any character not in the brackets
///
/// # Example
///
/// ```
/// use bt_lister::filter::ExcludePatternFilter;
///
/// let filter = ExcludePatternFilter::new(&["*.tmp", "~*"]).unwrap();
///
/// assert!(filter.is_excluded_key("cache/build.tmp"));
/// assert!(filter.is_excluded_key("~lock"));
/// assert!(!filter.is_excluded_key("photo.png"));
/// ```
#[derive(Debug, Clone)]
pub struct ExcludePatternFilter {
    patterns: Vec<Pattern>,
    match_full_path: bool,
}

impl ExcludePatternFilter {
    /// Create a new exclusion filter.
    ///
    /// Returns a configuration error if any pattern is invalid.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let compiled = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p)
                    .map_err(|e| BtError::Config(format!("Invalid glob pattern '{p}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns: compiled,
            match_full_path: false,
        })
    }

    /// Set whether to match against the full key or just the name.
    pub fn with_match_full_path(mut self, match_full_path: bool) -> Self {
        self.match_full_path = match_full_path;
        self
    }

    /// Check if a key matches any of the patterns.
    pub fn is_excluded_key(&self, key: &str) -> bool {
        let target = if self.match_full_path {
            key
        } else {
            key.rsplit('/').next().unwrap_or(key)
        };
        self.patterns.iter().any(|p| p.matches(target))
    }

    /// Get the pattern strings.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::as_str).collect()
    }
}

impl Filter for ExcludePatternFilter {
    fn matches(&self, entry: &Entry) -> bool {
        !self.is_excluded_key(entry.key())
    }

    fn description(&self) -> String {
        if self.match_full_path {
            format!("exclude(full_path={:?})", self.patterns())
        } else {
            format!("exclude({:?})", self.patterns())
        }
    }
}

/// A filter that keeps all entries.
#[derive(Debug, Clone, Default)]
pub struct MatchAllFilter;

impl MatchAllFilter {
    /// Create a new match-all filter.
    pub fn new() -> Self {
        Self
    }
}

impl Filter for MatchAllFilter {
    fn matches(&self, _entry: &Entry) -> bool {
        true
    }

    fn description(&self) -> String {
        "match_all".to_string()
    }
}
