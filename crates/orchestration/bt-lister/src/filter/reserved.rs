//! Exclusion of reserved site files and asset folders.

use bt_types::Entry;

use super::Filter;

/// Names excluded by default: the bucket's own index document and icon.
pub const DEFAULT_RESERVED_NAMES: &[&str] = &["index.html", "favicon.ico"];

/// Name substrings excluded by default.
pub const DEFAULT_RESERVED_EXTENSIONS: &[&str] = &[".js"];

/// Base names (parent paths) excluded by default.
pub const DEFAULT_RESERVED_BASE_NAMES: &[&str] = &["images", "fonts"];

/// A filter that drops reserved entries.
///
/// An entry is excluded if ANY of these hold:
/// - its name equals one of the reserved names
/// - its name contains one of the reserved extension markers anywhere
///   (substring match, so `.js` also excludes `data.json`)
/// - its base name equals one of the reserved base names exactly
///   (`images/a.png` is excluded, `images/sub/a.png` is not)
///
/// # Example
///
/// ```
/// use bt_lister::filter::{Filter, ReservedFilter};
/// use bt_types::Entry;
/// use chrono::Utc;
///
/// let filter = ReservedFilter::default();
/// let entry = |key: &str| Entry::new(key, Utc::now(), "", 0).unwrap();
///
/// assert!(filter.matches(&entry("photos/cat.png")));
/// assert!(!filter.matches(&entry("index.html")));
/// assert!(!filter.matches(&entry("images/logo.png")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedFilter {
    reserved_names: Vec<String>,
    reserved_extensions: Vec<String>,
    reserved_base_names: Vec<String>,
}

impl Default for ReservedFilter {
    fn default() -> Self {
        Self::new(
            DEFAULT_RESERVED_NAMES,
            DEFAULT_RESERVED_EXTENSIONS,
            DEFAULT_RESERVED_BASE_NAMES,
        )
    }
}

impl ReservedFilter {
    /// Create a reserved filter from the three exclusion sets.
    pub fn new<S: AsRef<str>>(names: &[S], extensions: &[S], base_names: &[S]) -> Self {
        Self {
            reserved_names: to_owned(names),
            reserved_extensions: to_owned(extensions),
            reserved_base_names: to_owned(base_names),
        }
    }

    /// A filter with empty exclusion sets; keeps everything.
    pub fn none() -> Self {
        Self::new::<&str>(&[], &[], &[])
    }

    /// Replace the reserved names.
    pub fn with_reserved_names<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.reserved_names = to_owned(names);
        self
    }

    /// Replace the reserved extension markers.
    pub fn with_reserved_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.reserved_extensions = to_owned(extensions);
        self
    }

    /// Replace the reserved base names.
    pub fn with_reserved_base_names<S: AsRef<str>>(mut self, base_names: &[S]) -> Self {
        self.reserved_base_names = to_owned(base_names);
        self
    }

    /// Check whether an entry is reserved (excluded).
    pub fn is_reserved(&self, entry: &Entry) -> bool {
        let name = entry.name();
        let base_name = entry.base_name();

        self.reserved_names.iter().any(|reserved| reserved == name)
            || self
                .reserved_extensions
                .iter()
                .any(|marker| name.contains(marker.as_str()))
            || self
                .reserved_base_names
                .iter()
                .any(|reserved| reserved == base_name)
    }

    pub fn reserved_names(&self) -> &[String] {
        &self.reserved_names
    }

    pub fn reserved_extensions(&self) -> &[String] {
        &self.reserved_extensions
    }

    pub fn reserved_base_names(&self) -> &[String] {
        &self.reserved_base_names
    }
}

impl Filter for ReservedFilter {
    fn matches(&self, entry: &Entry) -> bool {
        !self.is_reserved(entry)
    }

    fn description(&self) -> String {
        format!(
            "reserved(names={:?}, extensions={:?}, base_names={:?})",
            self.reserved_names, self.reserved_extensions, self.reserved_base_names
        )
    }
}

fn to_owned<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| v.as_ref().to_string()).collect()
}
