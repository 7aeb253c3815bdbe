//! Configuration types for a browse run.
//!
//! Everything here can be built in code through `with_*` builders or
//! loaded from YAML:
//!
//! ```yaml
//! filter:
//!   reserved_names: [index.html, favicon.ico]
//!   reserved_extensions: [.js]
//!   reserved_base_names: [images, fonts]
//!   exclude_patterns: ["*.tmp"]
//! fetch:
//!   max_parallel_prefixes: 8
//!   max_concurrent_requests: 4
//!   max_pages: 0
//! ```

use std::path::Path;

use bt_error::{BtError, Result};
use serde::{Deserialize, Serialize};

use crate::filter::{
    CompositeFilter, DEFAULT_RESERVED_BASE_NAMES, DEFAULT_RESERVED_EXTENSIONS,
    DEFAULT_RESERVED_NAMES, ExcludePatternFilter, ReservedFilter,
};

/// Entry filter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Exact names to exclude
    pub reserved_names: Vec<String>,

    /// Substrings that exclude any name containing them
    pub reserved_extensions: Vec<String>,

    /// Exact base names (parent paths) to exclude
    pub reserved_base_names: Vec<String>,

    /// Additional glob patterns to exclude
    pub exclude_patterns: Vec<String>,

    /// Match `exclude_patterns` against full keys instead of names
    pub match_full_path: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            reserved_names: to_strings(DEFAULT_RESERVED_NAMES),
            reserved_extensions: to_strings(DEFAULT_RESERVED_EXTENSIONS),
            reserved_base_names: to_strings(DEFAULT_RESERVED_BASE_NAMES),
            exclude_patterns: Vec::new(),
            match_full_path: false,
        }
    }
}

impl FilterConfig {
    /// Create a filter configuration with the default reserved sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that excludes nothing.
    pub fn empty() -> Self {
        Self {
            reserved_names: Vec::new(),
            reserved_extensions: Vec::new(),
            reserved_base_names: Vec::new(),
            exclude_patterns: Vec::new(),
            match_full_path: false,
        }
    }

    /// Set the reserved names.
    pub fn with_reserved_names(mut self, names: Vec<String>) -> Self {
        self.reserved_names = names;
        self
    }

    /// Set the reserved extension markers.
    pub fn with_reserved_extensions(mut self, extensions: Vec<String>) -> Self {
        self.reserved_extensions = extensions;
        self
    }

    /// Set the reserved base names.
    pub fn with_reserved_base_names(mut self, base_names: Vec<String>) -> Self {
        self.reserved_base_names = base_names;
        self
    }

    /// Add an exclusion glob pattern.
    pub fn with_exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Match exclusion patterns against full keys.
    pub fn with_match_full_path(mut self, match_full_path: bool) -> Self {
        self.match_full_path = match_full_path;
        self
    }

    /// The reserved-entry filter described by this configuration.
    pub fn reserved_filter(&self) -> ReservedFilter {
        ReservedFilter::new(
            self.reserved_names.as_slice(),
            self.reserved_extensions.as_slice(),
            self.reserved_base_names.as_slice(),
        )
    }

    /// Build the complete filter: reserved entries plus exclusion patterns.
    ///
    /// Fails with a configuration error on an invalid glob.
    pub fn build_filter(&self) -> Result<CompositeFilter> {
        let mut composite = CompositeFilter::new().with_filter(Box::new(self.reserved_filter()));

        if !self.exclude_patterns.is_empty() {
            let patterns = ExcludePatternFilter::new(self.exclude_patterns.as_slice())?
                .with_match_full_path(self.match_full_path);
            composite.add_filter(Box::new(patterns));
        }

        Ok(composite)
    }
}

/// Page fetching configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum prefixes fetched concurrently
    pub max_parallel_prefixes: usize,

    /// Maximum page requests in flight across all prefixes
    pub max_concurrent_requests: usize,

    /// Maximum pages per prefix (0 = unlimited)
    pub max_pages: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_parallel_prefixes: 20,
            max_concurrent_requests: 10,
            max_pages: 0,
        }
    }
}

impl FetchConfig {
    /// Create a fetch configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum parallel prefixes.
    pub fn with_max_parallel_prefixes(mut self, max: usize) -> Self {
        self.max_parallel_prefixes = max;
        self
    }

    /// Set the maximum concurrent page requests.
    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max;
        self
    }

    /// Set the per-prefix page cap (0 = unlimited).
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_parallel_prefixes == 0 {
            return Err(BtError::Config(
                "max_parallel_prefixes must be at least 1".to_string(),
            ));
        }
        if self.max_concurrent_requests == 0 {
            return Err(BtError::Config(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for a browse run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowseConfig {
    /// Entry filter settings
    pub filter: FilterConfig,

    /// Page fetch settings
    pub fetch: FetchConfig,
}

impl BrowseConfig {
    /// Create a browse configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter configuration.
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    /// Set the fetch configuration.
    pub fn with_fetch(mut self, fetch: FetchConfig) -> Self {
        self.fetch = fetch;
        self
    }

    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| BtError::Config(format!("Invalid config: {e}")))?;
        config.fetch.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            BtError::Config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml_str(&yaml)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
