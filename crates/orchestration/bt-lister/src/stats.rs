//! Statistics for browse runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected while fetching, filtering and grouping a listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowseStats {
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Number of prefixes fetched
    pub prefixes: usize,

    /// Number of listing pages requested
    pub pages_fetched: usize,

    /// Entries received from the transport (before filtering)
    pub entries_fetched: usize,

    /// Entries removed by the filter
    pub entries_filtered: usize,

    /// Entries placed into the tree
    pub entries_kept: usize,

    /// Total size of the kept entries
    pub bytes_kept: u64,

    /// Folders in the resulting tree, excluding the root
    pub folders: usize,
}

impl BrowseStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the run as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record a finished fetch.
    pub fn record_fetch(&mut self, prefixes: usize, pages: usize, entries: usize) {
        self.prefixes += prefixes;
        self.pages_fetched += pages;
        self.entries_fetched += entries;
    }

    /// Record an entry that passed the filter.
    pub fn record_kept(&mut self, size: u64) {
        self.entries_kept += 1;
        self.bytes_kept += size;
    }

    /// Record `count` entries removed by the filter.
    pub fn record_filtered(&mut self, count: usize) {
        self.entries_filtered += count;
    }

    /// Record the number of folders in the built tree.
    pub fn record_folders(&mut self, folders: usize) {
        self.folders = folders;
    }

    /// Get the duration of the run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Calculate the throughput in fetched entries per second.
    pub fn entries_per_second(&self) -> Option<f64> {
        self.duration().map(|d| {
            let secs = d.num_milliseconds() as f64 / 1000.0;
            if secs > 0.0 {
                self.entries_fetched as f64 / secs
            } else {
                0.0
            }
        })
    }
}
