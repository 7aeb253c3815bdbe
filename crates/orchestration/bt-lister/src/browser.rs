//! Pipeline coordination: fetch, filter, group.

use bt_error::Result;
use bt_traits::ListingTransport;
use bt_tree::{FolderNode, build_tree};
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::fetcher::PageFetcher;
use crate::filter::{Filter, filter_entries};
use crate::stats::BrowseStats;

/// The outcome of a browse run.
#[derive(Debug, Clone)]
pub struct Browse {
    /// Root of the grouped folder tree
    pub root: FolderNode,

    /// Statistics for the run
    pub stats: BrowseStats,
}

/// Coordinates fetching a complete listing, filtering it and grouping it
/// into a folder tree.
///
/// Generic over the transport and the filter so that the same pipeline
/// runs against S3 or an in-memory listing.
pub struct Browser<T: ListingTransport, F: Filter> {
    fetcher: PageFetcher<T>,
    filter: F,
}

impl<T: ListingTransport, F: Filter> Browser<T, F> {
    /// Create a new Browser.
    pub fn new(transport: T, filter: F, config: FetchConfig) -> Self {
        Self {
            fetcher: PageFetcher::new(transport, config),
            filter,
        }
    }

    /// Fetch every page for `prefixes`, filter the entries and build the tree.
    ///
    /// An empty prefix slice lists the whole bucket. Nothing is returned
    /// unless the full listing was retrieved.
    pub async fn browse(&self, prefixes: &[String]) -> Result<Browse> {
        let mut stats = BrowseStats::new();

        info!(
            transport = %self.fetcher.transport().description(),
            prefixes = ?prefixes,
            filter = %self.filter.description(),
            "Starting browse"
        );

        let fetched = self.fetcher.fetch_prefixes(prefixes).await?;
        stats.record_fetch(fetched.prefixes, fetched.pages, fetched.entries.len());

        let fetched_count = fetched.entries.len();
        let kept = filter_entries(&self.filter, fetched.entries);
        stats.record_filtered(fetched_count - kept.len());
        for entry in &kept {
            stats.record_kept(entry.size());
        }

        debug!(
            fetched = fetched_count,
            kept = kept.len(),
            "Filtered entries"
        );

        let root = build_tree(kept);
        stats.record_folders(root.total_folders());
        stats.complete();

        info!(
            pages = stats.pages_fetched,
            entries = stats.entries_kept,
            filtered = stats.entries_filtered,
            folders = stats.folders,
            "Browse completed"
        );

        Ok(Browse { root, stats })
    }

    /// Get the filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Get the page fetcher.
    pub fn fetcher(&self) -> &PageFetcher<T> {
        &self.fetcher
    }
}
