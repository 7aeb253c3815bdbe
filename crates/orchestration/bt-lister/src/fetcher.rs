//! Paginated fetching of complete listings.
//!
//! Each prefix is resolved by a strictly sequential chain of page requests:
//! a page's marker is only valid together with the page that produced it.
//! Several prefixes are fetched concurrently and joined; the first failure
//! aborts the whole join.

use std::collections::HashSet;
use std::sync::Arc;

use bt_error::{BtError, Result};
use bt_traits::{ListingPage, ListingTransport};
use bt_types::Entry;
use futures::{StreamExt, TryStreamExt, stream};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::config::FetchConfig;

/// All entries for one prefix, in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixListing {
    /// The prefix requested (`None` for the whole bucket)
    pub prefix: Option<String>,

    /// Entries from every page, concatenated in arrival order
    pub entries: Vec<Entry>,

    /// Number of page requests issued
    pub pages: usize,
}

/// The joined result of fetching several prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fetched {
    /// Entries of all prefixes, concatenated in completion order
    pub entries: Vec<Entry>,

    /// Number of prefixes fetched
    pub prefixes: usize,

    /// Total page requests across all prefixes
    pub pages: usize,
}

/// Fetches complete listings through a [`ListingTransport`].
///
/// Page requests across all concurrent prefixes are bounded by a shared
/// semaphore; the number of prefixes in flight is bounded separately.
pub struct PageFetcher<T: ListingTransport> {
    transport: T,
    config: FetchConfig,
    semaphore: Arc<Semaphore>,
}

impl<T: ListingTransport> PageFetcher<T> {
    /// Create a new page fetcher.
    pub fn new(transport: T, config: FetchConfig) -> Self {
        let semaphore = Arc::new(Semaphore::new(config.max_concurrent_requests.max(1)));
        Self {
            transport,
            config,
            semaphore,
        }
    }

    /// Fetch every page for `prefix` and return the concatenated entries.
    ///
    /// Nothing is returned unless all pages were retrieved.
    pub async fn fetch_all(&self, prefix: Option<&str>) -> Result<Vec<Entry>> {
        Ok(self.fetch_prefix(prefix).await?.entries)
    }

    /// Fetch several prefixes concurrently and join their entries.
    ///
    /// An empty slice means a single request without a prefix. Results are
    /// concatenated in the order the prefixes complete, which callers must
    /// not rely on. Any failing prefix fails the whole call.
    pub async fn fetch_prefixes(&self, prefixes: &[String]) -> Result<Fetched> {
        let requested: Vec<Option<&str>> = if prefixes.is_empty() {
            vec![None]
        } else {
            prefixes.iter().map(|p| Some(p.as_str())).collect()
        };

        debug!(
            prefix_count = requested.len(),
            transport = %self.transport.description(),
            "Starting parallel prefix fetch"
        );

        let listings: Vec<PrefixListing> = stream::iter(requested)
            .map(|prefix| self.fetch_prefix(prefix))
            .buffer_unordered(self.config.max_parallel_prefixes.max(1))
            .try_collect()
            .await?;

        let mut fetched = Fetched {
            prefixes: listings.len(),
            ..Fetched::default()
        };
        for listing in listings {
            debug!(
                prefix = ?listing.prefix,
                pages = listing.pages,
                entries = listing.entries.len(),
                "Merging prefix listing"
            );
            fetched.pages += listing.pages;
            fetched.entries.extend(listing.entries);
        }

        debug!(
            prefixes = fetched.prefixes,
            pages = fetched.pages,
            entries = fetched.entries.len(),
            "Fetch completed"
        );

        Ok(fetched)
    }

    /// Follow markers for one prefix until the listing is no longer truncated.
    pub async fn fetch_prefix(&self, prefix: Option<&str>) -> Result<PrefixListing> {
        let mut entries = Vec::new();
        let mut marker: Option<String> = None;
        let mut seen_markers = HashSet::new();
        let mut pages = 0usize;

        loop {
            let page = self.request_page(prefix, marker.as_deref()).await?;
            pages += 1;

            let ListingPage {
                entries: objects,
                truncated,
                next_marker,
            } = page;
            let page_len = objects.len();

            for object in objects {
                entries.push(object.into_entry()?);
            }

            debug!(
                prefix = ?prefix,
                marker = ?marker,
                page = pages,
                page_entries = page_len,
                truncated,
                "Fetched listing page"
            );

            if !truncated {
                break;
            }

            let next = next_marker.filter(|m| !m.is_empty()).ok_or_else(|| {
                BtError::MalformedResponse(format!(
                    "Page {pages} for prefix {prefix:?} is truncated but has no next marker"
                ))
            })?;

            if !seen_markers.insert(next.clone()) {
                return Err(BtError::MalformedResponse(format!(
                    "Page {pages} for prefix {prefix:?} repeated marker '{next}'"
                )));
            }

            if self.config.max_pages > 0 && pages >= self.config.max_pages {
                return Err(BtError::MalformedResponse(format!(
                    "Prefix {prefix:?} is still truncated after {pages} pages (limit {})",
                    self.config.max_pages
                )));
            }

            marker = Some(next);
        }

        Ok(PrefixListing {
            prefix: prefix.map(str::to_string),
            entries,
            pages,
        })
    }

    async fn request_page(&self, prefix: Option<&str>, marker: Option<&str>) -> Result<ListingPage> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|e| BtError::Transport(format!("Failed to acquire request permit: {e}")))?;

        self.transport.list(prefix, marker).await
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
