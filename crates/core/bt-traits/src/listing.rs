//! Listing transport trait and page types.

use async_trait::async_trait;
use bt_error::Result;
use bt_types::{Entry, parse_timestamp};
use serde::{Deserialize, Serialize};

/// One object as reported by a listing page, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedObject {
    /// Full object key
    pub key: String,

    /// ISO-8601 modification timestamp
    pub last_modified: String,

    /// Opaque checksum
    pub etag: String,

    /// Size in bytes
    pub size: u64,
}

impl ListedObject {
    /// Create a listed object.
    pub fn new(
        key: impl Into<String>,
        last_modified: impl Into<String>,
        etag: impl Into<String>,
        size: u64,
    ) -> Self {
        Self {
            key: key.into(),
            last_modified: last_modified.into(),
            etag: etag.into(),
            size,
        }
    }

    /// Validate into an [`Entry`].
    ///
    /// Fails with `MalformedResponse` on an empty key or a timestamp that
    /// cannot be parsed.
    pub fn into_entry(self) -> Result<Entry> {
        let last_modified = parse_timestamp(&self.last_modified)?;
        Entry::new(self.key, last_modified, self.etag, self.size)
    }
}

/// One page of a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Objects on this page, in listing order
    pub entries: Vec<ListedObject>,

    /// Whether more pages follow
    pub truncated: bool,

    /// Where the next page starts; meaningful only when `truncated`
    pub next_marker: Option<String>,
}

impl ListingPage {
    /// A final page.
    pub fn last(entries: Vec<ListedObject>) -> Self {
        Self {
            entries,
            truncated: false,
            next_marker: None,
        }
    }

    /// A truncated page continuing at `marker`.
    pub fn truncated(entries: Vec<ListedObject>, marker: impl Into<String>) -> Self {
        Self {
            entries,
            truncated: true,
            next_marker: Some(marker.into()),
        }
    }
}

/// Trait for listing backends.
///
/// Implementations include:
/// - S3-compatible object stores (marker-based `ListObjects`)
/// - In-memory scripted listings (tests)
///
/// A transport answers exactly one page per call. It never follows
/// markers on its own; the page fetcher drives continuation.
#[async_trait]
pub trait ListingTransport: Send + Sync {
    /// Fetch the page that starts after `marker` (or the first page when
    /// `marker` is `None`), limited to keys starting with `prefix`.
    async fn list(&self, prefix: Option<&str>, marker: Option<&str>) -> Result<ListingPage>;

    /// Human-readable description, used for logging.
    fn description(&self) -> String;
}
