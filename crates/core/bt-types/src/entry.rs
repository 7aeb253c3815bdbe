//! A single object-storage entry.

use bt_error::{BtError, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// One object from a storage listing.
///
/// Entries are immutable once constructed. The name, base name and depth
/// are derived from the key on demand, so they always agree with it:
/// `key == base_name + "/" + name` whenever the key contains a `/`,
/// and `key == name` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    last_modified: DateTime<Utc>,
    etag: String,
    size: u64,
}

impl Entry {
    /// Create an entry.
    ///
    /// Returns [`BtError::MalformedResponse`] if the key is empty.
    pub fn new(
        key: impl Into<String>,
        last_modified: DateTime<Utc>,
        etag: impl Into<String>,
        size: u64,
    ) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(BtError::MalformedResponse(
                "Listing entry has an empty key".to_string(),
            ));
        }

        Ok(Self {
            key,
            last_modified,
            etag: etag.into(),
            size,
        })
    }

    /// Full slash-delimited key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Last modification time.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Opaque content checksum, kept verbatim.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Everything after the last `/`, or the whole key.
    pub fn name(&self) -> &str {
        match self.key.rfind('/') {
            Some(idx) => &self.key[idx + 1..],
            None => &self.key,
        }
    }

    /// Everything before the last `/`, or the empty string.
    pub fn base_name(&self) -> &str {
        match self.key.rfind('/') {
            Some(idx) => &self.key[..idx],
            None => "",
        }
    }

    /// Number of folder segments leading to this entry.
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// The folder segments leading to this entry, root first.
    ///
    /// A key without `/` yields no segments. Empty segments are kept, so
    /// `/a.png` sits in a folder named "" and `a//b.png` in `a` then "".
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.key
            .rfind('/')
            .map(|idx| self.key[..idx].split('/'))
            .into_iter()
            .flatten()
    }
}

/// Parse a listing timestamp.
///
/// Accepts RFC 3339 (`2019-06-24T12:34:56.000Z`, any offset, normalised to
/// UTC) and zone-less `YYYY-MM-DDTHH:MM:SS[.fff]`, which is taken as UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    Err(BtError::MalformedResponse(format!(
        "Invalid timestamp '{input}'"
    )))
}
