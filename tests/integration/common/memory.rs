//! An in-memory bucket that pages like S3 `ListObjects`.

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bt_error::{BtError, Result};
use bt_traits::{ListedObject, ListingPage, ListingTransport};

/// Keys are returned in lexicographic order, `page_size` at a time; the
/// marker of a truncated page is its last key.
pub struct InMemoryBucket {
    objects: BTreeMap<String, u64>,
    page_size: usize,
    slow_prefixes: Vec<(String, Duration)>,
    failing_markers: HashSet<String>,
    requests: Mutex<Vec<(Option<String>, Option<String>)>>,
}

impl InMemoryBucket {
    pub fn new(page_size: usize) -> Self {
        Self {
            objects: BTreeMap::new(),
            page_size: page_size.max(1),
            slow_prefixes: Vec::new(),
            failing_markers: HashSet::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_object(mut self, key: &str, size: u64) -> Self {
        self.objects.insert(key.to_string(), size);
        self
    }

    pub fn with_objects(mut self, keys: &[&str]) -> Self {
        for key in keys {
            self.objects.insert(key.to_string(), 100);
        }
        self
    }

    /// Delay every request for `prefix`.
    pub fn with_slow_prefix(mut self, prefix: &str, millis: u64) -> Self {
        self.slow_prefixes
            .push((prefix.to_string(), Duration::from_millis(millis)));
        self
    }

    /// Fail the request that continues after `marker`.
    pub fn failing_after(mut self, marker: &str) -> Self {
        self.failing_markers.insert(marker.to_string());
        self
    }

    pub fn requests(&self) -> Vec<(Option<String>, Option<String>)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListingTransport for InMemoryBucket {
    async fn list(&self, prefix: Option<&str>, marker: Option<&str>) -> Result<ListingPage> {
        self.requests
            .lock()
            .unwrap()
            .push((prefix.map(String::from), marker.map(String::from)));

        if let Some(prefix) = prefix {
            for (slow, delay) in &self.slow_prefixes {
                if slow == prefix {
                    tokio::time::sleep(*delay).await;
                }
            }
        }

        if let Some(marker) = marker {
            if self.failing_markers.contains(marker) {
                return Err(BtError::Transport(format!(
                    "503 Service Unavailable after marker {marker}"
                )));
            }
        }

        let mut matching = self
            .objects
            .iter()
            .filter(|(key, _)| prefix.is_none_or(|p| key.starts_with(p)))
            .filter(|(key, _)| marker.is_none_or(|m| key.as_str() > m));

        let entries: Vec<ListedObject> = matching
            .by_ref()
            .take(self.page_size)
            .map(|(key, size)| ListedObject::new(key, "2020-09-13T12:26:40.000Z", "\"etag\"", *size))
            .collect();

        if matching.next().is_some() {
            let last = entries.last().map(|e| e.key.clone()).unwrap_or_default();
            Ok(ListingPage::truncated(entries, last))
        } else {
            Ok(ListingPage::last(entries))
        }
    }

    fn description(&self) -> String {
        format!("memory({} objects)", self.objects.len())
    }
}
