//! `ListObjects` paging against S3.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::list_objects::{ListObjectsError, ListObjectsOutput};
use aws_sdk_s3::types::Object;
use bt_error::{BtError, Result};
use bt_traits::{ListedObject, ListingPage, ListingTransport};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use tracing::{debug, trace};

use super::{Classify, ErrorClassification, RetryConfig, classify_response, with_retry};

/// Lists a bucket one page at a time with the marker-based `ListObjects` call.
///
/// Directory markers (keys ending with `/`) and empty keys are dropped from
/// each page. When S3 reports a truncated page without `NextMarker` (it only
/// sends one when a delimiter is set), the last raw key on the page is used
/// as the next marker.
#[derive(Debug, Clone)]
pub struct S3Transport {
    client: Client,
    bucket: String,
    retry: RetryConfig,
    page_size: Option<i32>,
}

impl S3Transport {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            retry: RetryConfig::default(),
            page_size: None,
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Ask for at most `page_size` keys per page (S3 caps this at 1000).
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// A failed `ListObjects` call, classified from the SDK error before it
/// is flattened into a message.
#[derive(Debug)]
struct ListFailure {
    message: String,
    classification: ErrorClassification,
}

impl fmt::Display for ListFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Classify for ListFailure {
    fn classification(&self) -> ErrorClassification {
        self.classification
    }
}

/// Decide whether a `ListObjects` failure is worth repeating.
///
/// Requests that could not be built never are. Timeouts and connection
/// failures always are. Service responses go by their S3 error code and
/// HTTP status.
fn classify_list_error(error: &SdkError<ListObjectsError, HttpResponse>) -> ErrorClassification {
    match error {
        SdkError::ConstructionFailure(_) => ErrorClassification::NonRetryable,
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => ErrorClassification::Retryable,
        _ => classify_response(
            error.code(),
            error.raw_response().map(|response| response.status().as_u16()),
        ),
    }
}

#[async_trait]
impl ListingTransport for S3Transport {
    async fn list(&self, prefix: Option<&str>, marker: Option<&str>) -> Result<ListingPage> {
        let bucket = self.bucket.as_str();

        let output = with_retry(&self.retry, "list_objects", || {
            let mut request = self
                .client
                .list_objects()
                .bucket(bucket)
                .set_max_keys(self.page_size);
            if let Some(prefix) = prefix {
                request = request.prefix(prefix);
            }
            if let Some(marker) = marker {
                request = request.marker(marker);
            }

            async move {
                request.send().await.map_err(|e| ListFailure {
                    classification: classify_list_error(&e),
                    message: format!(
                        "ListObjects on bucket '{bucket}' failed: {}",
                        DisplayErrorContext(&e)
                    ),
                })
            }
        })
        .await
        .map_err(|failure| BtError::Transport(failure.message))?;

        let page = page_from_output(&output)?;

        debug!(
            bucket,
            prefix = ?prefix,
            marker = ?marker,
            raw = output.contents().len(),
            entries = page.entries.len(),
            truncated = page.truncated,
            next_marker = ?page.next_marker,
            "ListObjects page"
        );

        Ok(page)
    }

    fn description(&self) -> String {
        format!("s3://{}", self.bucket)
    }
}

/// Convert one `ListObjects` response into a page.
///
/// A response without `IsTruncated` is malformed.
fn page_from_output(output: &ListObjectsOutput) -> Result<ListingPage> {
    let truncated = output.is_truncated().ok_or_else(|| {
        BtError::MalformedResponse("ListObjects response has no IsTruncated".to_string())
    })?;

    let contents = output.contents();
    let mut entries = Vec::with_capacity(contents.len());
    for object in contents {
        match convert_object(object)? {
            Some(listed) => entries.push(listed),
            None => trace!(key = ?object.key(), "Skipping directory marker"),
        }
    }

    Ok(ListingPage {
        entries,
        truncated,
        next_marker: if truncated { continuation(output) } else { None },
    })
}

/// Marker for the page after a truncated `output`.
///
/// S3 only sends `NextMarker` when a delimiter is set, so otherwise the
/// last raw key on the page is used, directory markers included. An empty
/// page has no continuation.
fn continuation(output: &ListObjectsOutput) -> Option<String> {
    output
        .next_marker()
        .filter(|m| !m.is_empty())
        .or_else(|| output.contents().last().and_then(Object::key))
        .map(str::to_string)
}

/// Convert one S3 object into a listed object.
///
/// Returns `Ok(None)` for directory markers and empty keys. An object with
/// no modification time or with a missing or negative size is malformed.
/// A missing ETag is kept as an empty string.
pub fn convert_object(object: &Object) -> Result<Option<ListedObject>> {
    let key = object.key().unwrap_or_default();
    if key.is_empty() || key.ends_with('/') {
        return Ok(None);
    }

    let last_modified = object
        .last_modified()
        .and_then(|t| DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos()))
        .ok_or_else(|| {
            BtError::MalformedResponse(format!("Object '{key}' has no valid LastModified"))
        })?;

    let size = object
        .size()
        .and_then(|size| u64::try_from(size).ok())
        .ok_or_else(|| {
            BtError::MalformedResponse(format!(
                "Object '{key}' has a missing or negative Size ({:?})",
                object.size()
            ))
        })?;

    Ok(Some(ListedObject::new(
        key,
        last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
        object.e_tag().unwrap_or_default(),
        size,
    )))
}
