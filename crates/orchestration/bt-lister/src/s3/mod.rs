//! S3 listing transport.
//!
//! This module provides the production [`ListingTransport`](bt_traits::ListingTransport):
//! - Client configuration with anonymous access and LocalStack support
//! - Marker-based `ListObjects` paging, one page per call
//! - Per-request retry with exponential backoff

mod client;
mod retry;
mod transport;

pub use client::{S3Config, create_s3_client};
pub use retry::{
    Classify, ErrorClassification, RetryConfig, classify_code, classify_error, classify_response,
    classify_status, with_retry,
};
pub use transport::{S3Transport, convert_object};
