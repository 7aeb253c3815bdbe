//! Retry logic for listing requests.
//!
//! A single page request is retried with exponential backoff and jitter when
//! the failure looks transient. Marker chaining is never restarted here: a
//! retried request always repeats the same prefix and marker.

use rand::Rng;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Configuration for retry behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries before giving up.
    pub max_retries: u32,
    /// Initial backoff duration in milliseconds.
    pub initial_backoff_ms: u64,
    /// Maximum backoff duration in milliseconds.
    pub max_backoff_ms: u64,
    /// Whether to add jitter to backoff times.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 100,
            max_backoff_ms: 5000,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_initial_backoff_ms(mut self, initial_backoff_ms: u64) -> Self {
        self.initial_backoff_ms = initial_backoff_ms;
        self
    }

    pub fn with_max_backoff_ms(mut self, max_backoff_ms: u64) -> Self {
        self.max_backoff_ms = max_backoff_ms;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }

    /// Backoff before retry number `attempt` (zero-based), capped at `max_backoff_ms`.
    pub fn backoff_duration(&self, attempt: u32) -> Duration {
        let base_ms = self
            .initial_backoff_ms
            .saturating_mul(2u64.saturating_pow(attempt));
        let capped_ms = base_ms.min(self.max_backoff_ms);

        let final_ms = if self.jitter {
            let jitter_range = capped_ms / 4;
            let jitter = rand::rng().random_range(0..=jitter_range);
            capped_ms.saturating_add(jitter)
        } else {
            capped_ms
        };

        Duration::from_millis(final_ms)
    }
}

/// Error classification for retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClassification {
    Retryable,
    NonRetryable,
}

/// Errors that know whether repeating the request could help.
pub trait Classify {
    fn classification(&self) -> ErrorClassification;
}

impl Classify for String {
    fn classification(&self) -> ErrorClassification {
        classify_error(self)
    }
}

/// S3 error codes that will fail the same way on every attempt.
const NON_RETRYABLE_CODES: &[&str] = &[
    "NoSuchBucket",
    "AccessDenied",
    "AllAccessDisabled",
    "InvalidBucketName",
    "InvalidRequest",
    "InvalidArgument",
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "PermanentRedirect",
];

/// S3 error codes for throttling and server-side trouble.
const RETRYABLE_CODES: &[&str] = &[
    "SlowDown",
    "Throttling",
    "ThrottlingException",
    "TooManyRequests",
    "RequestTimeout",
    "InternalError",
    "ServiceUnavailable",
];

/// Classify an S3 error code, if it is a known one.
pub fn classify_code(code: &str) -> Option<ErrorClassification> {
    if NON_RETRYABLE_CODES.contains(&code) {
        Some(ErrorClassification::NonRetryable)
    } else if RETRYABLE_CODES.contains(&code) {
        Some(ErrorClassification::Retryable)
    } else {
        None
    }
}

/// Classify an HTTP status.
///
/// 408, 429 and 5xx are retryable; any other 3xx or 4xx is not.
pub fn classify_status(status: u16) -> ErrorClassification {
    match status {
        408 | 429 | 500..=599 => ErrorClassification::Retryable,
        300..=499 => ErrorClassification::NonRetryable,
        _ => ErrorClassification::Retryable,
    }
}

/// Classify a service response from its error code and HTTP status.
///
/// A known code decides; otherwise the status does. With neither, the
/// failure is treated as retryable.
pub fn classify_response(code: Option<&str>, status: Option<u16>) -> ErrorClassification {
    code.and_then(classify_code)
        .or_else(|| status.map(classify_status))
        .unwrap_or(ErrorClassification::Retryable)
}

/// Classify a listing error from its message alone.
///
/// Used when no structured error metadata is available. The message is
/// split into alphanumeric tokens so that bucket names and keys cannot
/// pass for error codes or statuses: known S3 codes decide first, then
/// connection phrases, then any three-digit HTTP status token. Anything
/// unrecognised is treated as retryable.
pub fn classify_error(error: &str) -> ErrorClassification {
    let tokens: Vec<&str> = error
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    if let Some(classification) = tokens.iter().find_map(|t| classify_code(t)) {
        return classification;
    }

    const TRANSIENT_PHRASES: &[&str] = &[
        "service unavailable",
        "timeout",
        "timed out",
        "connection reset",
        "connection refused",
        "dispatch failure",
    ];
    let error_lower = error.to_lowercase();
    if TRANSIENT_PHRASES
        .iter()
        .any(|phrase| error_lower.contains(phrase))
    {
        return ErrorClassification::Retryable;
    }

    tokens
        .iter()
        .filter(|t| t.len() == 3)
        .find_map(|t| t.parse::<u16>().ok())
        .filter(|status| (100..=599).contains(status))
        .map(classify_status)
        .unwrap_or(ErrorClassification::Retryable)
}

/// Execute an async operation with retry logic.
///
/// Returns the first success, the first non-retryable error, or the error
/// of the final attempt once `max_retries` retries are used up.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display + Classify,
{
    let mut attempt = 0;

    loop {
        let error = match operation().await {
            Ok(result) => return Ok(result),
            Err(e) => e,
        };

        if error.classification() == ErrorClassification::NonRetryable {
            warn!(
                operation = operation_name,
                attempt,
                error = %error,
                "Non-retryable error"
            );
            return Err(error);
        }

        if attempt >= config.max_retries {
            warn!(
                operation = operation_name,
                attempts = attempt + 1,
                error = %error,
                "Giving up after retries"
            );
            return Err(error);
        }

        let backoff = config.backoff_duration(attempt);
        warn!(
            operation = operation_name,
            attempt,
            error = %error,
            backoff_ms = backoff.as_millis(),
            "Retryable error, backing off"
        );
        sleep(backoff).await;
        attempt += 1;
    }
}
