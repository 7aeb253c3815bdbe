//! Error types for bucket-tree.
//!
//! This crate provides:
//! - [`BtError`] - Top-level error enum for every stage of the pipeline
//! - [`ErrorStage`] - Where in the pipeline an error surfaced, for logging
//!
//! Listing failures come in two flavours, [`BtError::Transport`] and
//! [`BtError::MalformedResponse`]. Both abort the fetch they occur in and,
//! through the join over prefixes, the whole pipeline invocation.

use thiserror::Error;

/// Top-level error type for bucket-tree.
#[derive(Error, Debug)]
pub enum BtError {
    /// A listing page request failed (network or HTTP level)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A listing page was missing required fields or carried invalid values
    #[error("Malformed listing response: {0}")]
    MalformedResponse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A presentation sink failed to produce its output
    #[error("Render error: {0}")]
    Render(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BtError {
    /// Whether this error aborts a listing fetch.
    ///
    /// Malformed responses are treated exactly like transport failures:
    /// nothing fetched so far is handed to the caller.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::MalformedResponse(_))
    }

    /// The pipeline stage this error belongs to.
    pub fn stage(&self) -> ErrorStage {
        match self {
            Self::Transport(_) | Self::MalformedResponse(_) => ErrorStage::Fetch,
            Self::Config(_) => ErrorStage::Setup,
            Self::Render(_) => ErrorStage::Present,
            Self::Other(_) => ErrorStage::Unknown,
        }
    }
}

/// Pipeline stage an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    /// Building clients, filters or reading config files
    Setup,

    /// Retrieving listing pages
    Fetch,

    /// Turning the rendered tree into output
    Present,

    /// Not attributable
    Unknown,
}

impl std::fmt::Display for ErrorStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Setup => write!(f, "setup"),
            Self::Fetch => write!(f, "fetch"),
            Self::Present => write!(f, "present"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result type alias using BtError.
pub type Result<T> = std::result::Result<T, BtError>;
