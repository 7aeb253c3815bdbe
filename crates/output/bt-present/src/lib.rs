//! bt-present - Presentation sinks for bucket-tree.
//!
//! Every sink implements [`PresentationSink`] and turns a rendered
//! [`TreeView`](bt_types::TreeView) into a complete document:
//!
//! - [`HtmlSink`] - Collapsible folder listing with download links
//! - [`TextSink`] - Indented tree for terminals
//! - [`JsonSink`] - The event list as JSON
//!
//! # Example
//!
//! ```
//! use bt_present::{HtmlSink, PresentationSink};
//! use bt_types::TreeView;
//!
//! let sink = HtmlSink::new("https://gallery.example.com");
//! let html = sink.present(&TreeView::Empty).unwrap();
//! assert!(html.contains("No content available."));
//! ```

use serde::{Deserialize, Serialize};

mod escape;
mod format;
mod html;
mod json;
mod text;

pub use bt_traits::PresentationSink;
pub use escape::escape_html;
pub use format::{DEFAULT_TIME_FORMAT, format_size, format_timestamp};
pub use html::HtmlSink;
pub use json::JsonSink;
pub use text::TextSink;

/// Placeholder shown when a listing has nothing to display.
pub const PLACEHOLDER_TEXT: &str = "No content available.";

/// Document formats a listing can be presented in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// HTML fragment or standalone page (default)
    #[default]
    Html,

    /// Indented plain-text tree
    Text,

    /// JSON event list
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
