//! JSON event list.

use bt_error::{BtError, Result};
use bt_traits::PresentationSink;
use bt_types::{RenderEvent, TreeView};
use serde::Serialize;

#[derive(Serialize)]
struct JsonDocument<'v, 'a> {
    empty: bool,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    events: &'v [RenderEvent<'a>],
}

/// Serialises the rendered events as `{"empty": false, "events": [...]}`.
///
/// An empty view becomes `{"empty": true}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonSink {
    pretty: bool,
}

impl JsonSink {
    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl PresentationSink for JsonSink {
    fn present(&self, view: &TreeView<'_>) -> Result<String> {
        let document = JsonDocument {
            empty: view.is_empty(),
            events: view.events(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)
        } else {
            serde_json::to_string(&document)
        }
        .map_err(|e| BtError::Render(format!("JSON serialization failed: {e}")))?;

        Ok(json + "\n")
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
