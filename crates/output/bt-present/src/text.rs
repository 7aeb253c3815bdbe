//! Plain-text tree for terminals.

use bt_error::Result;
use bt_traits::PresentationSink;
use bt_types::{RenderEvent, TreeView};

use crate::PLACEHOLDER_TEXT;
use crate::format::{DEFAULT_TIME_FORMAT, format_size, format_timestamp};

/// Renders a listing as an indented tree.
///
/// ```text
/// photos/ (2 items)
///   summer/ (1 items)
///     beach.png  2 KB  13.09.2020, 12:26:40
///   cat.png  512 B  13.09.2020, 12:26:40
/// ```
#[derive(Debug, Clone)]
pub struct TextSink {
    indent: usize,
    time_format: String,
}

impl Default for TextSink {
    fn default() -> Self {
        Self {
            indent: 2,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }
}

impl PresentationSink for TextSink {
    fn present(&self, view: &TreeView<'_>) -> Result<String> {
        let events = match view {
            TreeView::Empty => return Ok(format!("{PLACEHOLDER_TEXT}\n")),
            TreeView::Tree(events) => events,
        };

        let mut out = String::new();
        let mut level = 0usize;

        for event in events {
            match event {
                RenderEvent::FolderStart {
                    name, child_count, ..
                } => {
                    out.push_str(&" ".repeat(level * self.indent));
                    out.push_str(&format!("{name}/ ({child_count} items)\n"));
                    level += 1;
                }
                RenderEvent::File { entry } => {
                    let modified = format_timestamp(&entry.last_modified(), &self.time_format)?;
                    let size = format_size(entry.size());
                    let columns: Vec<&str> = [entry.name(), size.as_str(), modified.as_str()]
                        .into_iter()
                        .filter(|c| !c.is_empty())
                        .collect();

                    out.push_str(&" ".repeat(level * self.indent));
                    out.push_str(&columns.join("  "));
                    out.push('\n');
                }
                RenderEvent::FolderEnd { .. } => level = level.saturating_sub(1),
            }
        }

        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "text"
    }
}
