//! Presentation sink trait.

use bt_error::Result;
use bt_types::TreeView;

/// Trait for turning a rendered tree into a document.
///
/// Sinks own everything visual: markup, size and timestamp formatting,
/// expand/collapse wiring and escaping. Names and paths in the view are
/// raw storage keys and may contain characters that need escaping; a sink
/// that produces markup must escape them.
///
/// For [`TreeView::Empty`] a sink emits its "no content available"
/// placeholder instead of a tree.
pub trait PresentationSink: Send + Sync {
    /// Produce the full document for `view`.
    fn present(&self, view: &TreeView<'_>) -> Result<String>;

    /// Short name of the output format, used for logging.
    fn format_name(&self) -> &'static str;
}
