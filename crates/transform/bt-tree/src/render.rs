//! Deterministic depth-first rendering of a folder tree.

use std::cmp::Ordering;

use bt_types::{Entry, FolderNode, RenderEvent, TreeView};

/// Walk `root` depth-first and emit render events.
///
/// The root itself never gets a header; its children are emitted
/// directly. Inside every folder, child folders come first in insertion
/// order, followed by the folder's files sorted by name case-insensitively
/// in descending order. Files with names that compare equal keep their
/// insertion order.
pub fn render(root: &FolderNode) -> Vec<RenderEvent<'_>> {
    let mut events = Vec::new();
    render_contents(root, &mut events);
    events
}

/// Like [`render`], but an empty root yields [`TreeView::Empty`].
pub fn render_view(root: &FolderNode) -> TreeView<'_> {
    if root.is_empty() {
        TreeView::Empty
    } else {
        TreeView::Tree(render(root))
    }
}

/// Case-insensitive name comparison used for file ordering.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

fn render_folder<'a>(folder: &'a FolderNode, events: &mut Vec<RenderEvent<'a>>) {
    events.push(RenderEvent::FolderStart {
        name: &folder.name,
        path: &folder.path,
        depth: folder.depth,
        child_count: folder.child_count(),
    });
    render_contents(folder, events);
    events.push(RenderEvent::FolderEnd { path: &folder.path });
}

fn render_contents<'a>(folder: &'a FolderNode, events: &mut Vec<RenderEvent<'a>>) {
    for child in folder.folders() {
        render_folder(child, events);
    }

    let mut files: Vec<&Entry> = folder.files().collect();
    files.sort_by(|left, right| compare_names(right.name(), left.name()));
    events.extend(files.into_iter().map(|entry| RenderEvent::File { entry }));
}
