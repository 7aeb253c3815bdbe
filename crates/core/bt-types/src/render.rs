//! Render events produced by walking a folder tree.

use serde::Serialize;

use crate::Entry;

/// One step of a depth-first tree walk.
///
/// Every `FolderStart` is matched by a later `FolderEnd` with the same
/// path; everything between them belongs to that folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RenderEvent<'a> {
    /// Header of a folder
    FolderStart {
        name: &'a str,
        path: &'a str,
        depth: i32,
        /// Immediate children only
        child_count: usize,
    },

    /// A file leaf
    File { entry: &'a Entry },

    /// Closes the folder opened by the matching `FolderStart`
    FolderEnd { path: &'a str },
}

impl RenderEvent<'_> {
    /// Whether this event opens a folder.
    pub fn is_folder_start(&self) -> bool {
        matches!(self, Self::FolderStart { .. })
    }

    /// Display name of the folder or file this event refers to.
    ///
    /// `FolderEnd` events have no name of their own.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::FolderStart { name, .. } => Some(*name),
            Self::File { entry } => Some(entry.name()),
            Self::FolderEnd { .. } => None,
        }
    }
}

/// The result of rendering a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeView<'a> {
    /// The root had no children; show a "no content available" placeholder
    Empty,

    /// Ordered events for a non-empty tree
    Tree(Vec<RenderEvent<'a>>),
}

impl<'a> TreeView<'a> {
    /// Whether the placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The events, empty for the placeholder view.
    pub fn events(&self) -> &[RenderEvent<'a>] {
        match self {
            Self::Empty => &[],
            Self::Tree(events) => events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_event_names() {
        let entry = Entry::new("a/b.png", Utc::now(), "", 1).unwrap();
        let start = RenderEvent::FolderStart {
            name: "a",
            path: "/a",
            depth: 0,
            child_count: 1,
        };
        let file = RenderEvent::File { entry: &entry };
        let end = RenderEvent::FolderEnd { path: "/a" };

        assert_eq!(start.name(), Some("a"));
        assert_eq!(file.name(), Some("b.png"));
        assert_eq!(end.name(), None);
        assert!(start.is_folder_start());
        assert!(!file.is_folder_start());
    }

    #[test]
    fn test_tree_view_events() {
        assert!(TreeView::Empty.is_empty());
        assert!(TreeView::Empty.events().is_empty());

        let view = TreeView::Tree(vec![RenderEvent::FolderEnd { path: "/a" }]);
        assert!(!view.is_empty());
        assert_eq!(view.events().len(), 1);
    }

    #[test]
    fn test_event_serialization() {
        let event = RenderEvent::FolderStart {
            name: "a",
            path: "/a",
            depth: 0,
            child_count: 3,
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "folder_start");
        assert_eq!(json["child_count"], 3);
    }
}
