//! bt-tree - Hierarchy building and tree rendering for bucket-tree.
//!
//! Both stages are synchronous, pure transformations over already fetched
//! entries:
//!
//! - [`build_tree`] folds a flat entry sequence into a [`FolderNode`] root
//! - [`render`] walks the root depth-first into ordered [`RenderEvent`]s
//! - [`render_view`] does the same but reports an empty tree as
//!   [`TreeView::Empty`] so callers can show a placeholder
//!
//! # Example
//!
//! ```
//! use bt_tree::{build_tree, render_view};
//! use bt_types::{Entry, TreeView};
//! use chrono::Utc;
//!
//! let entries = vec![Entry::new("a/b/c.png", Utc::now(), "", 1).unwrap()];
//! let root = build_tree(entries);
//!
//! match render_view(&root) {
//!     TreeView::Tree(events) => assert_eq!(events.len(), 5),
//!     TreeView::Empty => unreachable!(),
//! }
//! ```

mod builder;
mod render;

pub use builder::build_tree;
pub use render::{compare_names, render, render_view};

pub use bt_types::{Entry, FolderNode, Node, RenderEvent, TreeView};
