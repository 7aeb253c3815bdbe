//! Core types for bucket-tree.
//!
//! This crate provides the data model shared by every stage of the pipeline:
//! - [`Entry`] - One storage object with its derived name, base name and depth
//! - [`FolderNode`] / [`Node`] - The folder hierarchy rebuilt from entry keys
//! - [`RenderEvent`] / [`TreeView`] - The ordered traversal handed to sinks

pub mod entry;
pub mod node;
pub mod render;

pub use entry::*;
pub use node::*;
pub use render::*;
