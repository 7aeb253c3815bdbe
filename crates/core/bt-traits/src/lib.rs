//! Boundary traits for bucket-tree.
//!
//! The pipeline depends only on the shapes defined here:
//! - [`ListingTransport`] - Answers "page of entries after marker X"
//! - [`PresentationSink`] - Turns a rendered tree into a document

pub mod listing;
pub mod sink;

pub use listing::*;
pub use sink::*;
