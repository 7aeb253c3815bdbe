//! Common utilities for integration tests.

pub mod localstack;
pub mod memory;

pub use localstack::LocalStackTestContext;
pub use memory::InMemoryBucket;
