//! Integration tests for bucket-tree.
//!
//! The pipeline tests run against an in-memory bucket and need nothing
//! external. The S3 tests require LocalStack and are marked `#[ignore]`.
//!
//! ## Running the LocalStack tests
//!
//! 1. Start LocalStack:
//!    ```bash
//!    docker run --rm -d -p 4566:4566 localstack/localstack
//!    ```
//!
//! 2. Run the ignored tests:
//!    ```bash
//!    LOCALSTACK_ENDPOINT=http://localhost:4566 cargo test -p integration-tests -- --ignored
//!    ```

mod common;
mod pipeline_test;
mod present_test;
mod s3_test;
