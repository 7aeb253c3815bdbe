//! bt-lister - Listing retrieval and pipeline coordination for bucket-tree.
//!
//! This crate turns a paginated object listing into a folder tree:
//!
//! - Marker-chained page fetching with bounded concurrency across prefixes
//! - Composable entry filters (reserved site files, glob exclusions)
//! - An S3 transport with anonymous access and LocalStack support
//! - YAML configuration for filters and fetch limits
//!
//! # Example
//!
//! ```ignore
//! use bt_lister::{Browser, BrowseConfig};
//! use bt_lister::s3::{S3Config, S3Transport, create_s3_client};
//!
//! let s3_config = S3Config::new("my-gallery").with_region("eu-central-1");
//! let client = create_s3_client(&s3_config).await?;
//! let transport = S3Transport::new(client, &s3_config.bucket);
//!
//! let config = BrowseConfig::new();
//! let browser = Browser::new(transport, config.filter.build_filter()?, config.fetch);
//!
//! let browse = browser.browse(&[]).await?;
//! eprintln!("{} files in {} folders", browse.stats.entries_kept, browse.stats.folders);
//! ```

pub mod browser;
pub mod config;
pub mod fetcher;
pub mod filter;
pub mod s3;
pub mod stats;

pub use browser::{Browse, Browser};
pub use config::{BrowseConfig, FetchConfig, FilterConfig};
pub use fetcher::{Fetched, PageFetcher, PrefixListing};
pub use filter::{
    CompositeFilter, ExcludePatternFilter, Filter, MatchAllFilter, ReservedFilter, filter_entries,
};
pub use s3::{RetryConfig, S3Config, S3Transport, create_s3_client};
pub use stats::BrowseStats;
