//! CLI argument definitions for bt-browse.

use std::path::PathBuf;

use bt_cli_common::{LogLevel, parse_positive_usize};
use clap::{Parser, ValueEnum};

/// Render an object-storage bucket as a collapsible folder tree.
///
/// Lists every object under the given prefixes (the whole bucket by
/// default), drops reserved site files, groups keys into folders and
/// writes the result as HTML, text or JSON.
///
/// ## Examples
///
/// Public bucket to an HTML page:
///   bt-browse -b my-gallery --region eu-central-1 --standalone -o index.html
///
/// Two prefixes as a terminal tree:
///   bt-browse -b my-gallery -p photos/ -p videos/ --format text
///
/// Against LocalStack with signed requests:
///   bt-browse -b test --s3-endpoint http://localhost:4566 --signed
#[derive(Parser, Debug)]
#[command(name = "bt-browse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === S3 Configuration ===
    /// S3 bucket name
    #[arg(short, long, env = "BT_S3_BUCKET")]
    pub bucket: String,

    /// Key prefix to list (can be specified multiple times)
    #[arg(short, long = "prefix")]
    pub prefixes: Vec<String>,

    /// Custom S3 endpoint URL (for LocalStack or S3-compatible stores)
    #[arg(long, env = "BT_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// AWS profile name (only used with --signed)
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Sign requests with resolved AWS credentials instead of listing anonymously
    #[arg(long)]
    pub signed: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Maximum retries per page request
    #[arg(long, default_value = "3")]
    pub max_retries: u32,

    // === Listing Options ===
    /// YAML file with filter and fetch settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Glob pattern for entries to exclude (can be specified multiple times)
    #[arg(long = "exclude", short = 'x')]
    pub excludes: Vec<String>,

    /// Match --exclude patterns against the full key instead of the name
    #[arg(long)]
    pub exclude_full_path: bool,

    /// Keep index.html, favicon.ico, scripts and asset folders
    #[arg(long)]
    pub no_default_filters: bool,

    /// Maximum concurrent page requests (must be >= 1)
    #[arg(long, value_parser = parse_positive_usize)]
    pub concurrency: Option<usize>,

    /// Maximum prefixes fetched in parallel (must be >= 1)
    #[arg(long, value_parser = parse_positive_usize)]
    pub parallel_prefixes: Option<usize>,

    /// Fail when a prefix needs more pages than this (0 = unlimited)
    #[arg(long)]
    pub max_pages: Option<usize>,

    // === Output Options ===
    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    pub format: FormatArg,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Base URL for file links (default: derived from endpoint and bucket)
    #[arg(long, env = "BT_BASE_URL")]
    pub base_url: Option<String>,

    /// strftime layout for modification times
    #[arg(long, default_value = bt_present::DEFAULT_TIME_FORMAT)]
    pub time_format: String,

    /// Emit a complete HTML page instead of a fragment
    #[arg(long)]
    pub standalone: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Do not print the run summary to stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Collapsible HTML listing
    Html,
    /// Indented text tree
    Text,
    /// JSON event list
    Json,
}

impl From<FormatArg> for bt_present::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => bt_present::OutputFormat::Html,
            FormatArg::Text => bt_present::OutputFormat::Text,
            FormatArg::Json => bt_present::OutputFormat::Json,
        }
    }
}
