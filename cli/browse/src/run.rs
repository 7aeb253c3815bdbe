//! Main execution logic for bt-browse.

use std::path::Path;

use anyhow::{Context, Result};
use bt_lister::s3::{RetryConfig, S3Config, S3Transport, create_s3_client};
use bt_lister::{BrowseConfig, BrowseStats, Browser};
use bt_present::{HtmlSink, JsonSink, OutputFormat, PresentationSink, TextSink};
use bt_tree::render_view;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::args::Cli;

/// Execute a browse run with the provided arguments.
///
/// The document is only written once the full listing has been fetched
/// and rendered.
pub async fn execute(args: &Cli) -> Result<BrowseStats> {
    let config = load_config(args)?;
    let s3_config = build_s3_config(args);

    let client = create_s3_client(&s3_config).await?;
    let transport = S3Transport::new(client, &s3_config.bucket).with_retry(s3_config.retry.clone());

    let filter = config.filter.build_filter()?;
    let browser = Browser::new(transport, filter, config.fetch);
    let browse = browser.browse(&args.prefixes).await?;

    let sink = build_sink(args, &s3_config);
    let view = render_view(&browse.root);
    let document = sink.present(&view)?;

    debug!(
        format = sink.format_name(),
        bytes = document.len(),
        "Document rendered"
    );

    write_output(args.output.as_deref(), &document).await?;

    Ok(browse.stats)
}

/// Merge the optional YAML config file with command-line overrides.
pub fn load_config(args: &Cli) -> Result<BrowseConfig> {
    let mut config = match &args.config {
        Some(path) => BrowseConfig::from_file(path)?,
        None => BrowseConfig::default(),
    };

    if args.no_default_filters {
        config.filter.reserved_names.clear();
        config.filter.reserved_extensions.clear();
        config.filter.reserved_base_names.clear();
    }

    config
        .filter
        .exclude_patterns
        .extend(args.excludes.iter().cloned());

    if args.exclude_full_path {
        config.filter.match_full_path = true;
    }

    if let Some(concurrency) = args.concurrency {
        config.fetch.max_concurrent_requests = concurrency;
    }
    if let Some(parallel_prefixes) = args.parallel_prefixes {
        config.fetch.max_parallel_prefixes = parallel_prefixes;
    }
    if let Some(max_pages) = args.max_pages {
        config.fetch.max_pages = max_pages;
    }

    config.fetch.validate()?;

    Ok(config)
}

/// Build S3 access settings from command-line arguments.
pub fn build_s3_config(args: &Cli) -> S3Config {
    let mut s3_config = S3Config::new(&args.bucket)
        .with_region(&args.region)
        .with_anonymous(!args.signed)
        .with_timeout(args.timeout)
        .with_retry(RetryConfig::new().with_max_retries(args.max_retries));

    if let Some(endpoint) = &args.s3_endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }

    if let Some(profile) = &args.profile {
        s3_config = s3_config.with_profile(profile);
    }

    s3_config
}

/// Choose the presentation sink for the requested format.
pub fn build_sink(args: &Cli, s3_config: &S3Config) -> Box<dyn PresentationSink> {
    match OutputFormat::from(args.format) {
        OutputFormat::Html => {
            let base_url = args
                .base_url
                .clone()
                .unwrap_or_else(|| s3_config.public_base_url());

            let mut sink = HtmlSink::new(base_url).with_time_format(&args.time_format);
            if args.standalone {
                sink = sink.with_document(&args.bucket);
            }
            Box::new(sink)
        }
        OutputFormat::Text => Box::new(TextSink::new().with_time_format(&args.time_format)),
        OutputFormat::Json if args.pretty => Box::new(JsonSink::pretty()),
        OutputFormat::Json => Box::new(JsonSink::compact()),
    }
}

/// Write the document to `path`, or to stdout when no path is given.
pub async fn write_output(path: Option<&Path>, document: &str) -> Result<()> {
    match path {
        Some(path) => {
            tokio::fs::write(path, document)
                .await
                .map_err(|e| bt_error::BtError::Render(format!("{}: {e}", path.display())))
                .context("Failed to write output file")?;
            info!(path = %path.display(), bytes = document.len(), "Wrote document");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout
                .write_all(document.as_bytes())
                .await
                .context("Failed to write to stdout")?;
            stdout.flush().await.context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
