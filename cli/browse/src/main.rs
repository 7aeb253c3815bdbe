//! bt-browse CLI
//!
//! Renders an object-storage bucket listing as a folder tree.

use bt_cli_common::{exit_code, format_bytes, format_duration_ms, format_number, init_logging};
use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.log_level)?;

    let stats = match run::execute(&args).await {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    };

    if args.quiet {
        return Ok(());
    }

    eprintln!();
    eprintln!("Browse completed:");
    eprintln!("  Prefixes:         {}", stats.prefixes);
    eprintln!("  Pages fetched:    {}", format_number(stats.pages_fetched as u64));
    eprintln!("  Entries fetched:  {}", format_number(stats.entries_fetched as u64));
    eprintln!("  Entries filtered: {}", format_number(stats.entries_filtered as u64));
    eprintln!("  Entries listed:   {}", format_number(stats.entries_kept as u64));
    eprintln!("  Folders:          {}", format_number(stats.folders as u64));
    eprintln!("  Bytes listed:     {}", format_bytes(stats.bytes_kept));

    if let Some(duration) = stats.duration() {
        eprintln!(
            "  Duration:         {}",
            format_duration_ms(duration.num_milliseconds())
        );

        if let Some(eps) = stats.entries_per_second() {
            eprintln!("  Throughput:       {eps:.1} entries/sec");
        }
    }

    Ok(())
}
