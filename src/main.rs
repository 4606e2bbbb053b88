//! Main entry point for the `treeclone` CLI application.
//!
//! `treeclone` copies the directory structure of a source tree into a
//! destination tree without copying file content. Each directory gets either
//! a `FileList.txt` manifest or one placeholder file per original file.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Sets up `tracing` diagnostics on stderr
//! - Delegates traversal and writing to [`clone_tree`]
//! - Prints a one-line summary of the run
//!
//! # Flags of Interest
//! - `--placeholders`: Write placeholder files instead of manifests
//! - `--stats`: Annotate entries with size, type and timestamps
//! - `--silent`: Only report ignored directories

use anyhow::{Context, Result};
use clap::Parser;
use humansize::{BINARY, format_size};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use treeclone::{Args, CloneOptions, CloneSummary, clone_tree};

/// Installs the stderr log subscriber.
fn setup_logging(args: &Args) -> Result<()> {
    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")
}

fn print_summary(summary: &CloneSummary, options: &CloneOptions) {
    let mut line = format!(
        "Cloned {} directories ({} ignored), {} files recorded",
        summary.dirs_created, summary.dirs_ignored, summary.files
    );
    if options.stats {
        line.push_str(&format!(
            ", {} described",
            format_size(summary.bytes, BINARY)
        ));
        if summary.degraded > 0 {
            line.push_str(&format!(", {} unreadable", summary.degraded));
        }
    }
    println!("{}", line);
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args)?;

    let options = CloneOptions::from(&args);
    let summary = clone_tree(&args.source, &args.destination, &options)?;

    if !options.silent {
        print_summary(&summary, &options);
    }
    Ok(())
}
