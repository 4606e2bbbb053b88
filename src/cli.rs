//! CLI interface definitions for the `treeclone` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes
//! [`Args`], the struct parsed from CLI inputs. It is converted into
//! [`crate::config::CloneOptions`] before the clone starts.
//!
//! # Example
//!
//! ```bash
//! treeclone /mnt/archive /tmp/archive-skeleton --placeholders --stats
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `treeclone`.
///
/// # Examples
///
/// ```rust
/// use treeclone::Args;
/// use clap::Parser;
///
/// let args = Args::parse_from(["treeclone", "/data", "/backup", "--stats"]);
/// assert!(args.stats);
/// assert!(!args.placeholders);
/// ```
#[derive(Parser, Debug)]
#[command(name = "treeclone", author, version, about)]
pub struct Args {
    /// Directory tree to clone
    pub source: PathBuf,

    /// Where the skeleton tree is written
    pub destination: PathBuf,

    /// Create a placeholder for every file instead of a FileList.txt per directory
    #[arg(long, default_value_t = false)]
    pub placeholders: bool,

    /// Add size, type and timestamps to each list entry (or as placeholder content)
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Don't print each directory as it is cloned
    #[arg(long, default_value_t = false)]
    pub silent: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
