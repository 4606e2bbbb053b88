//! Data structures passed between the walker and the writers.
//!
//! Nothing here outlives a single clone run.

use std::ffi::OsString;
use std::path::PathBuf;

/// One source directory ready to be mirrored.
///
/// # Fields
/// * `source` - The directory in the source tree
/// * `destination` - The matching directory in the destination tree
/// * `filenames` - Immediate non-directory children, in listing order
#[derive(Debug, Clone)]
pub struct TraversalNode {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub filenames: Vec<OsString>,
}

/// What each source file is replaced with.
///
/// # Variants
/// * `Manifest` - One `FileList.txt` per directory
/// * `Placeholders` - One stand-in file per source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneMode {
    #[default]
    Manifest,
    Placeholders,
}

impl CloneMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloneMode::Manifest => "manifest",
            CloneMode::Placeholders => "placeholders",
        }
    }
}

/// Counts produced by writing one directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTally {
    /// Manifest lines written or placeholders created
    pub files: usize,
    /// Source bytes of files that were described
    pub bytes: u64,
    /// Files whose metadata could not be read
    pub degraded: usize,
}

/// Totals for a whole clone run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CloneSummary {
    pub dirs_created: usize,
    pub dirs_ignored: usize,
    pub files: usize,
    pub bytes: u64,
    pub degraded: usize,
}

impl CloneSummary {
    /// Adds the tally of one processed directory.
    pub fn record(&mut self, tally: FileTally) {
        self.dirs_created += 1;
        self.files += tally.files;
        self.bytes += tally.bytes;
        self.degraded += tally.degraded;
    }
}
