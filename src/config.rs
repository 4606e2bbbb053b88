//! Run configuration for a clone.
//!
//! [`CloneOptions`] is the library-facing view of the command line. It can be
//! built from parsed [`Args`] or directly by callers and tests.

use crate::cli::Args;
use crate::data::CloneMode;

/// System folders that are never cloned. Matched as case-insensitive
/// substrings of the full source path.
pub const DEFAULT_IGNORE_FOLDERS: &[&str] = &[
    "app data",
    "dati applicazioni",
    "program files",
    "programmi",
    "windows",
];

/// Options controlling a clone run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOptions {
    pub mode: CloneMode,
    /// Annotate entries with size, type and timestamps
    pub stats: bool,
    /// Suppress per-directory progress lines
    pub silent: bool,
    /// Lowercase substrings; a directory whose path contains one is pruned
    pub ignore: Vec<String>,
}

impl CloneOptions {
    pub fn new(mode: CloneMode, stats: bool, silent: bool) -> Self {
        Self {
            mode,
            stats,
            silent,
            ignore: DEFAULT_IGNORE_FOLDERS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replaces the ignore list. Patterns are lowercased.
    pub fn with_ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore = patterns
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .collect();
        self
    }
}

impl Default for CloneOptions {
    fn default() -> Self {
        Self::new(CloneMode::Manifest, false, false)
    }
}

impl From<&Args> for CloneOptions {
    fn from(args: &Args) -> Self {
        let mode = if args.placeholders {
            CloneMode::Placeholders
        } else {
            CloneMode::Manifest
        };
        Self::new(mode, args.stats, args.silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_options_from_default_args() {
        let args = Args::parse_from(["treeclone", "src", "dst"]);
        let options = CloneOptions::from(&args);
        assert_eq!(options, CloneOptions::default());
        assert_eq!(options.ignore.len(), DEFAULT_IGNORE_FOLDERS.len());
    }

    #[test]
    fn test_options_from_flags() {
        let args = Args::parse_from([
            "treeclone",
            "src",
            "dst",
            "--placeholders",
            "--stats",
            "--silent",
        ]);
        let options = CloneOptions::from(&args);
        assert_eq!(options.mode, CloneMode::Placeholders);
        assert!(options.stats);
        assert!(options.silent);
    }

    #[test]
    fn test_with_ignore_lowercases() {
        let options = CloneOptions::default().with_ignore(["Node_Modules", ".GIT"]);
        assert_eq!(options.ignore, vec!["node_modules", ".git"]);
    }
}
