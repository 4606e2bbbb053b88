//! Directory tree cloning for `treeclone`.
//!
//! This module handles:
//! - Top-down directory traversal using `WalkDir`
//! - Pruning of ignored system folders, whole subtree at once
//! - Creation of the mirrored destination directories
//! - Dispatch of each directory's files to the manifest or placeholder writer
//!
//! The main entry point is [`clone_tree`], which returns a [`CloneSummary`]
//! of what was written. Directories are processed one at a time, each one
//! completely before the walk moves on.

use crate::config::CloneOptions;
use crate::data::{CloneMode, CloneSummary, FileTally, TraversalNode};
use crate::output::{write_manifest, write_placeholders};
use crate::utils::{destination_for, is_ignored, list_files, resolve_path};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Mirrors the directory structure of `source_root` into `dest_root`.
///
/// # Arguments
/// * `source_root` - Existing directory to clone
/// * `dest_root` - Destination root; created if missing, may already exist
/// * `options` - Mode, stats, silent flag and ignore list
///
/// # Returns
/// * `Result<CloneSummary>` - Counts of directories and files written
///
/// # Errors
/// Returns an error if:
/// - `source_root` is missing or not a directory
/// - `dest_root` lies inside `source_root`
/// - A destination directory, manifest or placeholder cannot be written
///
/// Unreadable source files never fail the run; they are recorded as
/// `BAD NAMED FILE` entries. Unreadable source directories are logged and
/// skipped.
pub fn clone_tree(
    source_root: &Path,
    dest_root: &Path,
    options: &CloneOptions,
) -> Result<CloneSummary> {
    let metadata = fs::metadata(source_root)
        .with_context(|| format!("Cannot access source '{}'", source_root.display()))?;
    if !metadata.is_dir() {
        bail!("Source '{}' is not a directory", source_root.display());
    }
    ensure_outside_source(source_root, dest_root)?;

    debug!(
        source = %source_root.display(),
        destination = %dest_root.display(),
        mode = options.mode.as_str(),
        stats = options.stats,
        "starting clone"
    );

    let mut summary = CloneSummary::default();
    let mut walker = WalkDir::new(source_root).follow_links(false).into_iter();

    while let Some(entry) = walker.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }

        let dir = entry.path();
        if is_ignored(dir, &options.ignore) {
            println!("IGNORED {}", dir.display());
            summary.dirs_ignored += 1;
            walker.skip_current_dir();
            continue;
        }

        let filenames = match list_files(dir) {
            Ok(names) => names,
            Err(err) => {
                warn!(path = %dir.display(), error = %err, "cannot list directory, skipping");
                walker.skip_current_dir();
                continue;
            }
        };

        let node = TraversalNode {
            source: dir.to_path_buf(),
            destination: destination_for(source_root, dest_root, dir),
            filenames,
        };
        let tally = clone_node(&node, options)?;
        summary.record(tally);
    }

    debug!(?summary, "clone finished");
    Ok(summary)
}

/// Creates the destination directory of `node` and writes its files.
pub fn clone_node(node: &TraversalNode, options: &CloneOptions) -> Result<FileTally> {
    fs::create_dir_all(&node.destination).with_context(|| {
        format!(
            "Failed to create destination directory '{}'",
            node.destination.display()
        )
    })?;

    if !options.silent {
        println!("{}", node.source.display());
    }
    debug!(
        source = %node.source.display(),
        files = node.filenames.len(),
        "cloning directory"
    );

    match options.mode {
        CloneMode::Manifest => write_manifest(
            &node.destination,
            &node.source,
            &node.filenames,
            options.stats,
        ),
        CloneMode::Placeholders => write_placeholders(
            &node.destination,
            &node.source,
            &node.filenames,
            options.stats,
        ),
    }
}

/// Refuses destinations inside the source tree, which the walk would visit.
fn ensure_outside_source(source_root: &Path, dest_root: &Path) -> Result<()> {
    let source = source_root
        .canonicalize()
        .with_context(|| format!("Cannot resolve source '{}'", source_root.display()))?;
    let dest = resolve_path(dest_root)
        .with_context(|| format!("Cannot resolve destination '{}'", dest_root.display()))?;

    if dest.starts_with(&source) {
        bail!(
            "Destination '{}' is inside source '{}'",
            dest_root.display(),
            source_root.display()
        );
    }
    Ok(())
}
