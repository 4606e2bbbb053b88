//! `FileList.txt` writer.
//!
//! Each non-empty directory gets one manifest listing its files, one per
//! line, either as bare names or as full stat descriptors.

use crate::data::FileTally;
use crate::stat::{describe, render_line};
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Name of the manifest written into each destination directory.
pub const MANIFEST_NAME: &str = "FileList.txt";

/// Writes `dest_dir/FileList.txt` for the files of `source_dir`.
///
/// # Arguments
/// * `dest_dir` - Existing destination directory
/// * `source_dir` - Directory the names belong to
/// * `filenames` - File names in traversal order; written unsorted
/// * `include_stats` - Write stat descriptors instead of bare names
///
/// # Returns
/// * `Result<FileTally>` - Lines written and what was described
///
/// # Note
/// An empty `filenames` writes nothing, so an empty directory has no manifest.
pub fn write_manifest<S: AsRef<OsStr>>(
    dest_dir: &Path,
    source_dir: &Path,
    filenames: &[S],
    include_stats: bool,
) -> Result<FileTally> {
    let mut tally = FileTally::default();
    if filenames.is_empty() {
        return Ok(tally);
    }

    let manifest_path = dest_dir.join(MANIFEST_NAME);
    let file = File::create(&manifest_path)
        .with_context(|| format!("Failed to create manifest '{}'", manifest_path.display()))?;
    let mut writer = BufWriter::new(file);

    for name in filenames {
        let name = name.as_ref();
        let line = if include_stats {
            let described = describe(&source_dir.join(name));
            match &described {
                Ok(stat) => tally.bytes += stat.size,
                Err(_) => tally.degraded += 1,
            }
            render_line(&described)
        } else {
            name.to_string_lossy().into_owned()
        };
        writeln!(writer, "{}", line)
            .with_context(|| format!("Failed to write manifest '{}'", manifest_path.display()))?;
        tally.files += 1;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write manifest '{}'", manifest_path.display()))?;
    Ok(tally)
}
