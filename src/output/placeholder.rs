//! Placeholder writer.
//!
//! Every source file is replaced by a file of the same name that is either
//! empty or holds the file's metadata fragment.

use crate::data::FileTally;
use crate::stat::{describe, render_fragment};
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Creates one placeholder in `dest_dir` per name in `filenames`.
///
/// With `include_stats` the placeholder content is the metadata fragment of
/// the source file followed by a newline, e.g.
/// `document (txt); 12 B; 2024-01-01 00:00:00 (created 2024-01-01 00:00:00)`.
/// Otherwise the placeholder is empty. Existing files are overwritten.
pub fn write_placeholders<S: AsRef<OsStr>>(
    dest_dir: &Path,
    source_dir: &Path,
    filenames: &[S],
    include_stats: bool,
) -> Result<FileTally> {
    let mut tally = FileTally::default();

    for name in filenames {
        let name = name.as_ref();
        let placeholder_path = dest_dir.join(name);

        let content = if include_stats {
            let described = describe(&source_dir.join(name));
            match &described {
                Ok(stat) => tally.bytes += stat.size,
                Err(_) => tally.degraded += 1,
            }
            format!("{}\n", render_fragment(&described))
        } else {
            String::new()
        };

        fs::write(&placeholder_path, content).with_context(|| {
            format!(
                "Failed to write placeholder '{}'",
                placeholder_path.display()
            )
        })?;
        tally.files += 1;
    }

    Ok(tally)
}
