//! Per-file stat descriptors.
//!
//! [`describe`] reads filesystem metadata for one file and returns a
//! structured [`FileStat`]. Failures stay typed until rendering:
//!
//! - a failed metadata call becomes [`StatError::Metadata`], rendered as
//!   `BAD NAMED FILE: <path>`
//! - a timestamp that cannot be converted becomes a [`TimestampError`],
//!   rendered as `ERROR` for that field only
//!
//! Rendering never fails, so a bad file never interrupts a clone.

use crate::category::{Category, classify};
use crate::error::{StatError, TimestampError};
use crate::size::format_size;
use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::fs::{self, Metadata};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Metadata of a single source file, as reported in manifests and placeholders.
#[derive(Debug)]
pub struct FileStat {
    pub name: String,
    pub category: Category,
    pub extension: String,
    pub size: u64,
    pub modified: Result<DateTime<Local>, TimestampError>,
    pub created: Result<DateTime<Local>, TimestampError>,
}

impl FileStat {
    /// Returns the bracketed part of the descriptor without the brackets:
    /// `<category> (<ext>); <size>; <mtime> (created <ctime>)`.
    pub fn fragment(&self) -> String {
        format!(
            "{} ({}); {}; {} (created {})",
            self.category,
            self.extension,
            format_size(self.size),
            format_timestamp(&self.modified),
            format_timestamp(&self.created)
        )
    }
}

impl fmt::Display for FileStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  [{}]", self.name, self.fragment())
    }
}

/// Reads metadata for `path` and builds its [`FileStat`].
///
/// # Errors
/// Returns [`StatError::Metadata`] if the file cannot be stat'ed for any
/// reason (missing, unreadable, invalid name). Timestamp problems are not
/// errors here; they are kept per field inside the record.
pub fn describe(path: &Path) -> Result<FileStat, StatError> {
    let metadata = fs::metadata(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "cannot read file metadata");
        StatError::Metadata {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());
    let extension = extension_of(&name);

    Ok(FileStat {
        category: classify(&extension),
        extension,
        size: metadata.len(),
        modified: metadata
            .modified()
            .map_err(TimestampError::from)
            .and_then(to_local),
        created: created_time(&metadata),
        name,
    })
}

/// Renders a descriptor as a full manifest line.
pub fn render_line(described: &Result<FileStat, StatError>) -> String {
    match described {
        Ok(stat) => stat.to_string(),
        Err(err) => err.to_string(),
    }
}

/// Renders a descriptor as placeholder content. A degraded record keeps its
/// full `BAD NAMED FILE` sentinel since it has no metadata fragment.
pub fn render_fragment(described: &Result<FileStat, StatError>) -> String {
    match described {
        Ok(stat) => stat.fragment(),
        Err(err) => err.to_string(),
    }
}

/// Describes `path` as a single line. Never fails.
///
/// # Examples
///
/// ```rust
/// use treeclone::stat::describe_line;
/// use std::path::Path;
///
/// let line = describe_line(Path::new("/no/such/file.txt"));
/// assert_eq!(line, "BAD NAMED FILE: /no/such/file.txt");
/// ```
pub fn describe_line(path: &Path) -> String {
    render_line(&describe(path))
}

/// Describes `path` as a metadata fragment. Never fails.
pub fn describe_fragment(path: &Path) -> String {
    render_fragment(&describe(path))
}

/// Text after the last `.`, lowercased. A name without a dot is its own
/// extension.
fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

fn format_timestamp(time: &Result<DateTime<Local>, TimestampError>) -> String {
    match time {
        Ok(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        Err(err) => {
            debug!(error = %err, "timestamp rendered as ERROR");
            "ERROR".to_string()
        }
    }
}

/// Whole seconds since the epoch, floored for pre-epoch times.
fn epoch_seconds(time: SystemTime) -> Result<i64, TimestampError> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).map_err(|_| TimestampError::OutOfRange),
        Err(before) => {
            let before = before.duration();
            let secs = i64::try_from(before.as_secs()).map_err(|_| TimestampError::OutOfRange)?;
            Ok(if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            })
        }
    }
}

fn local_from_seconds(secs: i64) -> Result<DateTime<Local>, TimestampError> {
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .ok_or(TimestampError::OutOfRange)
}

fn to_local(time: SystemTime) -> Result<DateTime<Local>, TimestampError> {
    epoch_seconds(time).and_then(local_from_seconds)
}

/// Birth time where the filesystem reports one, otherwise the inode change time.
#[cfg(unix)]
fn created_time(metadata: &Metadata) -> Result<DateTime<Local>, TimestampError> {
    use std::os::unix::fs::MetadataExt;

    match metadata.created() {
        Ok(time) => to_local(time),
        Err(_) => local_from_seconds(metadata.ctime()),
    }
}

#[cfg(not(unix))]
fn created_time(metadata: &Metadata) -> Result<DateTime<Local>, TimestampError> {
    metadata
        .created()
        .map_err(TimestampError::from)
        .and_then(to_local)
}
