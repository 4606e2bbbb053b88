//! Path helpers for the tree walker.
//!
//! This module provides:
//! - Ignore-list matching against source directory paths
//! - Source → destination path mapping
//! - Immediate file listing for one directory
//! - Resolution of not-yet-existing paths for containment checks

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns true if the lowercased `path` contains any of `patterns`.
///
/// Patterns are expected to be lowercase already.
pub fn is_ignored(path: &Path, patterns: &[String]) -> bool {
    let lowered = path.to_string_lossy().to_lowercase();
    patterns.iter().any(|p| lowered.contains(p.as_str()))
}

/// Maps a directory under `source_root` to the same relative position under
/// `dest_root`. The source root itself maps to `dest_root`.
pub fn destination_for(source_root: &Path, dest_root: &Path, dir: &Path) -> PathBuf {
    match dir.strip_prefix(source_root) {
        Ok(relative) if relative.as_os_str().is_empty() => dest_root.to_path_buf(),
        Ok(relative) => dest_root.join(relative),
        Err(_) => dest_root.to_path_buf(),
    }
}

/// Lists the names of the non-directory entries directly inside `dir`, in
/// the order the filesystem returns them.
///
/// Symlinks are not followed, so a link to a directory is listed as a file.
pub fn list_files(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            names.push(entry.file_name());
        }
    }
    Ok(names)
}

/// Canonicalizes `path` even if its tail does not exist yet, by resolving
/// the deepest existing ancestor and re-appending the rest.
pub fn resolve_path(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    for name in missing.into_iter().rev() {
        resolved.push(name);
    }
    Ok(resolved)
}
