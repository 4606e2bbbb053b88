//! Writers that replace source files in the destination tree.
//!
//! # Available Writers
//!
//! - **Manifest**: one `FileList.txt` per directory listing its files
//! - **Placeholder**: one empty or metadata-only file per source file
//!
//! Both take a destination directory, the source directory, its file names
//! and the stats flag, and do nothing for an empty name list.

pub mod manifest;
pub mod placeholder;

/// Manifest writer function.
///
/// See [`manifest::write_manifest`] for full documentation.
pub use manifest::{MANIFEST_NAME, write_manifest};

/// Placeholder writer function.
///
/// See [`placeholder::write_placeholders`] for full documentation.
pub use placeholder::write_placeholders;
