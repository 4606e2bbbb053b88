//! Library crate for treeclone
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Run options and the built-in ignore list
//! - [`data`]: Traversal nodes, modes and run totals
//! - [`category`]: Extension → file type classification
//! - [`size`]: Binary-unit byte formatting
//! - [`stat`]: Per-file stat descriptors
//! - [`error`]: Stat and timestamp error types
//! - [`output`]: Manifest and placeholder writers
//! - [`walk`]: Tree traversal and dispatch
//! - [`utils`]: Path helpers

pub mod category;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod size;
pub mod stat;
pub mod utils;
pub mod walk;

pub use cli::Args;
pub use config::CloneOptions;
pub use data::{CloneMode, CloneSummary};
pub use walk::clone_tree;
