use std::path::PathBuf;
use thiserror::Error;

/// Failure to describe a single file.
///
/// Never aborts a clone: the descriptor renders it as `BAD NAMED FILE: <path>`.
#[derive(Debug, Error)]
pub enum StatError {
    #[error("BAD NAMED FILE: {}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to render one timestamp of an otherwise valid stat record.
#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("timestamp not available: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("timestamp out of range")]
    OutOfRange,
}
