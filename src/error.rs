//! Error types shared by the playground components.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced at an operation boundary.
///
/// None of these are fatal: callers report them and the playground stays usable.
/// A user cancelling a picker is not an error and never produces one of these.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted data is not a project record at all.
    #[error("malformed project record: {reason}")]
    MalformedRecord { reason: String },

    /// The buffers could not be serialised into a project record.
    #[error("failed to encode project record: {reason}")]
    Encode { reason: String },

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl PlaygroundError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;
