//! Error types for include generation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for include generation.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path is missing or is not a directory.
    #[error("{reason}: {}", path.display())]
    InvalidInputPath { path: PathBuf, reason: &'static str },

    /// Walking the tree failed part way through.
    #[error("failed to read {}: {}", path.display(), walk_cause(source))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A header or the prefix has a name that cannot be written in a directive.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    /// The working directory anchoring the prefix could not be resolved.
    #[error("cannot determine current directory")]
    CurrentDir(#[source] io::Error),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an invalid input path error for `path`, checking `resolved` on disk
    /// to pick the reason.
    pub fn invalid_input(path: impl Into<PathBuf>, resolved: &std::path::Path) -> Self {
        let path = path.into();
        let reason = if resolved.exists() {
            "path is not a directory"
        } else {
            "directory does not exist"
        };
        Self::InvalidInputPath { path, reason }
    }

    /// The path this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::InvalidInputPath { path, .. }
            | Self::Walk { path, .. }
            | Self::NonUtf8Path { path } => Some(path),
            _ => None,
        }
    }
}

/// The cause of a walk failure without the path walkdir already prefixes it with.
fn walk_cause(err: &walkdir::Error) -> String {
    if let Some(ancestor) = err.loop_ancestor() {
        format!("filesystem loop back to {}", ancestor.display())
    } else if let Some(io) = err.io_error() {
        io.to_string()
    } else {
        err.to_string()
    }
}

/// Result type alias using the include generator's error.
pub type Result<T> = std::result::Result<T, Error>;
