//! CLI error handling and exit codes.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;

pub mod formatter;

pub use formatter::ErrorFormatter;

/// Application exit codes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Success = 0,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// CLI error type with rich context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
        path: Option<PathBuf>,
    },

    #[error("{message}")]
    Validation {
        message: String,
        path: Option<PathBuf>,
        hint: Option<String>,
    },
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E002",
            Self::Validation { .. } => "E004",
        }
    }

    /// Get the exit status for this error
    pub fn exit(&self) -> Exit {
        match self {
            Self::Io { .. } => Exit::IoError,
            Self::Validation { .. } => Exit::ValidationError,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        self.exit().into()
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Validation { hint, .. } => hint.as_deref(),
            Self::Io { source, .. } if source.kind() == io::ErrorKind::PermissionDenied => {
                Some("Check the permissions of the directories being scanned")
            }
            Self::Io { source, .. } if source.kind() == io::ErrorKind::InvalidData => {
                Some("Include directives can only name files with UTF-8 paths")
            }
            _ => None,
        }
    }

    /// Path the error refers to, if known
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. } | Self::Validation { path, .. } => path.as_deref(),
        }
    }

    /// Whether the reader of our output went away (e.g. `incgen include | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
            path: None,
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(
        message: impl Into<String>,
        source: io::Error,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source,
            path: Some(path.into()),
        }
    }
}

// Conversion implementations
impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::io(err.to_string(), err)
    }
}

impl From<incgen_core::Error> for CliError {
    fn from(err: incgen_core::Error) -> Self {
        use incgen_core::Error;

        let message = err.to_string();
        match err {
            Error::InvalidInputPath { path, .. } => Self::Validation {
                message,
                path: Some(path),
                hint: Some("Pass an existing directory of header files".to_string()),
            },
            Error::Walk { path, source } => Self::io_with_path(message, source.into(), path),
            Error::NonUtf8Path { path } => {
                Self::io_with_path(message, io::ErrorKind::InvalidData.into(), path)
            }
            Error::CurrentDir(source) => Self::io(message, source),
            Error::Io(source) => source.into(),
        }
    }
}
