//! Error formatting for CLI output.

use std::error::Error;
use std::io::{self, Write};

use crate::error::CliError;

/// Error output formatter
#[derive(Debug, Default)]
pub struct ErrorFormatter {
    verbose: bool,
}

impl ErrorFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Format and print an error to stderr
    pub fn print(&self, error: &CliError) {
        let formatted = self.format(error);
        // Nothing sensible is left to do if stderr is gone.
        let _ = io::stderr().lock().write_all(formatted.as_bytes());
    }

    /// Format an error to a string
    pub fn format(&self, error: &CliError) -> String {
        let mut output = format!("error[{}]: {error}\n", error.code());

        if let CliError::Io { path: Some(path), message, .. } = error {
            let path = path.display().to_string();
            if !message.contains(&path) {
                output.push_str(&format!("  path: {path}\n"));
            }
        }

        // Source chain in verbose mode
        if self.verbose {
            let mut current = error.source();
            if current.is_some() {
                output.push_str("\ncaused by:\n");
            }
            let mut depth = 0;
            while let Some(source) = current {
                output.push_str(&format!("  {depth}: {source}\n"));
                current = source.source();
                depth += 1;
            }
        }

        if let Some(hint) = error.hint() {
            output.push_str(&format!("\nhint: {hint}\n"));
        }

        output
    }
}
