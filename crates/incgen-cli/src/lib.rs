//! Include Generator CLI library.
//!
//! Argument parsing, output formatting and error reporting for the `incgen`
//! binary.

pub mod cli;
pub mod error;
pub mod output;

pub use cli::{Cli, OutputFormat};
pub use error::{CliError, Exit};
