//! CLI argument definitions using clap derive macros.

use std::io::Write;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use incgen_core::{IncludeGenerator, IncludeOptions, DEFAULT_REFERENCE_DIR};
use tracing::info;

use crate::error::CliError;
use crate::output::{write_json, IncludeReport};

/// Include Generator
///
/// Print one `#include` directive per header file beneath a directory,
/// ready to paste into an umbrella header.
#[derive(Debug, Parser)]
#[command(
    name = "incgen",
    author,
    version,
    about,
    long_about = None,
    help_template = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
    /// Directory to scan for headers
    #[arg(value_hint = ValueHint::DirPath)]
    pub path: PathBuf,

    /// Directory the emitted include paths are relative to
    #[arg(
        short,
        long,
        env = "INCGEN_REFERENCE_DIR",
        default_value = DEFAULT_REFERENCE_DIR,
        value_hint = ValueHint::DirPath
    )]
    pub reference: PathBuf,

    /// Header suffix to match (repeatable; replaces the default .hpp and .h)
    #[arg(
        short = 'e',
        long = "extension",
        value_name = "EXT",
        action = ArgAction::Append
    )]
    pub extensions: Vec<String>,

    /// Visit entries in file name order for reproducible output
    #[arg(long)]
    pub sort: bool,

    /// Descend into symlinked directories
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Output format
    #[arg(long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Build generator options from the parsed arguments.
    pub fn options(&self) -> IncludeOptions {
        let mut options = IncludeOptions::new().reference(&self.reference);
        if !self.extensions.is_empty() {
            options = options.extensions(&self.extensions);
        }
        if self.sort {
            options = options.sorted();
        }
        if self.follow_links {
            options = options.follow_links();
        }
        options
    }

    /// Scan `path` and write the result to `writer`.
    pub fn execute<W: Write>(&self, writer: W) -> Result<(), CliError> {
        let generator = IncludeGenerator::new(&self.path, self.options())?;
        info!(
            root = %self.path.display(),
            prefix = generator.prefix(),
            "Scanning for headers"
        );

        let count = match self.format {
            OutputFormat::Text => generator.write_to(writer)?,
            OutputFormat::Json => {
                let report = IncludeReport::collect(&self.path, &generator)?;
                write_json(&report, writer)?;
                report.includes.len()
            }
        };

        info!("Emitted {count} include directives");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use incgen_core::DEFAULT_EXTENSIONS;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["incgen", "include/engine"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("include/engine"));
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.extensions.is_empty());
        assert!(!cli.sort);

        let options = cli.options();
        assert_eq!(options.filter.suffixes(), DEFAULT_EXTENSIONS);
        assert!(!options.follow_links);
    }

    #[test]
    fn test_path_is_required() {
        assert!(Cli::try_parse_from(["incgen"]).is_err());
    }

    #[test]
    fn test_extensions_replace_defaults() {
        let cli =
            Cli::try_parse_from(["incgen", "-e", "hh", "--extension", ".inl", "src"]).unwrap();
        assert_eq!(
            cli.options().filter.suffixes(),
            &[".hh".to_string(), ".inl".to_string()]
        );
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "incgen", "--sort", "-L", "--format", "json", "-r", "src", "-vv", "headers",
        ])
        .unwrap();
        let options = cli.options();
        assert!(options.sort);
        assert!(options.follow_links);
        assert_eq!(options.reference_dir, PathBuf::from("src"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["incgen", "-q", "-v", "include"]).is_err());
    }
}
