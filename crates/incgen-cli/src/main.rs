//! Include Generator
//!
//! Main entry point for the `incgen` binary.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use incgen_cli::error::ErrorFormatter;
use incgen_cli::{Cli, Exit};
use tracing::debug;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli);

    match cli.execute(io::stdout().lock()) {
        Ok(()) => Exit::Success.into(),
        Err(e) if e.is_broken_pipe() => {
            debug!("Output closed early");
            Exit::Success.into()
        }
        Err(e) => {
            ErrorFormatter::new().verbose(cli.verbose >= 2).print(&e);
            e.exit_code()
        }
    }
}

fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = match cli.verbose {
        0 if cli.quiet => EnvFilter::new("error"),
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // stdout carries the include list, so diagnostics go to stderr
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(cli.verbose >= 2),
    );

    subscriber.init();
}
