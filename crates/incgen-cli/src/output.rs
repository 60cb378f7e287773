//! Output formatting utilities.

use std::io::{self, Write};
use std::path::Path;

use incgen_core::IncludeGenerator;
use serde::Serialize;

use crate::error::CliError;

/// Machine-readable result of a scan, printed by `--format json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IncludeReport {
    /// The directory as given on the command line.
    pub root: String,
    pub prefix: String,
    /// Text between the angle brackets of each directive.
    pub includes: Vec<String>,
}

impl IncludeReport {
    /// Run the generator to completion.
    pub fn collect(root: &Path, generator: &IncludeGenerator) -> incgen_core::Result<Self> {
        let includes = generator
            .headers()
            .map(|line| line.map(|line| line.include_path()))
            .collect::<incgen_core::Result<Vec<_>>>()?;

        Ok(Self {
            root: root.display().to_string(),
            prefix: generator.prefix().to_string(),
            includes,
        })
    }
}

/// Write a value as pretty-printed JSON followed by a newline.
pub fn write_json<T, W>(value: &T, mut writer: W) -> Result<(), CliError>
where
    T: Serialize,
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, value).map_err(io::Error::from)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
