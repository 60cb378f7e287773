//! Header discovery for umbrella headers.
//!
//! Walks a header directory and produces one `#include` directive per header
//! beneath it. Each path is prefixed with the scanned directory's location
//! relative to a reference directory (`include` by default).
//!
//! ```no_run
//! use incgen_core::{IncludeGenerator, IncludeOptions};
//!
//! let generator = IncludeGenerator::new("include/engine", IncludeOptions::new())?;
//! generator.write_to(std::io::stdout().lock())?;
//! # Ok::<(), incgen_core::Error>(())
//! ```

pub mod error;
pub mod filter;
pub mod generator;
pub mod line;
pub mod path;

pub use error::{Error, Result};
pub use filter::{HeaderFilter, DEFAULT_EXTENSIONS};
pub use generator::{Headers, IncludeGenerator, IncludeOptions, DEFAULT_REFERENCE_DIR};
pub use line::IncludeLine;
