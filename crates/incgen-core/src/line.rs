//! A single generated `#include` directive.

use std::fmt;

/// One discovered header, ready to be rendered as an include directive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IncludeLine {
    /// Path from the reference directory to the scanned directory, `/`-separated.
    pub prefix: String,
    /// Path of the header relative to the scanned directory, `/`-separated.
    pub relative: String,
}

impl IncludeLine {
    pub fn new(prefix: impl Into<String>, relative: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            relative: relative.into(),
        }
    }

    /// The text between the angle brackets.
    ///
    /// A `.` prefix is dropped rather than rendered as a leading `./`.
    pub fn include_path(&self) -> String {
        if self.prefix == "." || self.prefix.is_empty() {
            self.relative.clone()
        } else {
            format!("{}/{}", self.prefix, self.relative)
        }
    }
}

impl fmt::Display for IncludeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#include <{}>", self.include_path())
    }
}
