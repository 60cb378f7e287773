//! Header file name filter.

use std::ffi::OsStr;

/// Suffixes recognized as headers when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".hpp", ".h"];

/// Matches file names against a set of header suffixes.
///
/// Matching is a case-sensitive literal suffix test, so `foo.H` is not a
/// header while `foo.h` is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFilter {
    suffixes: Vec<String>,
}

impl Default for HeaderFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}

impl HeaderFilter {
    /// Build a filter from suffixes; a missing leading dot is added.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes = Vec::new();
        for ext in extensions {
            let ext = ext.as_ref();
            if ext.is_empty() || ext == "." {
                continue;
            }
            let suffix = if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{ext}")
            };
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }
        Self { suffixes }
    }

    /// The normalized suffixes this filter accepts.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether a file name is a header.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        // Non-UTF-8 names are compared lossily; suffixes are plain ASCII in practice.
        let name = file_name.to_string_lossy();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a.hpp", true ; "hpp")]
    #[test_case("b.h", true ; "h")]
    #[test_case("c.txt", false ; "txt")]
    #[test_case("foo.H", false ; "uppercase h")]
    #[test_case("foo.HPP", false ; "uppercase hpp")]
    #[test_case("foo.hh", false ; "hh")]
    #[test_case("foo.hpp.bak", false ; "backup")]
    #[test_case("foo.cpp", false ; "source")]
    #[test_case(".h", true ; "bare suffix")]
    fn test_default_filter(name: &str, expected: bool) {
        assert_eq!(HeaderFilter::default().matches(OsStr::new(name)), expected);
    }

    #[test]
    fn test_custom_extensions_normalized() {
        let filter = HeaderFilter::new(["hh", ".inl", "hh", "", "."]);
        assert_eq!(filter.suffixes(), &[".hh".to_string(), ".inl".to_string()]);
        assert!(filter.matches(OsStr::new("x.hh")));
        assert!(filter.matches(OsStr::new("x.inl")));
        assert!(!filter.matches(OsStr::new("x.h")));
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let filter = HeaderFilter::new(Vec::<String>::new());
        assert!(!filter.matches(OsStr::new("a.h")));
    }
}
