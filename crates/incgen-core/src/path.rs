//! Path manipulation utilities.
//!
//! Everything here is lexical: no function touches the filesystem, so the
//! reference directory does not have to exist for a prefix to be computed.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by resolving `.` and `..` without hitting the filesystem.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(p) => components.push(Component::Prefix(p)),
            Component::RootDir => {
                components.retain(|c| matches!(c, Component::Prefix(_)));
                components.push(Component::RootDir);
            }
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::ParentDir) | None => components.push(Component::ParentDir),
                // `..` above the root stays at the root
                _ => {}
            },
            Component::Normal(c) => components.push(Component::Normal(c)),
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}

/// Anchor `path` at `cwd` unless it is already absolute, then normalize it.
pub fn absolutize(path: impl AsRef<Path>, cwd: impl AsRef<Path>) -> PathBuf {
    normalize(cwd.as_ref().join(path))
}

/// Make a path relative to a base path.
///
/// Both paths should be absolute (or both relative to the same anchor).
/// Returns `.` when they are the same directory.
pub fn relative_to(path: impl AsRef<Path>, base: impl AsRef<Path>) -> PathBuf {
    let path = normalize(path);
    let base = normalize(base);

    let mut path_components = path.components().peekable();
    let mut base_components = base.components().peekable();

    // Skip common prefix
    while let (Some(p), Some(b)) = (path_components.peek(), base_components.peek()) {
        if p != b {
            break;
        }
        path_components.next();
        base_components.next();
    }

    let mut result = PathBuf::new();
    for _ in base_components {
        result.push("..");
    }
    for component in path_components {
        result.push(component);
    }

    if result.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        result
    }
}

/// Render a relative path the way an `#include` directive spells it.
///
/// Separators become `/` on every platform and `.` components are dropped.
/// An empty path renders as `.`. Returns `None` if a component is not valid
/// UTF-8, since such a name cannot be spelled in a directive.
pub fn to_include_path(path: impl AsRef<Path>) -> Option<String> {
    let mut parts = Vec::new();
    for component in path.as_ref().components() {
        match component {
            Component::Normal(name) => parts.push(name.to_str()?),
            Component::ParentDir => parts.push(".."),
            _ => {}
        }
    }

    if parts.is_empty() {
        Some(".".to_string())
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("./a/b/../c", "a/c" ; "leading dot and parent")]
    #[test_case("a/./b", "a/b" ; "inner dot")]
    #[test_case("a/../b", "b" ; "parent cancels")]
    #[test_case("../../a/b", "../../a/b" ; "leading parents kept")]
    #[test_case("a/b/c/../../d", "a/d" ; "two parents")]
    #[test_case("", "." ; "empty")]
    #[test_case(".", "." ; "current dir")]
    #[test_case("..", ".." ; "single parent")]
    fn test_normalize(input: &str, expected: &str) {
        assert_eq!(normalize(input), PathBuf::from(expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_stops_at_root() {
        assert_eq!(normalize("/../a"), PathBuf::from("/a"));
        assert_eq!(normalize("/a/../../b"), PathBuf::from("/b"));
    }

    #[cfg(unix)]
    #[test_case("/a/b/c", "/a/b", "c" ; "child")]
    #[test_case("/a/b", "/a/b/c", ".." ; "parent")]
    #[test_case("/a/b/c", "/a/d", "../b/c" ; "sibling")]
    #[test_case("/a/b/c", "/a/d/e", "../../b/c" ; "cousin")]
    #[test_case("/a/b/c", "/a/b/c", "." ; "same dir")]
    #[test_case("/a/./b/../b/c", "/a/b", "c" ; "unnormalized input")]
    fn test_relative_to(path: &str, base: &str, expected: &str) {
        assert_eq!(relative_to(path, base), PathBuf::from(expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize() {
        assert_eq!(absolutize("include", "/work"), PathBuf::from("/work/include"));
        assert_eq!(absolutize("../x", "/work/sub"), PathBuf::from("/work/x"));
        assert_eq!(absolutize("/abs/dir", "/work"), PathBuf::from("/abs/dir"));
    }

    #[test]
    fn test_to_include_path() {
        let nested: PathBuf = ["sub", "deep", "d.hpp"].iter().collect();
        assert_eq!(to_include_path(&nested).as_deref(), Some("sub/deep/d.hpp"));

        let up: PathBuf = ["..", "other", "headers"].iter().collect();
        assert_eq!(to_include_path(&up).as_deref(), Some("../other/headers"));

        assert_eq!(to_include_path(".").as_deref(), Some("."));
        assert_eq!(to_include_path("").as_deref(), Some("."));
    }

    #[cfg(unix)]
    #[test]
    fn test_to_include_path_rejects_non_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("sub").join(OsStr::from_bytes(b"bad\xff.h"));
        assert_eq!(to_include_path(path), None);
    }
}
