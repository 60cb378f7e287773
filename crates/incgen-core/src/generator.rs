//! Header discovery and include line generation.

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::filter::HeaderFilter;
use crate::line::IncludeLine;
use crate::path::{absolutize, relative_to, to_include_path};

/// Reference directory the prefix is computed from by default.
pub const DEFAULT_REFERENCE_DIR: &str = "include";

/// Options for include generation.
#[derive(Debug, Clone)]
pub struct IncludeOptions {
    /// Directory the emitted paths are relative to, resolved against the working directory.
    pub reference_dir: PathBuf,
    /// Which file names count as headers.
    pub filter: HeaderFilter,
    /// Visit siblings in file name order.
    pub sort: bool,
    /// Descend into symlinked directories.
    pub follow_links: bool,
}

impl Default for IncludeOptions {
    fn default() -> Self {
        Self {
            reference_dir: PathBuf::from(DEFAULT_REFERENCE_DIR),
            filter: HeaderFilter::default(),
            sort: false,
            follow_links: false,
        }
    }
}

impl IncludeOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reference directory.
    pub fn reference(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reference_dir = dir.into();
        self
    }

    /// Replace the header suffixes.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter = HeaderFilter::new(extensions);
        self
    }

    /// Sort siblings by file name.
    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Follow symlinks.
    pub fn follow_links(mut self) -> Self {
        self.follow_links = true;
        self
    }
}

/// A validated scan root together with its precomputed prefix.
#[derive(Debug, Clone)]
pub struct IncludeGenerator {
    root: PathBuf,
    prefix: String,
    options: IncludeOptions,
}

impl IncludeGenerator {
    /// Validate `root` and compute its prefix against the process working directory.
    pub fn new(root: impl AsRef<Path>, options: IncludeOptions) -> Result<Self> {
        let cwd = env::current_dir().map_err(Error::CurrentDir)?;
        Self::with_cwd(root, cwd, options)
    }

    /// Like [`IncludeGenerator::new`] with an explicit working directory.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn with_cwd(
        root: impl AsRef<Path>,
        cwd: impl AsRef<Path>,
        options: IncludeOptions,
    ) -> Result<Self> {
        let root = root.as_ref();
        let cwd = cwd.as_ref();

        // Relative roots are resolved against `cwd`, not the process directory.
        let resolved = cwd.join(root);
        if !resolved.is_dir() {
            return Err(Error::invalid_input(root, &resolved));
        }

        let reference = absolutize(&options.reference_dir, cwd);
        let prefix = to_include_path(relative_to(absolutize(root, cwd), &reference))
            .ok_or_else(|| Error::NonUtf8Path {
                path: root.to_path_buf(),
            })?;
        debug!(
            reference = %reference.display(),
            prefix = %prefix,
            suffixes = ?options.filter.suffixes(),
            "Computed include prefix"
        );

        Ok(Self {
            root: resolved,
            prefix,
            options,
        })
    }

    /// The directory being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path from the reference directory to the root, `/`-separated.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn options(&self) -> &IncludeOptions {
        &self.options
    }

    /// Iterate over discovered headers in traversal order.
    ///
    /// The iterator ends after yielding the first traversal error.
    pub fn headers(&self) -> Headers<'_> {
        let mut walker = WalkDir::new(&self.root).follow_links(self.options.follow_links);
        if self.options.sort {
            walker = walker.sort_by_file_name();
        }

        Headers {
            walker: walker.into_iter(),
            generator: self,
            failed: false,
        }
    }

    /// Collect every include line, failing on the first traversal error.
    pub fn collect(&self) -> Result<Vec<IncludeLine>> {
        self.headers().collect()
    }

    /// Write one directive per header to `writer`, returning how many were written.
    ///
    /// Lines are written as they are found, so a traversal error leaves the
    /// lines before it in the writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<usize> {
        let mut count = 0;
        let result = self.headers().try_for_each(|line| -> Result<()> {
            writeln!(writer, "{}", line?)?;
            count += 1;
            Ok(())
        });
        writer.flush()?;
        result?;

        debug!("Wrote {} include lines", count);
        Ok(count)
    }
}

/// Iterator over the headers beneath a root. See [`IncludeGenerator::headers`].
pub struct Headers<'a> {
    walker: walkdir::IntoIter,
    generator: &'a IncludeGenerator,
    failed: bool,
}

impl Iterator for Headers<'_> {
    type Item = Result<IncludeLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    self.failed = true;
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.generator.root.clone());
                    return Some(Err(Error::Walk { path, source: e }));
                }
            };

            if is_directory(&entry) || !self.generator.options.filter.matches(entry.file_name()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.generator.root)
                .unwrap_or_else(|_| entry.path());
            let Some(relative) = to_include_path(relative) else {
                self.failed = true;
                return Some(Err(Error::NonUtf8Path {
                    path: entry.into_path(),
                }));
            };

            trace!(path = %entry.path().display(), "Found header");
            return Some(Ok(IncludeLine::new(self.generator.prefix.clone(), relative)));
        }
    }
}

/// Directories, including symlinks that resolve to one, are never headers.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
