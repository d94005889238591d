use crate::iter::CrawlIter;
use crate::mode::CrawlMode;
use tracing::debug;

/// An immutable description of one traversal: a root path and a mode.
///
/// Construction performs no filesystem access; the first I/O happens when
/// [`Crawler::iter`] opens the root. A crawler holds no OS resources, so it
/// is freely clonable and reusable — every [`Crawler::iter`] call starts an
/// independent traversal from the root.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Crawler {
    root: String,
    mode: CrawlMode,
}

impl Crawler {
    /// Creates a crawler for `root` in the given mode.
    #[must_use]
    pub fn new<P: Into<String>>(root: P, mode: CrawlMode) -> Self {
        Self {
            root: root.into(),
            mode,
        }
    }

    /// Returns the traversal root.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Returns the traversal mode.
    #[must_use]
    pub const fn mode(&self) -> CrawlMode {
        self.mode
    }

    /// Starts a fresh traversal.
    ///
    /// A root that does not exist or is not a directory yields an iterator
    /// whose first [`Iterator::next`] call returns `None`; this is not an
    /// error.
    #[must_use]
    pub fn iter(&self) -> CrawlIter {
        debug!(root = %self.root, mode = ?self.mode, "starting traversal");
        CrawlIter::new(self.root.clone(), self.mode)
    }
}

impl IntoIterator for &Crawler {
    type Item = String;
    type IntoIter = CrawlIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lists the regular files directly inside `path`, without descending.
#[must_use]
pub fn list_files<P: Into<String>>(path: P) -> Crawler {
    Crawler::new(path, CrawlMode::FlatFile)
}

/// Lists the directories directly inside `path`, without descending.
#[must_use]
pub fn list_directories<P: Into<String>>(path: P) -> Crawler {
    Crawler::new(path, CrawlMode::FlatDirectory)
}

/// Lists the regular files at any depth under `path`, descending into every
/// subdirectory.
#[must_use]
pub fn list_files_recursive<P: Into<String>>(path: P) -> Crawler {
    Crawler::new(path, CrawlMode::RecursiveFile)
}
