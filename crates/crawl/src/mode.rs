/// Traversal mode, fixed when a [`crate::Crawler`] is constructed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CrawlMode {
    /// Yield only regular files directly inside the root, without descent.
    FlatFile,
    /// Yield only directories directly inside the root, without descent.
    FlatDirectory,
    /// Yield regular files at any depth, descending into every directory
    /// found along the way. Directory names themselves are never yielded.
    RecursiveFile,
}
