use crate::mode::CrawlMode;
use platform::{DirHandle, EntryType, SEPARATOR};
use std::iter::FusedIterator;
use tracing::trace;

/// Lazy depth-first cursor over one traversal.
///
/// The cursor keeps one open [`DirHandle`] per directory level currently
/// being descended into (bottom is the root, top is the current directory)
/// and a parallel stack of path segments used to rebuild the relative path
/// of the current entry. The root level records no segment, so the segment
/// stack is always exactly one shorter than the handle stack while any
/// handles remain open.
///
/// Dropping the cursor early closes every handle still on the stack.
#[derive(Debug)]
pub struct CrawlIter {
    root: String,
    mode: CrawlMode,
    handles: Vec<DirHandle>,
    segments: Vec<String>,
}

impl CrawlIter {
    /// Opens the root handle; an unopenable root leaves the stack empty and
    /// the cursor immediately exhausted.
    pub(crate) fn new(root: String, mode: CrawlMode) -> Self {
        let mut handles = Vec::new();
        match DirHandle::open(&root) {
            Some(handle) => handles.push(handle),
            None => trace!(root = %root, "traversal root is not an openable directory"),
        }
        Self {
            root,
            mode,
            handles,
            segments: Vec::new(),
        }
    }

    /// Joins the root, the recorded segments, and `name` with the native
    /// separator, producing the path handed to the OS.
    fn native_path(&self, name: &str) -> String {
        let mut path = self.root.clone();
        for segment in &self.segments {
            path.push(SEPARATOR);
            path.push_str(segment);
        }
        path.push(SEPARATOR);
        path.push_str(name);
        path
    }

    /// Joins the recorded segments and `name` with `/`, producing the value
    /// yielded to the caller.
    fn relative_path(&self, name: &str) -> String {
        if self.segments.is_empty() {
            name.to_owned()
        } else {
            let mut path = self.segments.join("/");
            path.push('/');
            path.push_str(name);
            path
        }
    }

    /// Pushes a handle and segment for the subdirectory `name`. A failed
    /// open skips the descent entirely; the stacks stay paired.
    fn descend(&mut self, name: String) {
        match DirHandle::open(&self.native_path(&name)) {
            Some(handle) => {
                trace!(directory = %name, depth = self.handles.len(), "descending");
                self.handles.push(handle);
                self.segments.push(name);
            }
            None => trace!(directory = %name, "skipping unopenable directory"),
        }
    }
}

impl Iterator for CrawlIter {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let name = match self.handles.last_mut() {
                Some(handle) => handle.next_entry(),
                None => return None,
            };
            let Some(name) = name else {
                // Current level exhausted; the handle closes on pop and the
                // cursor falls back to the parent. The root level has no
                // segment, so the extra pop there is a no-op.
                self.handles.pop();
                self.segments.pop();
                continue;
            };

            match platform::entry_type(&self.native_path(&name)) {
                EntryType::Directory => match self.mode {
                    CrawlMode::FlatDirectory => return Some(self.relative_path(&name)),
                    CrawlMode::RecursiveFile => self.descend(name),
                    CrawlMode::FlatFile => {}
                },
                EntryType::File => {
                    if self.mode != CrawlMode::FlatDirectory {
                        return Some(self.relative_path(&name));
                    }
                }
                // Vanished, special, or undecodable entries are neither
                // yielded nor descended into.
                EntryType::Unknown => {}
            }
        }
    }
}

impl FusedIterator for CrawlIter {}
