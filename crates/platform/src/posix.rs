//! POSIX directory enumeration over the `opendir`/`readdir` family.

use std::ffi::{CStr, CString};
use std::ptr::NonNull;

use crate::EntryType;

/// Native path separator for this target family.
pub const SEPARATOR: char = '/';

/// An open `readdir` stream for one directory.
///
/// The handle exclusively owns the underlying `DIR` stream and closes it on
/// drop. Holding a raw stream pointer keeps the type `!Send`, which matches
/// the single-threaded traversal model.
#[derive(Debug)]
pub struct DirHandle {
    dir: NonNull<libc::DIR>,
}

impl DirHandle {
    /// Opens an enumeration stream for the directory at `path`.
    ///
    /// Returns `None` when the path does not exist, is not a directory,
    /// cannot be opened (for example permission denied), or contains an
    /// interior NUL byte and therefore cannot be handed to the OS at all.
    #[must_use]
    pub fn open(path: &str) -> Option<Self> {
        let c_path = CString::new(path).ok()?;
        // SAFETY: `c_path` is a valid NUL-terminated string for the duration
        // of the call; `opendir` returns an owned stream or null.
        let dir = unsafe { libc::opendir(c_path.as_ptr()) };
        NonNull::new(dir).map(|dir| Self { dir })
    }

    /// Returns the next child name from the stream, or `None` once the
    /// listing is exhausted.
    ///
    /// The `.` and `..` pseudo-entries are never returned. Names that do not
    /// decode as UTF-8 are skipped rather than surfaced.
    pub fn next_entry(&mut self) -> Option<String> {
        loop {
            // SAFETY: `self.dir` is a live stream owned by this handle. The
            // returned dirent pointer is only read before the next `readdir`
            // call on the same stream.
            let entry = unsafe { libc::readdir(self.dir.as_ptr()) };
            if entry.is_null() {
                return None;
            }
            // SAFETY: `d_name` is a NUL-terminated buffer inside the dirent
            // just returned for this stream.
            let name = unsafe { CStr::from_ptr((*entry).d_name.as_ptr()) };
            match name.to_str() {
                Ok(".") | Ok("..") | Err(_) => {}
                Ok(name) => return Some(name.to_owned()),
            }
        }
    }
}

impl Iterator for DirHandle {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry()
    }
}

impl Drop for DirHandle {
    fn drop(&mut self) {
        // SAFETY: the stream was produced by `opendir` and is closed exactly
        // once, here.
        unsafe {
            libc::closedir(self.dir.as_ptr());
        }
    }
}

/// Classifies `path` with `stat(2)`, following symbolic links.
pub fn entry_type(path: &str) -> EntryType {
    let Ok(c_path) = CString::new(path) else {
        return EntryType::Unknown;
    };
    // SAFETY: zeroed stat buffers are valid out-parameters for `stat`.
    let mut stat_buf: libc::stat = unsafe { std::mem::zeroed() };
    // SAFETY: `c_path` is NUL-terminated and `stat_buf` outlives the call.
    let ret = unsafe { libc::stat(c_path.as_ptr(), &mut stat_buf) };
    if ret != 0 {
        return EntryType::Unknown;
    }
    match stat_buf.st_mode & libc::S_IFMT {
        libc::S_IFREG => EntryType::File,
        libc::S_IFDIR => EntryType::Directory,
        _ => EntryType::Unknown,
    }
}
