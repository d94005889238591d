//! Windows directory enumeration over the `FindFirstFileW` search API.

use windows::Win32::Foundation::HANDLE;
use windows::Win32::Storage::FileSystem::{
    FILE_ATTRIBUTE_DIRECTORY, FindClose, FindFirstFileW, FindNextFileW, GetFileAttributesW,
    INVALID_FILE_ATTRIBUTES, WIN32_FIND_DATAW,
};
use windows::core::PCWSTR;

use crate::EntryType;

/// Native path separator for this target family.
pub const SEPARATOR: char = '\\';

/// A search-handle enumeration of one directory.
///
/// The search handle is acquired lazily: `FindFirstFileW` runs on the first
/// [`DirHandle::next_entry`] call, later calls use `FindNextFileW`, and drop
/// issues `FindClose` if a handle was ever produced.
#[derive(Debug)]
pub struct DirHandle {
    /// NUL-terminated UTF-16 `<path>\*` search pattern.
    pattern: Vec<u16>,
    search: Option<HANDLE>,
    done: bool,
}

impl DirHandle {
    /// Prepares an enumeration of the directory at `path`.
    ///
    /// Returns `None` when the path cannot be represented to the native call
    /// (empty, or an interior NUL byte). A path that turns out not to name a
    /// directory produces an empty enumeration instead, because the search
    /// API only reports that on the first read.
    #[must_use]
    pub fn open(path: &str) -> Option<Self> {
        let mut pattern = to_wide(path)?;
        pattern.pop();
        pattern.extend([u16::from(b'\\'), u16::from(b'*'), 0]);
        Some(Self {
            pattern,
            search: None,
            done: false,
        })
    }

    /// Returns the next child name, or `None` once the listing is exhausted.
    ///
    /// The `.` and `..` pseudo-entries are never returned. Names whose
    /// UTF-16 payload does not decode (unpaired surrogates) are skipped.
    pub fn next_entry(&mut self) -> Option<String> {
        let mut data = WIN32_FIND_DATAW::default();
        loop {
            if self.done {
                return None;
            }
            match self.search {
                None => {
                    // SAFETY: `pattern` is a live NUL-terminated buffer and
                    // `data` is a valid out-parameter.
                    match unsafe { FindFirstFileW(PCWSTR(self.pattern.as_ptr()), &mut data) } {
                        Ok(handle) => self.search = Some(handle),
                        Err(_) => {
                            self.done = true;
                            return None;
                        }
                    }
                }
                Some(handle) => {
                    // SAFETY: `handle` came from `FindFirstFileW` and has not
                    // been closed.
                    if unsafe { FindNextFileW(handle, &mut data) }.is_err() {
                        self.done = true;
                        return None;
                    }
                }
            }

            let len = data
                .cFileName
                .iter()
                .position(|&unit| unit == 0)
                .unwrap_or(data.cFileName.len());
            let Ok(name) = String::from_utf16(&data.cFileName[..len]) else {
                continue;
            };
            if name != "." && name != ".." {
                return Some(name);
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
        if let Some(handle) = self.search.take() {
            // SAFETY: the search handle is closed exactly once, here.
            let _ = unsafe { FindClose(handle) };
        }
    }
}

/// Classifies `path` with `GetFileAttributesW`.
pub fn entry_type(path: &str) -> EntryType {
    let Some(wide) = to_wide(path) else {
        return EntryType::Unknown;
    };
    // SAFETY: `wide` is a live NUL-terminated UTF-16 buffer.
    let attributes = unsafe { GetFileAttributesW(PCWSTR(wide.as_ptr())) };
    if attributes == INVALID_FILE_ATTRIBUTES {
        EntryType::Unknown
    } else if attributes & FILE_ATTRIBUTE_DIRECTORY.0 != 0 {
        EntryType::Directory
    } else {
        EntryType::File
    }
}

/// Transcodes a UTF-8 path to a NUL-terminated UTF-16 buffer, mapping `/`
/// separators to the native `\`.
///
/// Returns `None` for the empty path and for paths with an interior NUL
/// byte; neither can be handed to the native call meaningfully (an empty
/// path would turn the search pattern into `\*`, the current drive root),
/// so both are treated the same as nonexistent paths.
fn to_wide(path: &str) -> Option<Vec<u16>> {
    if path.is_empty() || path.bytes().any(|byte| byte == 0) {
        return None;
    }
    let mut wide: Vec<u16> = path.replace('/', "\\").encode_utf16().collect();
    wide.push(0);
    Some(wide)
}
