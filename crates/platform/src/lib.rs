#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `platform` isolates the unsafe, OS-specific directory enumeration
//! primitives consumed by the `crawl` crate. Every target family provides the
//! same three-operation surface:
//!
//! - [`DirHandle::open`] acquires an enumeration resource for a directory
//!   path, or `None` when the path is absent, not a directory, or not
//!   representable to the underlying OS call.
//! - [`DirHandle::next_entry`] streams child names one at a time, skipping
//!   the `.` and `..` pseudo-entries, until the listing is exhausted.
//! - [`entry_type`] classifies a path as [`EntryType::File`],
//!   [`EntryType::Directory`], or [`EntryType::Unknown`].
//!
//! The POSIX implementation wraps `opendir`/`readdir`/`closedir` and
//! `stat(2)`; the Windows implementation wraps the `FindFirstFileW` search
//! API and `GetFileAttributesW`, transcoding paths to UTF-16 at the
//! boundary. The variant is selected at compile time by target family, never
//! by runtime branching.
//!
//! # Invariants
//!
//! - A [`DirHandle`] owns its OS resource exclusively. The type is
//!   move-only; the resource is released exactly once, on drop.
//! - No operation here returns an error value. Irregular filesystem
//!   conditions (missing paths, permission denials, names that do not decode
//!   to UTF-8) collapse to `None` or [`EntryType::Unknown`] so callers can
//!   apply uniform treat-as-absent semantics.
//! - Classification is recomputed on every [`entry_type`] call; nothing is
//!   cached across calls.

#[cfg(unix)]
mod posix;
#[cfg(unix)]
use posix as imp;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use windows as imp;

pub use imp::{DirHandle, SEPARATOR};

/// Classification of a single filesystem path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryType {
    /// Nonexistent, special (socket, fifo, device), undecodable, or vanished
    /// between enumeration and classification.
    Unknown,
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

/// Classifies the entry at `path`.
///
/// Symbolic links are followed, so a link to a regular file classifies as
/// [`EntryType::File`] and a dangling link as [`EntryType::Unknown`]. The
/// result is computed fresh on every call; a path that vanished since it was
/// enumerated simply reports [`EntryType::Unknown`].
#[must_use]
pub fn entry_type(path: &str) -> EntryType {
    imp::entry_type(path)
}

#[cfg(test)]
mod tests;
