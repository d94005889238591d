#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `crawl` provides a lazy, single-pass directory traversal over the uniform
//! enumeration contract exposed by the `platform` crate. A [`Crawler`] pairs
//! a root path with a [`CrawlMode`] and hands out independent [`CrawlIter`]
//! cursors; each cursor walks the tree on demand, yielding the relative path
//! of one qualifying entry per step.
//!
//! # Design
//!
//! - [`list_files`], [`list_directories`], and [`list_files_recursive`] fix
//!   the traversal mode for the common cases.
//! - [`CrawlIter`] implements [`Iterator`] and drives an explicit stack of
//!   open directory handles with a parallel stack of path segments, so
//!   traversal depth is bounded by memory rather than call-stack depth.
//!   Recursion descends immediately, producing depth-first interleaving in
//!   whatever order the OS reports children.
//! - Yielded paths always use `/` as the separator, regardless of the host
//!   convention; the native separator only appears in the paths handed to
//!   the OS.
//!
//! # Invariants
//!
//! - Iterators are move-only values that exclusively own their open handles;
//!   dropping a partially-consumed iterator closes every handle still on its
//!   stack.
//! - Exhaustion is final and idempotent: once [`CrawlIter::next`] returns
//!   `None` it returns `None` forever.
//! - A consumed iterator is never rewound; a fresh call to [`Crawler::iter`]
//!   restarts from the root.
//!
//! # Errors
//!
//! Traversal never fails. A missing, unreadable, or non-directory root
//! produces an empty sequence; a child that vanishes between enumeration and
//! classification, or whose name the OS reports in a non-decodable encoding,
//! is skipped. Callers only ever observe a possibly shorter sequence.
//!
//! # Examples
//!
//! ```
//! use crawl::list_files_recursive;
//! use std::collections::BTreeSet;
//! use std::fs;
//!
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let temp = tempfile::tempdir()?;
//! let root = temp.path().join("src");
//! let nested = root.join("nested");
//! fs::create_dir_all(&nested)?;
//! fs::write(root.join("file.txt"), b"data")?;
//! fs::write(nested.join("more.txt"), b"data")?;
//!
//! let root = root.to_str().ok_or("non-UTF-8 temp path")?;
//! let seen: BTreeSet<String> = list_files_recursive(root).iter().collect();
//!
//! assert!(seen.contains("file.txt"));
//! assert!(seen.contains("nested/more.txt"));
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

mod crawler;
mod iter;
mod mode;

pub use crawler::{Crawler, list_directories, list_files, list_files_recursive};
pub use iter::CrawlIter;
pub use mode::CrawlMode;
