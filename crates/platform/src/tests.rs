use super::*;
use std::fs;
use std::path::Path;

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are valid UTF-8")
}

#[test]
fn open_missing_path_returns_none() {
    assert!(DirHandle::open("/nonexistent/path/for/platform").is_none());
}

#[test]
fn open_empty_path_returns_none() {
    assert!(DirHandle::open("").is_none());
}

#[test]
fn open_rejects_interior_nul() {
    assert!(DirHandle::open("bad\0path").is_none());
}

#[cfg(unix)]
#[test]
fn open_regular_file_returns_none() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("file.txt");
    fs::write(&file, b"data").expect("write");

    assert!(DirHandle::open(path_str(&file)).is_none());
}

#[test]
fn enumeration_skips_dot_entries() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("a.txt"), b"a").expect("write a");
    fs::write(temp.path().join("b.txt"), b"b").expect("write b");

    let handle = DirHandle::open(path_str(temp.path())).expect("open tempdir");
    let mut names: Vec<String> = handle.collect();
    names.sort();
    assert_eq!(names, vec!["a.txt".to_owned(), "b.txt".to_owned()]);
}

#[test]
fn exhausted_handle_stays_exhausted() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("only.txt"), b"data").expect("write");

    let mut handle = DirHandle::open(path_str(temp.path())).expect("open tempdir");
    assert!(handle.next_entry().is_some());
    assert!(handle.next_entry().is_none());
    assert!(handle.next_entry().is_none());
}

#[test]
fn empty_directory_enumerates_nothing() {
    let temp = tempfile::tempdir().expect("tempdir");
    let mut handle = DirHandle::open(path_str(temp.path())).expect("open tempdir");
    assert!(handle.next_entry().is_none());
}

#[test]
fn entry_type_classifies_files_and_directories() {
    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("file.txt");
    fs::write(&file, b"data").expect("write");

    assert_eq!(entry_type(path_str(temp.path())), EntryType::Directory);
    assert_eq!(entry_type(path_str(&file)), EntryType::File);
}

#[test]
fn entry_type_reports_unknown_for_missing_paths() {
    assert_eq!(
        entry_type("/nonexistent/path/for/platform"),
        EntryType::Unknown
    );
    assert_eq!(entry_type(""), EntryType::Unknown);
    assert_eq!(entry_type("bad\0path"), EntryType::Unknown);
}

#[cfg(unix)]
#[test]
fn entry_type_follows_symlinks() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let file = temp.path().join("target.txt");
    fs::write(&file, b"data").expect("write");
    let link = temp.path().join("link");
    symlink(&file, &link).expect("symlink");

    assert_eq!(entry_type(path_str(&link)), EntryType::File);
}

#[cfg(unix)]
#[test]
fn entry_type_reports_unknown_for_dangling_symlink() {
    use std::os::unix::fs::symlink;

    let temp = tempfile::tempdir().expect("tempdir");
    let link = temp.path().join("dangling");
    symlink(temp.path().join("gone"), &link).expect("symlink");

    assert_eq!(entry_type(path_str(&link)), EntryType::Unknown);
}

#[test]
fn separator_matches_host_convention() {
    assert_eq!(SEPARATOR, std::path::MAIN_SEPARATOR);
}
