//! File and directory duplication
//!
//! The copy primitive shared by backup and restore. Files are copied byte
//! for byte, directories are walked recursively. Nothing is rolled back on
//! failure: whatever was written before the error stays on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::audit::Operation;
use crate::error::{BackuperError, BackuperResult};

/// Kind of filesystem entry being duplicated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "File"),
            EntryKind::Directory => write!(f, "Directory"),
        }
    }
}

/// Stat the entry at `path`, following symlinks
///
/// Fails with `BackuperError::Access` when the entry is missing, unreadable
/// or a dangling link.
pub fn inspect(path: &Path) -> BackuperResult<EntryKind> {
    let metadata = fs::metadata(path).map_err(|e| BackuperError::access(path, &e))?;
    if metadata.is_dir() {
        Ok(EntryKind::Directory)
    } else {
        Ok(EntryKind::File)
    }
}

/// Duplicate `source` into `destination`, overwriting what is there
pub fn duplicate(
    operation: Operation,
    source: &Path,
    destination: &Path,
    kind: EntryKind,
) -> BackuperResult<()> {
    if same_entry(source, destination) {
        return Err(BackuperError::copy(
            operation,
            "source and destination are the same path",
        ));
    }

    let result = match kind {
        EntryKind::File => fs::copy(source, destination).map(|_| ()),
        EntryKind::Directory => {
            if is_within(source, destination) {
                return Err(BackuperError::copy(
                    operation,
                    format!(
                        "cannot copy {} into its own subdirectory {}",
                        source.display(),
                        destination.display()
                    ),
                ));
            }
            copy_tree(source, destination)
        }
    };

    result.map_err(|e| BackuperError::copy(operation, e.to_string()))
}

/// Whether two paths name the same entry, lexically or after resolution
fn same_entry(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Whether `destination` lies inside `source`, lexically or after resolution
fn is_within(source: &Path, destination: &Path) -> bool {
    if destination.starts_with(source) {
        return true;
    }
    match (fs::canonicalize(source), resolve_destination(destination)) {
        (Ok(source), Some(destination)) => destination.starts_with(source),
        _ => false,
    }
}

/// Canonicalize a path that may not exist yet
///
/// The deepest existing ancestor is resolved and the missing components are
/// appended back on top of it.
fn resolve_destination(destination: &Path) -> Option<PathBuf> {
    let mut missing = Vec::new();
    let mut existing = destination;

    loop {
        let candidate = if existing.as_os_str().is_empty() {
            Path::new(".")
        } else {
            existing
        };
        if let Ok(mut resolved) = fs::canonicalize(candidate) {
            resolved.extend(missing.iter().rev());
            return Some(resolved);
        }
        missing.push(existing.file_name()?);
        existing = existing.parent()?;
    }
}

/// Recursively copy a directory tree
///
/// Symbolic links inside the tree are recreated as links rather than
/// followed. Missing directories are created along the way.
fn copy_tree(source: &Path, destination: &Path) -> io::Result<()> {
    for entry in WalkDir::new(source).follow_links(false) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = destination.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_symlink() {
            copy_symlink(entry.path(), &target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}

/// Recreate the link at `link` as `target`, replacing an existing entry
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    let points_to = fs::read_link(link)?;

    if fs::symlink_metadata(target).is_ok() {
        fs::remove_file(target)?;
    }

    make_symlink(link, &points_to, target)
}

#[cfg(unix)]
fn make_symlink(_link: &Path, points_to: &Path, target: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(points_to, target)
}

#[cfg(windows)]
fn make_symlink(link: &Path, points_to: &Path, target: &Path) -> io::Result<()> {
    let resolved = match link.parent() {
        Some(parent) => parent.join(points_to),
        None => points_to.to_path_buf(),
    };
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(points_to, target)
    } else {
        std::os::windows::fs::symlink_file(points_to, target)
    }
}

#[cfg(not(any(unix, windows)))]
fn make_symlink(link: &Path, _points_to: &Path, target: &Path) -> io::Result<()> {
    fs::copy(link, target).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_kinds() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "a").unwrap();

        assert_eq!(inspect(&file).unwrap(), EntryKind::File);
        assert_eq!(inspect(temp.path()).unwrap(), EntryKind::Directory);
    }

    #[test]
    fn test_inspect_missing_is_access_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = inspect(&missing).unwrap_err();
        assert!(err.is_access());
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_duplicate_file_overwrites() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.txt");
        let dst = temp.path().join("dst.txt");
        fs::write(&src, b"new contents").unwrap();
        fs::write(&dst, b"old contents that are longer").unwrap();

        duplicate(Operation::Backup, &src, &dst, EntryKind::File).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"new contents");
    }

    #[test]
    fn test_duplicate_tree() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("project");
        fs::create_dir_all(src.join("nested").join("deep")).unwrap();
        fs::create_dir_all(src.join("empty")).unwrap();
        fs::write(src.join("top.txt"), "top").unwrap();
        fs::write(src.join("nested").join("deep").join("leaf.bin"), [0u8, 1, 2, 255]).unwrap();

        let dst = temp.path().join("copy").join("project");
        duplicate(Operation::Backup, &src, &dst, EntryKind::Directory).unwrap();

        assert_eq!(fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
        assert_eq!(
            fs::read(dst.join("nested").join("deep").join("leaf.bin")).unwrap(),
            vec![0u8, 1, 2, 255]
        );
        assert!(dst.join("empty").is_dir());
    }

    #[test]
    fn test_duplicate_tree_merges_into_existing() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(&dst).unwrap();
        fs::write(src.join("a.txt"), "fresh").unwrap();
        fs::write(dst.join("a.txt"), "stale").unwrap();
        fs::write(dst.join("extra.txt"), "kept").unwrap();

        duplicate(Operation::Restore, &src, &dst, EntryKind::Directory).unwrap();

        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "fresh");
        assert_eq!(fs::read_to_string(dst.join("extra.txt")).unwrap(), "kept");
    }

    #[cfg(unix)]
    #[test]
    fn test_duplicate_tree_keeps_symlinks() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("real.txt"), "real").unwrap();
        std::os::unix::fs::symlink("real.txt", src.join("link.txt")).unwrap();

        let dst = temp.path().join("dst");
        duplicate(Operation::Backup, &src, &dst, EntryKind::Directory).unwrap();

        let link = dst.join("link.txt");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_link(&link).unwrap(), Path::new("real.txt"));
        assert_eq!(fs::read_to_string(&link).unwrap(), "real");
    }

    #[test]
    fn test_duplicate_onto_itself_is_copy_error() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("same.txt");
        fs::write(&file, "keep me").unwrap();

        let err = duplicate(Operation::Restore, &file, &file, EntryKind::File).unwrap_err();
        assert!(err.is_copy());
        assert_eq!(fs::read_to_string(&file).unwrap(), "keep me");
    }

    #[test]
    fn test_duplicate_into_own_subdirectory_is_copy_error() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("dir");
        fs::create_dir_all(&src).unwrap();

        let err =
            duplicate(Operation::Backup, &src, &src.join("inner"), EntryKind::Directory).unwrap_err();
        assert!(err.is_copy());
        assert!(!src.join("inner").exists());
    }

    #[test]
    fn test_duplicate_into_own_subdirectory_through_dot_dot() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("dir");
        fs::create_dir_all(&src).unwrap();
        fs::create_dir_all(temp.path().join("other")).unwrap();

        let roundabout = temp.path().join("other").join("..").join("dir");
        let dst = src.join("inner");
        assert!(!dst.starts_with(&roundabout));

        let err = duplicate(Operation::Backup, &roundabout, &dst, EntryKind::Directory).unwrap_err();
        assert!(err.is_copy());
        assert!(!dst.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_duplicate_into_own_subdirectory_through_symlink() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("dir");
        fs::create_dir_all(&src).unwrap();
        std::os::unix::fs::symlink(&src, temp.path().join("alias")).unwrap();

        let dst = temp.path().join("alias").join("nested").join("copy");
        let err = duplicate(Operation::Backup, &src, &dst, EntryKind::Directory).unwrap_err();
        assert!(err.is_copy());
        assert!(!src.join("nested").exists());
    }

    #[test]
    fn test_duplicate_to_sibling_directory() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("dir");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("a.txt"), "a").unwrap();

        let dst = temp.path().join("dir.bak");
        duplicate(Operation::Backup, &src, &dst, EntryKind::Directory).unwrap();
        assert_eq!(fs::read_to_string(dst.join("a.txt")).unwrap(), "a");
    }

    #[test]
    fn test_copy_failure_is_copy_error() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src.txt");
        fs::write(&src, "x").unwrap();
        let dst = temp.path().join("no-such-dir").join("dst.txt");

        let err = duplicate(Operation::Backup, &src, &dst, EntryKind::File).unwrap_err();
        assert!(matches!(
            err,
            BackuperError::Copy {
                operation: Operation::Backup,
                ..
            }
        ));
    }
}
