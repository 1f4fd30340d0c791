//! Filesystem access for the existence-gated types.
//!
//! Everything that touches the disk goes through [`FileSystem`], so binders
//! can run against the real filesystem ([`StdFileSystem`]) or an in-memory
//! one ([`MemoryFileSystem`]) in tests and dry runs.

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

/// The two kinds of entry the existence checks distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => f.write_str("file"),
            EntryKind::Directory => f.write_str("directory"),
        }
    }
}

/// Abstraction for the filesystem operations the binders need.
///
/// Implementations must be shareable across threads; none of the methods
/// take `&mut self`.
pub trait FileSystem: Send + Sync {
    /// Returns true if `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns true if `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates `path` and any missing ancestors. Succeeds if the directory
    /// already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// The kind of entry at `path`, if any.
    fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        if self.is_dir(path) {
            Some(EntryKind::Directory)
        } else if self.is_file(path) {
            Some(EntryKind::File)
        } else {
            None
        }
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }
}

/// The real filesystem, via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

/// An in-memory filesystem.
///
/// Entries are keyed by [`PathBuf`], so `/a/b/` and `/a/b` name the same
/// entry. Adding an entry registers its ancestors as directories.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use pathguard::{FileSystem, MemoryFileSystem};
///
/// let fs = MemoryFileSystem::new();
/// fs.add_file("/srv/www/index.html");
///
/// assert!(fs.is_dir(Path::new("/srv/www")));
/// assert!(fs.is_file(Path::new("/srv/www/index.html")));
/// assert!(fs.create_dir_all(Path::new("/srv/www/index.html/x")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: RwLock<HashMap<PathBuf, EntryKind>>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a regular file, creating its ancestors as directories.
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut entries = self.entries.write();
        if let Some(parent) = path.parent() {
            insert_dirs(&mut entries, parent);
        }
        entries.insert(path.to_path_buf(), EntryKind::File);
    }

    /// Adds a directory and its ancestors.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        insert_dirs(&mut self.entries.write(), path.as_ref());
    }

    /// Number of entries, ancestors included.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.entries.read().get(path) == Some(&EntryKind::File)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entries.read().get(path) == Some(&EntryKind::Directory)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut entries = self.entries.write();
        if let Some(file) = path
            .ancestors()
            .find(|ancestor| entries.get(*ancestor) == Some(&EntryKind::File))
        {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", file.display()),
            ));
        }
        insert_dirs(&mut entries, path);
        Ok(())
    }
}

fn insert_dirs(entries: &mut HashMap<PathBuf, EntryKind>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        entries
            .entry(ancestor.to_path_buf())
            .or_insert(EntryKind::Directory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_display() {
        assert_eq!(EntryKind::File.to_string(), "file");
        assert_eq!(EntryKind::Directory.to_string(), "directory");
    }

    #[test]
    fn test_memory_ancestors_are_directories() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/a/b/c.txt");
        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a/b/")));
        assert!(fs.is_file(Path::new("/a/b/c.txt")));
        assert!(!fs.is_dir(Path::new("/a/b/c.txt")));
        assert_eq!(fs.entry_kind(Path::new("/a/b/c.txt")), Some(EntryKind::File));
        assert_eq!(fs.entry_kind(Path::new("/nope")), None);
    }

    #[test]
    fn test_memory_create_dir_all_is_idempotent() {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all(Path::new("/x/y")).unwrap();
        let count = fs.len();
        fs.create_dir_all(Path::new("/x/y/")).unwrap();
        assert_eq!(fs.len(), count);
        assert!(fs.is_dir(Path::new("/x/y")));
    }

    #[test]
    fn test_memory_create_under_file_fails() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/x/file");
        let err = fs.create_dir_all(Path::new("/x/file/sub")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert!(!fs.is_dir(Path::new("/x/file/sub")));
    }

    #[test]
    fn test_std_filesystem() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("one/two");
        let fs = StdFileSystem;
        assert!(!fs.is_dir(&nested));
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.is_dir(&nested));
        assert!(!fs.is_file(&nested));
    }
}
