//! Existence-gated paths and the binders that produce them.
//!
//! An [`ExistingDirectoryPath`] or [`ExistingFilePath`] records that the
//! entry existed, with the right kind, when it was checked. Nothing keeps it
//! that way: another process can delete or replace the entry between the
//! check and whatever the caller does next. The binders below check and then
//! act without any lock, so callers that race other writers need their own
//! synchronization (a lock file, for example).

use std::path::Path;

use tracing::debug;

use crate::either::attempt;
use crate::error::PathError;
use crate::fs::{EntryKind, FileSystem, StdFileSystem};
use crate::platform::Platform;
use crate::PathResult;

use super::{AbsoluteDirectoryPath, AbsoluteFilePath, FileName};

/// An absolute directory that existed when it was checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExistingDirectoryPath(AbsoluteDirectoryPath);

impl ExistingDirectoryPath {
    /// Checks that `dir` exists as a directory on `fs`.
    ///
    /// Fails with [`PathError::WrongKind`] if a file is there instead and
    /// with [`PathError::NotFound`] if nothing is.
    pub fn check<S: FileSystem + ?Sized>(dir: AbsoluteDirectoryPath, fs: &S) -> PathResult<Self> {
        match fs.entry_kind(Path::new(dir.trimmed_path())) {
            Some(EntryKind::Directory) => Ok(Self(dir)),
            Some(EntryKind::File) => Err(wrong_kind(dir.as_str(), EntryKind::Directory)),
            None => Err(PathError::NotFound {
                path: dir.as_str().to_string(),
                expected: EntryKind::Directory,
            }),
        }
    }

    /// The validated path.
    pub fn path(&self) -> &AbsoluteDirectoryPath {
        &self.0
    }

    /// Drops the existence guarantee.
    pub fn into_inner(self) -> AbsoluteDirectoryPath {
        self.0
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The last segment, or the whole path for a root.
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.0.platform()
    }
}

/// An absolute file that existed when it was checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExistingFilePath(AbsoluteFilePath);

impl ExistingFilePath {
    /// Checks that `file` exists as a regular file on `fs`.
    pub fn check<S: FileSystem + ?Sized>(file: AbsoluteFilePath, fs: &S) -> PathResult<Self> {
        match fs.entry_kind(Path::new(file.as_str())) {
            Some(EntryKind::File) => Ok(Self(file)),
            Some(EntryKind::Directory) => Err(wrong_kind(file.as_str(), EntryKind::File)),
            None => Err(PathError::NotFound {
                path: file.as_str().to_string(),
                expected: EntryKind::File,
            }),
        }
    }

    /// The validated path.
    pub fn path(&self) -> &AbsoluteFilePath {
        &self.0
    }

    /// Drops the existence guarantee.
    pub fn into_inner(self) -> AbsoluteFilePath {
        self.0
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The directory holding this file.
    pub fn directory(&self) -> &AbsoluteDirectoryPath {
        self.0.directory()
    }

    /// The file's name.
    pub fn name(&self) -> &FileName {
        self.0.name()
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.0.platform()
    }
}

impl AbsoluteDirectoryPath {
    /// Ensures this directory exists on the real filesystem, creating it if
    /// needed, then runs `f` with it.
    ///
    /// See [`AbsoluteDirectoryPath::bind_existing_or_created_with`].
    pub fn bind_existing_or_created<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(ExistingDirectoryPath) -> Result<T, E>,
        E: From<PathError>,
    {
        self.bind_existing_or_created_with(&StdFileSystem, f)
    }

    /// Ensures this directory exists on `fs`, creating it and any missing
    /// ancestors, then runs `f` with it.
    ///
    /// Fails with [`PathError::WrongKind`] if a file occupies the path and
    /// with [`PathError::Io`] if creation fails. A panic inside `f` comes
    /// back as [`PathError::CallbackPanicked`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathguard::{AbsoluteDirectoryPath, MemoryFileSystem, PathError, Platform};
    ///
    /// let fs = MemoryFileSystem::new();
    /// let dir = AbsoluteDirectoryPath::create_for(Platform::Posix, "/data/cache/").unwrap();
    ///
    /// let name = dir
    ///     .bind_existing_or_created_with(&fs, |existing| {
    ///         Ok::<_, PathError>(existing.name().to_string())
    ///     })
    ///     .unwrap();
    /// assert_eq!(name, "cache");
    /// ```
    pub fn bind_existing_or_created_with<S, T, E, F>(&self, fs: &S, f: F) -> Result<T, E>
    where
        S: FileSystem + ?Sized,
        F: FnOnce(ExistingDirectoryPath) -> Result<T, E>,
        E: From<PathError>,
    {
        let path = Path::new(self.trimmed_path());
        if fs.is_file(path) {
            debug!(path = %self, "refusing to create directory over a file");
            return Err(wrong_kind(self.as_str(), EntryKind::Directory).into());
        }
        fs.create_dir_all(path).map_err(|err| {
            debug!(path = %self, error = %err, "directory creation failed");
            PathError::io(self.as_str(), &err)
        })?;
        debug!(path = %self, "directory ready");
        let existing = ExistingDirectoryPath(self.clone());
        attempt(|| f(existing))
    }

    /// Runs `f` if this directory exists on the real filesystem.
    ///
    /// See [`AbsoluteDirectoryPath::bind_existing_with`].
    pub fn bind_existing<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(ExistingDirectoryPath) -> Result<T, E>,
        E: From<PathError>,
    {
        self.bind_existing_with(&StdFileSystem, f)
    }

    /// Runs `f` if this directory exists on `fs`.
    ///
    /// Fails with [`PathError::WrongKind`] if a file occupies the path and
    /// with [`PathError::NotFound`] if nothing does.
    pub fn bind_existing_with<S, T, E, F>(&self, fs: &S, f: F) -> Result<T, E>
    where
        S: FileSystem + ?Sized,
        F: FnOnce(ExistingDirectoryPath) -> Result<T, E>,
        E: From<PathError>,
    {
        let existing = ExistingDirectoryPath::check(self.clone(), fs).map_err(|err| {
            debug!(path = %self, code = err.code(), "directory check failed");
            err
        })?;
        attempt(|| f(existing))
    }
}

impl AbsoluteFilePath {
    /// Runs `f` if this file exists on the real filesystem.
    ///
    /// See [`AbsoluteFilePath::bind_existing_file_with`].
    pub fn bind_existing_file<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(ExistingFilePath) -> Result<T, E>,
        E: From<PathError>,
    {
        self.bind_existing_file_with(&StdFileSystem, f)
    }

    /// Runs `f` if this file exists on `fs`.
    ///
    /// Fails with [`PathError::WrongKind`] if a directory occupies the path
    /// and with [`PathError::NotFound`] if nothing does.
    pub fn bind_existing_file_with<S, T, E, F>(&self, fs: &S, f: F) -> Result<T, E>
    where
        S: FileSystem + ?Sized,
        F: FnOnce(ExistingFilePath) -> Result<T, E>,
        E: From<PathError>,
    {
        let existing = ExistingFilePath::check(self.clone(), fs).map_err(|err| {
            debug!(path = %self, code = err.code(), "file check failed");
            err
        })?;
        attempt(|| f(existing))
    }
}

fn wrong_kind(path: &str, expected: EntryKind) -> PathError {
    let found = match expected {
        EntryKind::File => EntryKind::Directory,
        EntryKind::Directory => EntryKind::File,
    };
    PathError::WrongKind {
        path: path.to_string(),
        expected,
        found,
    }
}
