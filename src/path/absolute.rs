//! Rooted paths.
//!
//! An [`AbsolutePath`] is a non-sneaky path with a root. It is either an
//! [`AbsoluteDirectoryPath`] (ends in a separator) or an [`AbsoluteFilePath`]
//! (does not), decided once at construction.

use crate::error::PathError;
use crate::platform::Platform;
use crate::string::NonEmptyString;
use crate::PathResult;

use super::{FileName, NonEmptyPathString, NonSneakyPath, RelativeDirectoryPath, RelativeFilePath};

/// A rooted, non-sneaky path to either a directory or a file.
///
/// # Example
///
/// ```rust
/// use pathguard::{AbsolutePath, PathError, Platform};
///
/// let path = AbsolutePath::create_for(Platform::Posix, "/home/user/file.txt").unwrap();
/// let file = path.as_file().unwrap();
/// assert_eq!(file.directory().as_str(), "/home/user/");
/// assert_eq!(file.name().as_str(), "file.txt");
///
/// assert!(matches!(
///     AbsolutePath::create_for(Platform::Posix, "/home/../etc/passwd"),
///     Err(PathError::SneakyTraversal { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbsolutePath {
    /// The path ends in a separator.
    Directory(AbsoluteDirectoryPath),
    /// The path does not end in a separator.
    File(AbsoluteFilePath),
}

impl AbsolutePath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        NonSneakyPath::create_for(platform, raw).and_then(Self::from_non_sneaky)
    }

    /// Refines a [`NonSneakyPath`], rejecting relative input and dispatching
    /// on the trailing separator.
    pub fn from_non_sneaky(path: NonSneakyPath) -> PathResult<Self> {
        ensure_rooted(&path)?;
        if path.is_directory() {
            AbsoluteDirectoryPath::from_non_sneaky(path).map(AbsolutePath::Directory)
        } else {
            AbsoluteFilePath::from_non_sneaky(path).map(AbsolutePath::File)
        }
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        self.non_sneaky().as_str()
    }

    /// The path without trailing separators, unless it is a bare root.
    pub fn trimmed_path(&self) -> &str {
        self.non_sneaky().trimmed_path()
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.non_sneaky().platform()
    }

    /// Returns true for [`AbsolutePath::Directory`].
    pub fn is_directory(&self) -> bool {
        matches!(self, AbsolutePath::Directory(_))
    }

    /// Returns true for [`AbsolutePath::File`].
    pub fn is_file(&self) -> bool {
        matches!(self, AbsolutePath::File(_))
    }

    /// The directory, if this is one.
    pub fn as_directory(&self) -> Option<&AbsoluteDirectoryPath> {
        match self {
            AbsolutePath::Directory(dir) => Some(dir),
            AbsolutePath::File(_) => None,
        }
    }

    /// The file, if this is one.
    pub fn as_file(&self) -> Option<&AbsoluteFilePath> {
        match self {
            AbsolutePath::Directory(_) => None,
            AbsolutePath::File(file) => Some(file),
        }
    }

    /// The last segment; the whole path for a root directory.
    pub fn name(&self) -> &str {
        match self {
            AbsolutePath::Directory(dir) => dir.name(),
            AbsolutePath::File(file) => file.name().as_str(),
        }
    }

    /// The directory containing this path.
    ///
    /// Fails with [`PathError::NoDirectoryOrFileSegment`] for a root.
    pub fn parent(&self) -> PathResult<AbsoluteDirectoryPath> {
        match self {
            AbsolutePath::Directory(dir) => dir.parent(),
            AbsolutePath::File(file) => Ok(file.parent()),
        }
    }

    fn non_sneaky(&self) -> &NonSneakyPath {
        match self {
            AbsolutePath::Directory(dir) => &dir.path,
            AbsolutePath::File(file) => &file.path,
        }
    }
}

impl From<AbsoluteDirectoryPath> for AbsolutePath {
    fn from(dir: AbsoluteDirectoryPath) -> Self {
        AbsolutePath::Directory(dir)
    }
}

impl From<AbsoluteFilePath> for AbsolutePath {
    fn from(file: AbsoluteFilePath) -> Self {
        AbsolutePath::File(file)
    }
}

/// A rooted, non-sneaky path ending in a separator.
///
/// A bare root (`/`, `C:\`, `\\server\share\`) is a directory whose name is
/// the root itself.
///
/// # Example
///
/// ```rust
/// use pathguard::{AbsoluteDirectoryPath, Platform};
///
/// let root = AbsoluteDirectoryPath::create_for(Platform::Posix, "/").unwrap();
/// assert!(root.is_root());
/// assert_eq!(root.name(), "/");
///
/// let logs = AbsoluteDirectoryPath::create_for(Platform::Posix, "/var/log/").unwrap();
/// assert!(!logs.is_root());
/// assert_eq!(logs.name(), "log");
/// assert_eq!(logs.parent().unwrap().as_str(), "/var/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsoluteDirectoryPath {
    path: NonSneakyPath,
    name: NonEmptyString,
    is_root: bool,
}

impl AbsoluteDirectoryPath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        let path = NonSneakyPath::create_for(platform, raw)?;
        ensure_rooted(&path)?;
        Self::from_non_sneaky(path)
    }

    fn from_non_sneaky(path: NonSneakyPath) -> PathResult<Self> {
        if path.is_directory() {
            Ok(Self::from_trusted(path))
        } else {
            Err(PathError::ExpectedDirectory {
                path: path.as_str().to_string(),
            })
        }
    }

    /// Builds from a rooted path already known to end in a separator.
    fn from_trusted(path: NonSneakyPath) -> Self {
        let file_name = path.path_string().file_name();
        let (name, is_root) = if file_name.is_empty() {
            (path.as_str().to_string(), true)
        } else {
            (file_name.to_string(), false)
        };
        Self {
            name: NonEmptyString::new_unchecked(name),
            is_root,
            path,
        }
    }

    fn from_path_string(path: NonEmptyPathString) -> Self {
        Self::from_trusted(NonSneakyPath::from_trusted(path))
    }

    /// The path exactly as given, including its trailing separator.
    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }

    /// The path without trailing separators, unless it is a bare root.
    pub fn trimmed_path(&self) -> &str {
        self.path.trimmed_path()
    }

    /// The last segment, or the whole path for a root.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns true if this is a filesystem root.
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.path.platform()
    }

    /// Appends a relative directory.
    ///
    /// Always succeeds when both sides were validated for the same platform.
    /// Otherwise the joined path is re-validated for this path's platform.
    pub fn combine(
        &self,
        relative: &RelativeDirectoryPath,
    ) -> PathResult<AbsoluteDirectoryPath> {
        let suffix = NonEmptyString::new_unchecked(relative.as_str().to_string());
        let combined = self.path.path_string().combine(&suffix);
        if relative.platform() == self.platform() {
            Ok(Self::from_path_string(combined))
        } else {
            Self::create_for(self.platform(), combined.as_str())
        }
    }

    /// Appends a relative file, re-validating the result in full.
    pub fn combine_file(&self, relative: &RelativeFilePath) -> PathResult<AbsoluteFilePath> {
        let suffix = NonEmptyString::new_unchecked(relative.as_str().to_string());
        let combined = self.path.path_string().combine(&suffix);
        AbsoluteFilePath::create_for(self.platform(), combined.as_str())
    }

    /// The directory containing this one.
    ///
    /// A root has no parent and fails with
    /// [`PathError::NoDirectoryOrFileSegment`].
    pub fn parent(&self) -> PathResult<AbsoluteDirectoryPath> {
        let platform = self.platform();
        match platform.directory_name(self.trimmed_path()) {
            Some(parent) if !self.is_root && !parent.is_empty() => {
                Ok(Self::from_path_string(NonEmptyPathString::from_checked(
                    platform,
                    with_trailing_separator(platform, parent),
                )))
            }
            _ => Err(PathError::NoDirectoryOrFileSegment {
                path: self.as_str().to_string(),
            }),
        }
    }

    /// Returns true if `other` is this directory or lies beneath it.
    ///
    /// Segments are compared under the platform's case rule, and either
    /// separator matches either separator. Paths validated for another
    /// platform are never contained.
    pub fn contains(&self, other: &AbsolutePath) -> bool {
        let platform = self.platform();
        if other.platform() != platform {
            return false;
        }
        let own_root = self.path.path_string().root();
        let other_root = other.non_sneaky().path_string().root();
        if !roots_equal(platform, own_root, other_root) {
            return false;
        }
        let (Some(own_rest), Some(other_rest)) = (
            self.trimmed_path().get(own_root.len()..),
            other.trimmed_path().get(other_root.len()..),
        ) else {
            return false;
        };
        let mut own = segments(platform, own_rest);
        let mut theirs = segments(platform, other_rest);
        loop {
            match (own.next(), theirs.next()) {
                (None, _) => return true,
                (Some(_), None) => return false,
                (Some(a), Some(b)) if platform.paths_equal(a, b) => continue,
                _ => return false,
            }
        }
    }
}

/// A rooted, non-sneaky path not ending in a separator.
///
/// It always has a parent directory and a valid [`FileName`] leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsoluteFilePath {
    path: NonSneakyPath,
    directory: AbsoluteDirectoryPath,
    name: FileName,
}

impl AbsoluteFilePath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        let path = NonSneakyPath::create_for(platform, raw)?;
        ensure_rooted(&path)?;
        Self::from_non_sneaky(path)
    }

    fn from_non_sneaky(path: NonSneakyPath) -> PathResult<Self> {
        if path.is_directory() {
            return Err(PathError::ExpectedFile {
                path: path.as_str().to_string(),
            });
        }
        let platform = path.platform();
        let directory = match platform.directory_name(path.as_str()) {
            Some(dir) if !dir.is_empty() => AbsoluteDirectoryPath::create_for(
                platform,
                &with_trailing_separator(platform, dir),
            )?,
            _ => {
                return Err(PathError::NoDirectoryOrFileSegment {
                    path: path.as_str().to_string(),
                })
            }
        };
        let name = FileName::parse_for(platform, platform.file_name(path.as_str()))?;
        Ok(Self {
            path,
            directory,
            name,
        })
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }

    /// The directory holding this file.
    pub fn directory(&self) -> &AbsoluteDirectoryPath {
        &self.directory
    }

    /// The file's name.
    pub fn name(&self) -> &FileName {
        &self.name
    }

    /// An owned copy of [`AbsoluteFilePath::directory`]. Never fails: a
    /// file always has a directory.
    pub fn parent(&self) -> AbsoluteDirectoryPath {
        self.directory.clone()
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.path.platform()
    }

    /// Replaces the file name, keeping the directory.
    pub fn with_name(&self, name: &FileName) -> PathResult<AbsoluteFilePath> {
        let combined = self.directory.path.path_string().combine(
            &NonEmptyString::new_unchecked(name.as_str().to_string()),
        );
        Self::create_for(self.platform(), combined.as_str())
    }
}

fn ensure_rooted(path: &NonSneakyPath) -> PathResult<()> {
    if path.is_rooted() {
        Ok(())
    } else {
        Err(PathError::NotRooted {
            path: path.as_str().to_string(),
        })
    }
}

pub(crate) fn with_trailing_separator(platform: Platform, dir: &str) -> String {
    let mut owned = dir.to_string();
    if !platform.ends_in_separator(dir) {
        owned.push(platform.separator());
    }
    owned
}

fn roots_equal(platform: Platform, a: &str, b: &str) -> bool {
    let normalize = |root: &str| -> String {
        root.chars()
            .map(|c| if platform.is_separator(c) { platform.separator() } else { c })
            .collect()
    };
    platform.paths_equal(&normalize(a), &normalize(b))
}

fn segments(platform: Platform, path: &str) -> impl Iterator<Item = &str> {
    path.split(move |c: char| platform.is_separator(c))
        .filter(|s| !s.is_empty())
}
