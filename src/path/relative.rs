//! Unrooted paths.

use crate::error::PathError;
use crate::platform::Platform;
use crate::string::NonEmptyString;
use crate::PathResult;

use super::absolute::with_trailing_separator;
use super::{FileName, NonEmptyPathString, NonSneakyPath};

/// An unrooted, non-sneaky path to either a directory or a file.
///
/// # Example
///
/// ```rust
/// use pathguard::{PathError, Platform, RelativePath};
///
/// let path = RelativePath::create_for(Platform::Posix, "assets/img/").unwrap();
/// assert!(path.is_directory());
///
/// assert!(matches!(
///     RelativePath::create_for(Platform::Posix, "/abs/path"),
///     Err(PathError::IsRooted { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelativePath {
    /// The path ends in a separator.
    Directory(RelativeDirectoryPath),
    /// The path does not end in a separator.
    File(RelativeFilePath),
}

impl RelativePath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        NonSneakyPath::create_for(platform, raw).and_then(Self::from_non_sneaky)
    }

    /// Refines a [`NonSneakyPath`], rejecting rooted input and dispatching
    /// on the trailing separator.
    pub fn from_non_sneaky(path: NonSneakyPath) -> PathResult<Self> {
        ensure_relative(&path)?;
        if path.is_directory() {
            RelativeDirectoryPath::from_non_sneaky(path).map(RelativePath::Directory)
        } else {
            RelativeFilePath::from_non_sneaky(path).map(RelativePath::File)
        }
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        match self {
            RelativePath::Directory(dir) => dir.as_str(),
            RelativePath::File(file) => file.as_str(),
        }
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        match self {
            RelativePath::Directory(dir) => dir.platform(),
            RelativePath::File(file) => file.platform(),
        }
    }

    /// Returns true for [`RelativePath::Directory`].
    pub fn is_directory(&self) -> bool {
        matches!(self, RelativePath::Directory(_))
    }

    /// Returns true for [`RelativePath::File`].
    pub fn is_file(&self) -> bool {
        matches!(self, RelativePath::File(_))
    }

    /// The directory, if this is one.
    pub fn as_directory(&self) -> Option<&RelativeDirectoryPath> {
        match self {
            RelativePath::Directory(dir) => Some(dir),
            RelativePath::File(_) => None,
        }
    }

    /// The file, if this is one.
    pub fn as_file(&self) -> Option<&RelativeFilePath> {
        match self {
            RelativePath::Directory(_) => None,
            RelativePath::File(file) => Some(file),
        }
    }
}

impl From<RelativeDirectoryPath> for RelativePath {
    fn from(dir: RelativeDirectoryPath) -> Self {
        RelativePath::Directory(dir)
    }
}

impl From<RelativeFilePath> for RelativePath {
    fn from(file: RelativeFilePath) -> Self {
        RelativePath::File(file)
    }
}

/// An unrooted, non-sneaky path ending in a separator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeDirectoryPath {
    path: NonSneakyPath,
    name: NonEmptyString,
}

impl RelativeDirectoryPath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        let path = NonSneakyPath::create_for(platform, raw)?;
        ensure_relative(&path)?;
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

    fn from_trusted(path: NonSneakyPath) -> Self {
        // a relative directory has no root, so its trimmed form always keeps
        // at least one non-separator character
        let name = path.path_string().file_name().to_string();
        Self {
            name: NonEmptyString::new_unchecked(name),
            path,
        }
    }

    /// The path exactly as given, including its trailing separator.
    pub fn as_str(&self) -> &str {
        self.path.as_str()
    }

    /// The path without trailing separators.
    pub fn trimmed_path(&self) -> &str {
        self.path.trimmed_path()
    }

    /// The last segment.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.path.platform()
    }

    /// Appends another relative directory.
    ///
    /// Always succeeds when both sides share a platform; a path from the
    /// other platform is re-validated under this one's rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathguard::{Platform, RelativeDirectoryPath};
    ///
    /// let a = RelativeDirectoryPath::create_for(Platform::Posix, "a/").unwrap();
    /// let b = RelativeDirectoryPath::create_for(Platform::Posix, "b/c/").unwrap();
    /// assert_eq!(a.combine(&b).unwrap().as_str(), "a/b/c/");
    /// ```
    pub fn combine(&self, other: &RelativeDirectoryPath) -> PathResult<RelativeDirectoryPath> {
        let suffix = NonEmptyString::new_unchecked(other.as_str().to_string());
        let combined = self.path.path_string().combine(&suffix);
        if other.platform() == self.platform() {
            Ok(Self::from_trusted(NonSneakyPath::from_trusted(combined)))
        } else {
            Self::create_for(self.platform(), combined.as_str())
        }
    }

    /// Appends a relative file, re-validating the result in full.
    pub fn combine_file(&self, other: &RelativeFilePath) -> PathResult<RelativeFilePath> {
        let suffix = NonEmptyString::new_unchecked(other.as_str().to_string());
        let combined = self.path.path_string().combine(&suffix);
        RelativeFilePath::create_for(self.platform(), combined.as_str())
    }

    /// The directory containing this one, or `None` for a single segment.
    pub fn parent(&self) -> Option<RelativeDirectoryPath> {
        let platform = self.platform();
        platform
            .directory_name(self.trimmed_path())
            .filter(|parent| !parent.is_empty())
            .map(|parent| {
                Self::from_trusted(NonSneakyPath::from_trusted(
                    NonEmptyPathString::from_checked(
                        platform,
                        with_trailing_separator(platform, parent),
                    ),
                ))
            })
    }
}

/// An unrooted, non-sneaky path not ending in a separator.
///
/// A bare `name.ext` has no directory part.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeFilePath {
    path: NonSneakyPath,
    directory: Option<RelativeDirectoryPath>,
    name: FileName,
}

impl RelativeFilePath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        let path = NonSneakyPath::create_for(platform, raw)?;
        ensure_relative(&path)?;
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
            Some(dir) if !dir.is_empty() => Some(RelativeDirectoryPath::create_for(
                platform,
                &with_trailing_separator(platform, dir),
            )?),
            _ => None,
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

    /// The directory part, if the path has more than one segment.
    pub fn directory(&self) -> Option<&RelativeDirectoryPath> {
        self.directory.as_ref()
    }

    /// The file's name.
    pub fn name(&self) -> &FileName {
        &self.name
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.path.platform()
    }
}

fn ensure_relative(path: &NonSneakyPath) -> PathResult<()> {
    if path.is_rooted() {
        Err(PathError::IsRooted {
            path: path.as_str().to_string(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_dir(raw: &str) -> RelativeDirectoryPath {
        RelativeDirectoryPath::create_for(Platform::Posix, raw).unwrap()
    }

    #[test]
    fn test_rooted_rejected() {
        assert!(matches!(
            RelativeDirectoryPath::create_for(Platform::Posix, "/a/"),
            Err(PathError::IsRooted { .. })
        ));
        assert!(matches!(
            RelativeFilePath::create_for(Platform::Windows, r"C:\a.txt"),
            Err(PathError::IsRooted { .. })
        ));
        assert!(matches!(
            RelativeFilePath::create_for(Platform::Windows, r"\a.txt"),
            Err(PathError::IsRooted { .. })
        ));
    }

    #[test]
    fn test_directory_names() {
        assert_eq!(rel_dir("a/b/").name(), "b");
        assert_eq!(rel_dir("a//").name(), "a");
        assert_eq!(rel_dir("./").name(), ".");
    }

    #[test]
    fn test_file_without_directory() {
        let file = RelativeFilePath::create_for(Platform::Posix, "notes.md").unwrap();
        assert!(file.directory().is_none());
        assert_eq!(file.name().as_str(), "notes.md");
    }

    #[test]
    fn test_file_with_directory() {
        let file = RelativeFilePath::create_for(Platform::Posix, "docs/api/index.md").unwrap();
        assert_eq!(file.directory().unwrap().as_str(), "docs/api/");
        assert_eq!(file.directory().unwrap().name(), "api");
    }

    #[test]
    fn test_combine() {
        let combined = rel_dir("a/").combine(&rel_dir("b/")).unwrap();
        assert_eq!(combined.as_str(), "a/b/");
        assert_eq!(combined.name(), "b");

        let file = RelativeFilePath::create_for(Platform::Posix, "c.txt").unwrap();
        let combined = rel_dir("a/b/").combine_file(&file).unwrap();
        assert_eq!(combined.as_str(), "a/b/c.txt");
        assert_eq!(combined.directory().unwrap().as_str(), "a/b/");
    }

    #[test]
    fn test_combine_across_platforms_revalidates() {
        let windows = RelativeDirectoryPath::create_for(Platform::Windows, r"a\").unwrap();
        let posix = rel_dir(r"b\..\..\c/");
        assert!(matches!(
            windows.combine(&posix),
            Err(PathError::SneakyTraversal { .. })
        ));

        let backslashed = RelativeDirectoryPath::create_for(Platform::Windows, r"b\").unwrap();
        assert!(matches!(
            rel_dir("a/").combine(&backslashed),
            Err(PathError::ExpectedDirectory { .. })
        ));
    }

    #[test]
    fn test_parent() {
        assert_eq!(rel_dir("a/b/c/").parent().unwrap().as_str(), "a/b/");
        assert!(rel_dir("a/").parent().is_none());
    }

    #[test]
    fn test_kind_mismatch() {
        assert!(matches!(
            RelativeDirectoryPath::create_for(Platform::Posix, "a"),
            Err(PathError::ExpectedDirectory { .. })
        ));
        assert!(matches!(
            RelativeFilePath::create_for(Platform::Posix, "a/"),
            Err(PathError::ExpectedFile { .. })
        ));
    }
}
