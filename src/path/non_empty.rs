//! The first two rungs of the path ladder: any path, and any path without
//! `..` traversal.

use std::fmt::{self, Display};

use crate::either::Either;
use crate::error::PathError;
use crate::platform::Platform;
use crate::string::{NonEmptyString, SomeString};
use crate::PathResult;

use super::sneaky::contains_parent_segment;
use super::{AbsolutePath, NonEmptyPathString, RelativePath};

/// A parsed path that knows whether it names a directory.
///
/// A path names a directory exactly when it ends in a separator; `/tmp/`
/// is a directory, `/tmp` is a file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyPath {
    inner: NonEmptyPathString,
    is_directory: bool,
}

impl NonEmptyPath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`: not empty, not whitespace-only, no
    /// forbidden characters.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        let raw = SomeString::create(raw)?;
        Self::parse(platform, raw.as_non_empty())
    }

    /// Parses an already non-empty string.
    pub fn parse(platform: Platform, raw: &NonEmptyString) -> PathResult<Self> {
        NonEmptyPathString::parse(platform, raw).map(Self::from_path_string)
    }

    pub(crate) fn from_path_string(inner: NonEmptyPathString) -> Self {
        let is_directory = inner.ends_in_directory_separator();
        Self {
            inner,
            is_directory,
        }
    }

    /// Returns true if the path ends in a directory separator.
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The parsed form.
    pub fn path_string(&self) -> &NonEmptyPathString {
        &self.inner
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.inner.platform()
    }
}

/// A path with no `..` segment.
///
/// # Example
///
/// ```rust
/// use pathguard::{NonSneakyPath, PathError, Platform};
///
/// assert!(NonSneakyPath::create_for(Platform::Posix, "/srv/www/").is_ok());
/// assert!(matches!(
///     NonSneakyPath::create_for(Platform::Posix, "/srv/../etc/"),
///     Err(PathError::SneakyTraversal { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonSneakyPath(NonEmptyPath);

impl NonSneakyPath {
    /// Validates `raw` for the native platform.
    pub fn create(raw: &str) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: &str) -> PathResult<Self> {
        NonEmptyPath::create_for(platform, raw).and_then(Self::from_path)
    }

    /// Refines a [`NonEmptyPath`], rejecting `..` traversal.
    pub fn from_path(path: NonEmptyPath) -> PathResult<Self> {
        if contains_parent_segment(path.platform(), path.as_str()) {
            Err(PathError::SneakyTraversal {
                path: path.as_str().to_string(),
            })
        } else {
            Ok(Self(path))
        }
    }

    /// Wraps a path string built from already non-sneaky pieces.
    pub(crate) fn from_trusted(inner: NonEmptyPathString) -> Self {
        Self(NonEmptyPath::from_path_string(inner))
    }

    /// Returns true if the path has a root.
    pub fn is_rooted(&self) -> bool {
        self.0.path_string().is_rooted()
    }

    /// Returns true if the path ends in a directory separator.
    pub fn is_directory(&self) -> bool {
        self.0.is_directory()
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The path without trailing separators, unless it is a bare root.
    pub fn trimmed_path(&self) -> &str {
        self.0.path_string().trimmed_path()
    }

    /// The parsed form.
    pub fn path_string(&self) -> &NonEmptyPathString {
        self.0.path_string()
    }

    /// The platform this path was validated for.
    pub fn platform(&self) -> Platform {
        self.0.platform()
    }

    /// Splits into relative (`Left`) or absolute (`Right`).
    ///
    /// Exactly one side holds for any path; classification then validates
    /// the leaf, so it can still fail (e.g. a file name with a forbidden
    /// character).
    pub fn classify(self) -> PathResult<Either<RelativePath, AbsolutePath>> {
        if self.is_rooted() {
            AbsolutePath::from_non_sneaky(self).map(Either::Right)
        } else {
            RelativePath::from_non_sneaky(self).map(Either::Left)
        }
    }
}

impl Display for NonEmptyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for NonSneakyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_flag() {
        let dir = NonEmptyPath::create_for(Platform::Posix, "a/b/").unwrap();
        assert!(dir.is_directory());
        let file = NonEmptyPath::create_for(Platform::Posix, "a/b").unwrap();
        assert!(!file.is_directory());

        let dir = NonEmptyPath::create_for(Platform::Windows, "a/b/").unwrap();
        assert!(dir.is_directory());
        let dir = NonEmptyPath::create_for(Platform::Windows, r"a\b\").unwrap();
        assert!(dir.is_directory());
    }

    #[test]
    fn test_rejects_whitespace_before_parsing() {
        assert_eq!(
            NonEmptyPath::create_for(Platform::Posix, " "),
            Err(PathError::WhitespaceOnlyInput)
        );
        assert_eq!(
            NonEmptyPath::create_for(Platform::Posix, ""),
            Err(PathError::NullOrEmptyInput)
        );
    }

    #[test]
    fn test_sneaky_rejected() {
        for raw in ["..", "../a", "a/..", "a/../b", "/a/../"] {
            assert!(
                matches!(
                    NonSneakyPath::create_for(Platform::Posix, raw),
                    Err(PathError::SneakyTraversal { .. })
                ),
                "{raw}"
            );
        }
    }

    #[test]
    fn test_classify() {
        let abs = NonSneakyPath::create_for(Platform::Posix, "/a/b").unwrap();
        assert!(abs.classify().unwrap().is_right());

        let rel = NonSneakyPath::create_for(Platform::Posix, "a/b/").unwrap();
        assert!(rel.classify().unwrap().is_left());
    }
}
