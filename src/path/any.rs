//! The path counterpart of [`StringKind`](crate::StringKind).

use crate::either::Either;
use crate::platform::Platform;
use crate::PathResult;

use super::{AbsolutePath, NonSneakyPath, RelativePath};

/// Any optional path input, classified.
///
/// Absent and empty input is [`AnyPath::Empty`]; everything else must pass
/// the full ladder and lands on exactly one of the other two variants.
///
/// # Example
///
/// ```rust
/// use pathguard::{AnyPath, Platform};
///
/// assert!(AnyPath::create_for(Platform::Posix, None).unwrap().is_empty());
/// assert!(AnyPath::create_for(Platform::Posix, Some("")).unwrap().is_empty());
/// assert!(AnyPath::create_for(Platform::Posix, Some("/etc/hosts")).unwrap().is_absolute());
/// assert!(AnyPath::create_for(Platform::Posix, Some("src/")).unwrap().is_relative());
/// assert!(AnyPath::create_for(Platform::Posix, Some("  ")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum AnyPath {
    /// No path was given.
    #[default]
    Empty,
    /// A rooted path.
    Absolute(AbsolutePath),
    /// An unrooted path.
    Relative(RelativePath),
}

impl AnyPath {
    /// Classifies `raw` for the native platform.
    pub fn create(raw: Option<&str>) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Classifies `raw` for `platform`.
    pub fn create_for(platform: Platform, raw: Option<&str>) -> PathResult<Self> {
        match raw {
            None | Some("") => Ok(AnyPath::Empty),
            Some(raw) => NonSneakyPath::create_for(platform, raw)?
                .classify()
                .map(|side| side.fold(AnyPath::Relative, AnyPath::Absolute)),
        }
    }

    /// Returns true for [`AnyPath::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, AnyPath::Empty)
    }

    /// Returns true for [`AnyPath::Absolute`].
    pub fn is_absolute(&self) -> bool {
        matches!(self, AnyPath::Absolute(_))
    }

    /// Returns true for [`AnyPath::Relative`].
    pub fn is_relative(&self) -> bool {
        matches!(self, AnyPath::Relative(_))
    }

    /// The path as given; empty for [`AnyPath::Empty`].
    pub fn as_str(&self) -> &str {
        match self {
            AnyPath::Empty => "",
            AnyPath::Absolute(path) => path.as_str(),
            AnyPath::Relative(path) => path.as_str(),
        }
    }

    /// The non-empty side, as an [`Either`].
    pub fn into_either(self) -> Option<Either<RelativePath, AbsolutePath>> {
        match self {
            AnyPath::Empty => None,
            AnyPath::Absolute(path) => Some(Either::Right(path)),
            AnyPath::Relative(path) => Some(Either::Left(path)),
        }
    }
}

impl From<AbsolutePath> for AnyPath {
    fn from(path: AbsolutePath) -> Self {
        AnyPath::Absolute(path)
    }
}

impl From<RelativePath> for AnyPath {
    fn from(path: RelativePath) -> Self {
        AnyPath::Relative(path)
    }
}
