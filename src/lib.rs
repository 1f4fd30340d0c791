//! # Pathguard
//!
//! Refinement types for strings and filesystem paths. A value of one of these
//! types has passed every check its name promises, once, at construction;
//! code that receives an [`AbsoluteFilePath`] never has to ask again whether
//! it is rooted, free of `..` traversal, or ends in a valid file name.
//!
//! ## Overview
//!
//! Raw strings enter through a validating factory (`create`, `create_for`,
//! `FromStr`, `TryFrom`) and climb a ladder of types:
//!
//! - Strings: [`EmptyString`], [`NonEmptyString`], [`SomeString`],
//!   [`WhitespaceString`], classified by [`StringKind`].
//! - Paths: [`NonEmptyPath`] → [`NonSneakyPath`] → [`AbsolutePath`] /
//!   [`RelativePath`] → directory and file leaves → [`ExistingDirectoryPath`]
//!   / [`ExistingFilePath`].
//! - Leaf names: [`FileName`].
//!
//! Each factory returns a [`PathResult`]; the first failing check
//! short-circuits the rest. Platform rules (separators, forbidden characters,
//! roots, case sensitivity) come from an explicit [`Platform`] value, so
//! Windows paths can be validated on Linux and vice versa.
//!
//! ## Example
//!
//! ```rust
//! use pathguard::{AbsolutePath, PathError, Platform};
//!
//! let path = AbsolutePath::create_for(Platform::Posix, "/home/user/").unwrap();
//! assert!(path.is_directory());
//! assert_eq!(path.name(), "user");
//!
//! let sneaky = AbsolutePath::create_for(Platform::Posix, "/home/../etc/passwd");
//! assert!(matches!(sneaky, Err(PathError::SneakyTraversal { .. })));
//! ```
//!
//! ## Batches
//!
//! [`validate_all`] and [`par_validate_all`] validate many inputs and report
//! every failure as a stillwater `Validation` over [`BatchErrors`].

pub mod batch;
pub mod either;
pub mod error;
pub mod fs;
pub mod path;
pub mod platform;
pub mod string;

#[cfg(feature = "serde")]
mod serde_impl;

pub use batch::{par_validate_all, validate_all};
pub use either::{attempt, Either};
pub use error::{BatchError, BatchErrors, PathError};
pub use fs::{EntryKind, FileSystem, MemoryFileSystem, StdFileSystem};
pub use path::{
    is_sneaky, AbsoluteDirectoryPath, AbsoluteFilePath, AbsolutePath, AnyPath,
    ExistingDirectoryPath, ExistingFilePath, FileName, NonEmptyPath, NonEmptyPathString,
    NonSneakyPath, RelativeDirectoryPath, RelativeFilePath, RelativePath,
};
pub use platform::{Platform, UnknownPlatform};
pub use string::{EmptyString, NonEmptyString, SomeString, StringKind, WhitespaceString};

/// Result of every validating factory.
pub type PathResult<T> = Result<T, PathError>;

/// Batch outcome: all values, or every failure.
pub type BatchResult<T> = stillwater::Validation<Vec<T>, BatchErrors>;
