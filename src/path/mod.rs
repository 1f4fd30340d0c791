//! The path refinement ladder.
//!
//! Each rung narrows the one before it:
//!
//! ```text
//! NonEmptyPathString -> NonEmptyPath -> NonSneakyPath
//!     -> AbsolutePath { AbsoluteDirectoryPath, AbsoluteFilePath }
//!         -> ExistingDirectoryPath, ExistingFilePath
//!     -> RelativePath { RelativeDirectoryPath, RelativeFilePath }
//! ```
//!
//! Every rung is built by a validating factory returning
//! [`PathResult`](crate::PathResult); the first failing check short-circuits
//! the rest.

mod absolute;
mod any;
mod existing;
mod file_name;
mod non_empty;
mod path_string;
mod relative;
mod sneaky;

pub use absolute::{AbsoluteDirectoryPath, AbsoluteFilePath, AbsolutePath};
pub use any::AnyPath;
pub use existing::{ExistingDirectoryPath, ExistingFilePath};
pub use file_name::FileName;
pub use non_empty::{NonEmptyPath, NonSneakyPath};
pub use path_string::NonEmptyPathString;
pub use relative::{RelativeDirectoryPath, RelativeFilePath, RelativePath};
pub use sneaky::is_sneaky;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::PathError;
use crate::PathResult;

/// Display, `AsRef<str>`, `AsRef<Path>` and `to_path_buf` for a type with
/// `as_str`; the `parse` form adds `FromStr` and `TryFrom` via the type's
/// native `create`.
macro_rules! path_conversions {
    (parse $($ty:ty),+ $(,)?) => {$(
        path_conversions!($ty);

        impl FromStr for $ty {
            type Err = PathError;

            fn from_str(s: &str) -> PathResult<Self> {
                Self::create(s)
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = PathError;

            fn try_from(raw: &str) -> PathResult<Self> {
                Self::create(raw)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = PathError;

            fn try_from(raw: String) -> PathResult<Self> {
                Self::create(&raw)
            }
        }
    )+};
    ($($ty:ty),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl AsRef<Path> for $ty {
            fn as_ref(&self) -> &Path {
                Path::new(self.as_str())
            }
        }

        impl $ty {
            /// The path as an owned [`PathBuf`].
            pub fn to_path_buf(&self) -> PathBuf {
                PathBuf::from(self.as_str())
            }
        }
    )+};
}

path_conversions!(
    parse
    AbsolutePath,
    AbsoluteDirectoryPath,
    AbsoluteFilePath,
    RelativePath,
    RelativeDirectoryPath,
    RelativeFilePath,
);

path_conversions!(ExistingDirectoryPath, ExistingFilePath);
