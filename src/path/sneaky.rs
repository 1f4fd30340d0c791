//! Directory traversal detection.

use crate::platform::Platform;
use crate::string::NonEmptyString;

/// Returns true if `path` contains a `..` segment.
///
/// A segment is bounded by the start or end of the string or by either of the
/// platform's separators, so on Windows `a/..\b` is caught as well as `a\..\b`.
/// That covers the four shapes `..`, `../x`, `x/..` and `x/../y` in every mix
/// of primary and alternate separator. Names that merely contain dots, such as
/// `...` or `..hidden`, are not traversal.
///
/// # Example
///
/// ```rust
/// use pathguard::{is_sneaky, NonEmptyString, Platform};
///
/// let sneaky = NonEmptyString::create("/home/../etc/passwd").unwrap();
/// let fine = NonEmptyString::create("/home/..hidden").unwrap();
///
/// assert!(is_sneaky(Platform::Posix, &sneaky));
/// assert!(!is_sneaky(Platform::Posix, &fine));
/// ```
pub fn is_sneaky(platform: Platform, path: &NonEmptyString) -> bool {
    contains_parent_segment(platform, path.as_str())
}

pub(crate) fn contains_parent_segment(platform: Platform, path: &str) -> bool {
    path.split(|c: char| platform.is_separator(c))
        .any(|segment| segment == "..")
}
