//! Raw path parsing.
//!
//! [`NonEmptyPathString`] is the first path-shaped rung: a non-empty string
//! that contains no forbidden characters, split into its root and its
//! trailing-separator-free form. Nothing about traversal or rootedness is
//! decided here.

use std::fmt::{self, Display};

use crate::error::PathError;
use crate::platform::{trim_separators, Platform};
use crate::string::NonEmptyString;
use crate::PathResult;

/// A parsed, character-checked path string.
///
/// # Example
///
/// ```rust
/// use pathguard::{NonEmptyPathString, NonEmptyString, Platform};
///
/// let raw = NonEmptyString::create("/var/log//").unwrap();
/// let parsed = NonEmptyPathString::parse(Platform::Posix, &raw).unwrap();
///
/// assert_eq!(parsed.as_str(), "/var/log//");
/// assert_eq!(parsed.trimmed_path(), "/var/log");
/// assert_eq!(parsed.root_length(), 1);
/// assert!(parsed.ends_in_directory_separator());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyPathString {
    path: String,
    trimmed_len: usize,
    root_length: usize,
    platform: Platform,
}

impl NonEmptyPathString {
    /// Parses `raw` under `platform`'s rules.
    ///
    /// Fails with [`PathError::InvalidCharacter`] at the first forbidden
    /// character and, on Windows, with [`PathError::TrailingPeriodOrSpace`]
    /// when the last segment ends in `.` or a space.
    pub fn parse(platform: Platform, raw: &NonEmptyString) -> PathResult<Self> {
        let path = raw.as_str();
        check_path_chars(platform, path)?;
        check_trailing_period_or_space(platform, path)?;
        Ok(Self::from_checked(platform, path.to_string()))
    }

    /// Builds the parsed form of a string whose characters are already known
    /// to be valid.
    pub(crate) fn from_checked(platform: Platform, path: String) -> Self {
        let root_length = platform.root_length(&path);
        let trimmed_len = trim_separators(platform, &path, root_length).len();
        Self {
            path,
            trimmed_len,
            root_length,
            platform,
        }
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// The path without trailing separators, unless it is a bare root.
    pub fn trimmed_path(&self) -> &str {
        &self.path[..self.trimmed_len]
    }

    /// Length in bytes of the path's root; 0 for relative paths.
    pub fn root_length(&self) -> usize {
        self.root_length
    }

    /// The root itself, e.g. `/` or `C:\`; empty for relative paths.
    pub fn root(&self) -> &str {
        &self.path[..self.root_length]
    }

    /// The platform this path was parsed for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Returns true if the path has a root.
    pub fn is_rooted(&self) -> bool {
        self.root_length > 0
    }

    /// Returns true if the last character is a primary or alternate separator.
    pub fn ends_in_directory_separator(&self) -> bool {
        self.platform.ends_in_separator(&self.path)
    }

    /// Returns true if the trimmed path is nothing but its root.
    pub fn is_root(&self) -> bool {
        self.root_length > 0 && self.trimmed_len == self.root_length
    }

    /// The last segment of the trimmed path; empty for a bare root.
    pub fn file_name(&self) -> &str {
        self.platform.file_name(self.trimmed_path())
    }

    /// Returns the trimmed form as a path string of its own.
    pub fn trim(&self) -> Self {
        Self::from_checked(self.platform, self.trimmed_path().to_string())
    }

    /// Appends `suffix`, inserting a separator unless this path already ends
    /// in one.
    ///
    /// `suffix` is trusted: it must come from an already validated value.
    pub fn combine(&self, suffix: &NonEmptyString) -> Self {
        let mut path = String::with_capacity(self.path.len() + 1 + suffix.len());
        path.push_str(&self.path);
        if !self.ends_in_directory_separator() {
            path.push(self.platform.separator());
        }
        path.push_str(suffix.as_str());
        Self::from_checked(self.platform, path)
    }
}

impl Display for NonEmptyPathString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

fn check_path_chars(platform: Platform, path: &str) -> PathResult<()> {
    match path
        .chars()
        .enumerate()
        .find(|(_, c)| platform.is_invalid_path_char(*c))
    {
        Some((position, character)) => Err(PathError::InvalidCharacter {
            input: path.to_string(),
            position,
            character,
        }),
        None => Ok(()),
    }
}

fn check_trailing_period_or_space(platform: Platform, path: &str) -> PathResult<()> {
    if !platform.rejects_trailing_period_or_space() {
        return Ok(());
    }
    if platform.file_name(path).ends_with(['.', ' ']) {
        Err(PathError::TrailingPeriodOrSpace {
            input: path.to_string(),
        })
    } else {
        Ok(())
    }
}
