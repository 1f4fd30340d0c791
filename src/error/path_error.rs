//! Path and string validation error type.
//!
//! This module provides [`PathError`], the single error currency of every
//! factory in the crate. Each variant names one broken invariant and carries
//! enough context to explain it.

use std::io;

use serde_json::{json, Value};

use crate::fs::EntryKind;

/// A single validation failure.
///
/// Every factory in the crate short-circuits on the first `PathError` it
/// encounters; later pipeline stages never run once an earlier one failed.
///
/// # Example
///
/// ```rust
/// use pathguard::{AbsolutePath, PathError, Platform};
///
/// let err = AbsolutePath::create_for(Platform::Posix, "relative/path").unwrap_err();
/// assert!(matches!(err, PathError::NotRooted { .. }));
/// assert_eq!(err.code(), "not_rooted");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The input was missing or had zero length.
    #[error("input is null or empty")]
    NullOrEmptyInput,

    /// The input consisted only of whitespace.
    #[error("input consists only of whitespace")]
    WhitespaceOnlyInput,

    /// The input contained a character the platform forbids here.
    #[error("invalid character {character:?} at position {position} in {input:?}")]
    InvalidCharacter {
        /// The rejected input.
        input: String,
        /// Character index (not byte offset) of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },

    /// Windows does not allow a path segment to end with `.` or a space.
    #[error("{input:?} ends with a period or space")]
    TrailingPeriodOrSpace {
        /// The rejected input.
        input: String,
    },

    /// The name is a reserved device name on this platform.
    #[error("{input:?} is a reserved device name")]
    ReservedName {
        /// The rejected name.
        input: String,
    },

    /// The path contains a `..` segment.
    #[error("{path:?} contains a '..' traversal segment")]
    SneakyTraversal {
        /// The rejected path.
        path: String,
    },

    /// An absolute path was required but the input has no root.
    #[error("{path:?} is not rooted")]
    NotRooted {
        /// The rejected path.
        path: String,
    },

    /// A relative path was required but the input is rooted.
    #[error("{path:?} is rooted")]
    IsRooted {
        /// The rejected path.
        path: String,
    },

    /// A directory path must end with a directory separator.
    #[error("{path:?} does not end with a directory separator")]
    ExpectedDirectory {
        /// The rejected path.
        path: String,
    },

    /// A file path must not end with a directory separator.
    #[error("{path:?} ends with a directory separator")]
    ExpectedFile {
        /// The rejected path.
        path: String,
    },

    /// The filesystem holds an entry of the other kind at this path.
    #[error("expected {expected} at {path:?} but found {found}")]
    WrongKind {
        /// The path that was checked.
        path: String,
        /// The kind of entry the operation required.
        expected: EntryKind,
        /// The kind of entry actually present.
        found: EntryKind,
    },

    /// The filesystem holds no entry at this path.
    #[error("{expected} {path:?} does not exist")]
    NotFound {
        /// The path that was checked.
        path: String,
        /// The kind of entry the operation required.
        expected: EntryKind,
    },

    /// The path has no parent directory or leaf segment to extract.
    #[error("{path:?} has no directory or file segment")]
    NoDirectoryOrFileSegment {
        /// The path that was split.
        path: String,
    },

    /// A filesystem operation failed.
    #[error("i/o error at {path:?}: {message}")]
    Io {
        /// The path the operation targeted.
        path: String,
        /// The underlying error kind.
        kind: io::ErrorKind,
        /// The underlying error rendered as text.
        message: String,
    },

    /// A caller-supplied callback panicked.
    #[error("callback panicked: {message}")]
    CallbackPanicked {
        /// The panic payload, if it was a string.
        message: String,
    },
}

impl PathError {
    /// Wraps an I/O error raised while operating on `path`.
    pub fn io(path: impl Into<String>, err: &io::Error) -> Self {
        PathError::Io {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Returns a stable, machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            PathError::NullOrEmptyInput => "null_or_empty",
            PathError::WhitespaceOnlyInput => "whitespace_only",
            PathError::InvalidCharacter { .. } => "invalid_character",
            PathError::TrailingPeriodOrSpace { .. } => "trailing_period_or_space",
            PathError::ReservedName { .. } => "reserved_name",
            PathError::SneakyTraversal { .. } => "sneaky_traversal",
            PathError::NotRooted { .. } => "not_rooted",
            PathError::IsRooted { .. } => "is_rooted",
            PathError::ExpectedDirectory { .. } => "expected_directory",
            PathError::ExpectedFile { .. } => "expected_file",
            PathError::WrongKind { .. } => "wrong_kind",
            PathError::NotFound { .. } => "not_found",
            PathError::NoDirectoryOrFileSegment { .. } => "no_directory_or_file_segment",
            PathError::Io { .. } => "io",
            PathError::CallbackPanicked { .. } => "callback_panicked",
        }
    }

    /// Returns the path or input the error refers to, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            PathError::NullOrEmptyInput
            | PathError::WhitespaceOnlyInput
            | PathError::CallbackPanicked { .. } => None,
            PathError::InvalidCharacter { input, .. }
            | PathError::TrailingPeriodOrSpace { input }
            | PathError::ReservedName { input } => Some(input),
            PathError::SneakyTraversal { path }
            | PathError::NotRooted { path }
            | PathError::IsRooted { path }
            | PathError::ExpectedDirectory { path }
            | PathError::ExpectedFile { path }
            | PathError::WrongKind { path, .. }
            | PathError::NotFound { path, .. }
            | PathError::NoDirectoryOrFileSegment { path }
            | PathError::Io { path, .. } => Some(path),
        }
    }

    /// Renders the error as a JSON object with `code`, `message` and `subject`.
    pub fn to_json(&self) -> Value {
        json!({
            "code": self.code(),
            "message": self.to_string(),
            "subject": self.subject(),
        })
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<PathError>();
    assert_sync::<PathError>();
};
