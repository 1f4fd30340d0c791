//! String refinement ladder.
//!
//! Every string is exactly one of: empty, whitespace-only, or "some" (has at
//! least one non-whitespace character). [`StringKind::create`] sorts a raw
//! input into one of those three; [`NonEmptyString::create`] and
//! [`SomeString::create`] validate a single rung and reject everything else.

use std::borrow::Borrow;
use std::fmt::{self, Display};

use crate::error::PathError;
use crate::PathResult;

/// The zero-length string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyString;

impl EmptyString {
    /// Returns `""`.
    pub fn as_str(&self) -> &'static str {
        ""
    }
}

/// A string of length greater than zero. Content is unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Validates that `raw` is non-empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathguard::{NonEmptyString, PathError};
    ///
    /// assert!(NonEmptyString::create(" ").is_ok());
    /// assert_eq!(NonEmptyString::create(""), Err(PathError::NullOrEmptyInput));
    /// ```
    pub fn create(raw: &str) -> PathResult<Self> {
        if raw.is_empty() {
            Err(PathError::NullOrEmptyInput)
        } else {
            Ok(Self(raw.to_string()))
        }
    }

    /// Validates an optional input; `None` is treated like `""`.
    pub fn from_option(raw: Option<&str>) -> PathResult<Self> {
        raw.map_or(Err(PathError::NullOrEmptyInput), Self::create)
    }

    /// Wraps a string the caller has already proven non-empty.
    pub(crate) fn new_unchecked(raw: String) -> Self {
        debug_assert!(!raw.is_empty());
        Self(raw)
    }

    /// Returns true if every character is whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.0.chars().all(char::is_whitespace)
    }

    /// Refines into a [`SomeString`], failing if the content is all whitespace.
    pub fn into_some(self) -> PathResult<SomeString> {
        if self.is_whitespace() {
            Err(PathError::WhitespaceOnlyInput)
        } else {
            Ok(SomeString(self))
        }
    }

    /// Returns the string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the length in bytes. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Unwraps into the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// A non-empty string with at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SomeString(NonEmptyString);

impl SomeString {
    /// Validates that `raw` is neither empty nor whitespace-only.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pathguard::{PathError, SomeString};
    ///
    /// assert_eq!(SomeString::create("x").unwrap().as_str(), "x");
    /// assert_eq!(SomeString::create(""), Err(PathError::NullOrEmptyInput));
    /// assert_eq!(SomeString::create(" \t"), Err(PathError::WhitespaceOnlyInput));
    /// ```
    pub fn create(raw: &str) -> PathResult<Self> {
        NonEmptyString::create(raw).and_then(NonEmptyString::into_some)
    }

    /// Validates an optional input; `None` is treated like `""`.
    pub fn from_option(raw: Option<&str>) -> PathResult<Self> {
        NonEmptyString::from_option(raw).and_then(NonEmptyString::into_some)
    }

    /// Returns the string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the wrapped [`NonEmptyString`].
    pub fn as_non_empty(&self) -> &NonEmptyString {
        &self.0
    }

    /// Returns the length in bytes. Never zero.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Unwraps into the inner `String`.
    pub fn into_string(self) -> String {
        self.0.into_string()
    }
}

/// A non-empty string made entirely of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WhitespaceString(NonEmptyString);

impl WhitespaceString {
    /// Validates that `raw` is non-empty and all whitespace.
    pub fn create(raw: &str) -> PathResult<Self> {
        let value = NonEmptyString::create(raw)?;
        if value.is_whitespace() {
            Ok(Self(value))
        } else {
            Err(PathError::InvalidCharacter {
                position: raw
                    .chars()
                    .position(|c| !c.is_whitespace())
                    .unwrap_or_default(),
                character: raw.chars().find(|c| !c.is_whitespace()).unwrap_or_default(),
                input: raw.to_string(),
            })
        }
    }

    /// Returns the string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Exactly one rung of the string ladder.
///
/// # Example
///
/// ```rust
/// use pathguard::StringKind;
///
/// assert!(StringKind::create(None).is_empty());
/// assert!(StringKind::create(Some("")).is_empty());
/// assert!(StringKind::create(Some(" \n")).is_whitespace());
/// assert!(StringKind::create(Some(" x ")).is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StringKind {
    /// Missing or zero-length.
    Empty(EmptyString),
    /// Non-empty, whitespace only.
    Whitespace(WhitespaceString),
    /// Non-empty with at least one non-whitespace character.
    Some(SomeString),
}

impl StringKind {
    /// Classifies a raw, possibly missing string. Total: never fails.
    pub fn create(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => StringKind::Empty(EmptyString),
            Some(s) => {
                let value = NonEmptyString::new_unchecked(s.to_string());
                if value.is_whitespace() {
                    StringKind::Whitespace(WhitespaceString(value))
                } else {
                    StringKind::Some(SomeString(value))
                }
            }
        }
    }

    /// Returns true for [`StringKind::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, StringKind::Empty(_))
    }

    /// Returns true for [`StringKind::Whitespace`].
    pub fn is_whitespace(&self) -> bool {
        matches!(self, StringKind::Whitespace(_))
    }

    /// Returns true for [`StringKind::Some`].
    pub fn is_some(&self) -> bool {
        matches!(self, StringKind::Some(_))
    }

    /// Returns the string slice.
    pub fn as_str(&self) -> &str {
        match self {
            StringKind::Empty(e) => e.as_str(),
            StringKind::Whitespace(w) => w.as_str(),
            StringKind::Some(s) => s.as_str(),
        }
    }

    /// Converts to a [`SomeString`], mapping the other rungs to their errors.
    pub fn into_some(self) -> PathResult<SomeString> {
        match self {
            StringKind::Empty(_) => Err(PathError::NullOrEmptyInput),
            StringKind::Whitespace(_) => Err(PathError::WhitespaceOnlyInput),
            StringKind::Some(s) => Ok(s),
        }
    }
}

macro_rules! string_traits {
    ($($ty:ty),+ $(,)?) => {$(
        impl Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }
    )+};
}

string_traits!(
    EmptyString,
    NonEmptyString,
    SomeString,
    WhitespaceString,
    StringKind
);

impl Borrow<str> for NonEmptyString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = PathError;

    fn try_from(raw: &str) -> PathResult<Self> {
        Self::create(raw)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = PathError;

    fn try_from(raw: String) -> PathResult<Self> {
        if raw.is_empty() {
            Err(PathError::NullOrEmptyInput)
        } else {
            Ok(Self(raw))
        }
    }
}

impl TryFrom<&str> for SomeString {
    type Error = PathError;

    fn try_from(raw: &str) -> PathResult<Self> {
        Self::create(raw)
    }
}

impl TryFrom<String> for SomeString {
    type Error = PathError;

    fn try_from(raw: String) -> PathResult<Self> {
        NonEmptyString::try_from(raw).and_then(NonEmptyString::into_some)
    }
}

impl TryFrom<String> for WhitespaceString {
    type Error = PathError;

    fn try_from(raw: String) -> PathResult<Self> {
        Self::create(&raw)
    }
}

impl From<SomeString> for NonEmptyString {
    fn from(value: SomeString) -> Self {
        value.0
    }
}

impl From<WhitespaceString> for NonEmptyString {
    fn from(value: WhitespaceString) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_partition() {
        for raw in ["", " ", "\t\n", "a", " a ", "日本"] {
            let kind = StringKind::create(Some(raw));
            let rungs = [kind.is_empty(), kind.is_whitespace(), kind.is_some()];
            assert_eq!(rungs.iter().filter(|r| **r).count(), 1, "{raw:?}");
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn test_unicode_whitespace() {
        // U+3000 IDEOGRAPHIC SPACE and U+00A0 NO-BREAK SPACE are whitespace
        assert!(StringKind::create(Some("\u{3000}\u{a0}")).is_whitespace());
    }

    #[test]
    fn test_non_empty_keeps_whitespace() {
        let value = NonEmptyString::create("  ").unwrap();
        assert!(value.is_whitespace());
        assert_eq!(value.into_some(), Err(PathError::WhitespaceOnlyInput));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(
            NonEmptyString::from_option(None),
            Err(PathError::NullOrEmptyInput)
        );
        assert_eq!(SomeString::from_option(Some("x")).unwrap().as_str(), "x");
    }

    #[test]
    fn test_whitespace_string_rejects_content() {
        assert!(WhitespaceString::create("  ").is_ok());
        let err = WhitespaceString::create(" a").unwrap_err();
        assert_eq!(
            err,
            PathError::InvalidCharacter {
                input: " a".to_string(),
                position: 1,
                character: 'a',
            }
        );
    }

    #[test]
    fn test_into_some_from_kind() {
        assert_eq!(
            StringKind::create(None).into_some(),
            Err(PathError::NullOrEmptyInput)
        );
        assert_eq!(
            StringKind::create(Some(" ")).into_some(),
            Err(PathError::WhitespaceOnlyInput)
        );
        assert!(StringKind::create(Some("ok")).into_some().is_ok());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(SomeString::create("a").unwrap(), SomeString::create("a").unwrap());
        assert_ne!(SomeString::create("a").unwrap(), SomeString::create("b").unwrap());
        assert_eq!(EmptyString, EmptyString::default());
    }

    #[test]
    fn test_try_from_string() {
        assert!(SomeString::try_from(String::from("x")).is_ok());
        assert_eq!(
            NonEmptyString::try_from(String::new()),
            Err(PathError::NullOrEmptyInput)
        );
    }
}
