//! Leaf name validation.

use std::fmt::{self, Display};

use crate::error::PathError;
use crate::platform::Platform;
use crate::string::SomeString;
use crate::PathResult;

/// A single path segment that is safe to use as a file name.
///
/// Built on a [`SomeString`], so it is never empty or whitespace-only, and
/// contains none of the platform's forbidden file-name characters (which
/// include the separators). On Windows, reserved device names such as `CON`
/// or `nul.txt` are rejected too.
///
/// # Example
///
/// ```rust
/// use pathguard::{FileName, PathError, Platform, SomeString};
///
/// let name = SomeString::create("report.pdf").unwrap();
/// let name = FileName::create_for(Platform::Posix, &name).unwrap();
/// assert_eq!(name.extension(), Some("pdf"));
///
/// let bad = SomeString::create("a/b").unwrap();
/// assert!(matches!(
///     FileName::create_for(Platform::Posix, &bad),
///     Err(PathError::InvalidCharacter { position: 1, character: '/', .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName {
    name: SomeString,
    platform: Platform,
}

impl FileName {
    /// Validates `raw` as a file name for the native platform.
    pub fn create(raw: &SomeString) -> PathResult<Self> {
        Self::create_for(Platform::native(), raw)
    }

    /// Validates `raw` as a file name for `platform`.
    pub fn create_for(platform: Platform, raw: &SomeString) -> PathResult<Self> {
        let name = raw.as_str();
        if let Some((position, character)) = name
            .chars()
            .enumerate()
            .find(|(_, c)| platform.is_invalid_file_name_char(*c))
        {
            return Err(PathError::InvalidCharacter {
                input: name.to_string(),
                position,
                character,
            });
        }
        if platform.is_reserved_file_name(name) {
            return Err(PathError::ReservedName {
                input: name.to_string(),
            });
        }
        Ok(Self {
            name: raw.clone(),
            platform,
        })
    }

    /// Validates a raw `&str` as a file name for `platform`.
    pub fn parse_for(platform: Platform, raw: &str) -> PathResult<Self> {
        SomeString::create(raw).and_then(|name| Self::create_for(platform, &name))
    }

    /// Returns the name.
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    /// The platform this name was validated for.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Everything before the last `.`, or the whole name when there is no
    /// extension. A leading dot (`.bashrc`) does not start an extension.
    pub fn stem(&self) -> &str {
        match self.split_extension() {
            Some((stem, _)) => stem,
            None => self.as_str(),
        }
    }

    /// Everything after the last `.`, if there is a non-empty stem before it.
    pub fn extension(&self) -> Option<&str> {
        self.split_extension().map(|(_, ext)| ext)
    }

    fn split_extension(&self) -> Option<(&str, &str)> {
        let name = self.as_str();
        match name.rfind('.') {
            Some(0) | None => None,
            Some(i) => Some((&name[..i], &name[i + 1..])),
        }
    }
}

impl Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::str::FromStr for FileName {
    type Err = PathError;

    fn from_str(s: &str) -> PathResult<Self> {
        Self::parse_for(Platform::native(), s)
    }
}

impl TryFrom<&str> for FileName {
    type Error = PathError;

    fn try_from(raw: &str) -> PathResult<Self> {
        raw.parse()
    }
}

impl TryFrom<String> for FileName {
    type Error = PathError;

    fn try_from(raw: String) -> PathResult<Self> {
        raw.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names() {
        for raw in ["file.txt", ".bashrc", "a b", "日本.md", "x"] {
            assert!(FileName::parse_for(Platform::Posix, raw).is_ok(), "{raw}");
            assert!(FileName::parse_for(Platform::Windows, raw).is_ok(), "{raw}");
        }
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(
            FileName::parse_for(Platform::Posix, ""),
            Err(PathError::NullOrEmptyInput)
        );
        assert_eq!(
            FileName::parse_for(Platform::Posix, "   "),
            Err(PathError::WhitespaceOnlyInput)
        );
    }

    #[test]
    fn test_windows_forbidden_characters() {
        for raw in ["a:b", "a\\b", "a/b", "a|b", "a?b", "a*b", "a\"b", "a<b", "a>b", "a\u{7}b"] {
            assert!(
                matches!(
                    FileName::parse_for(Platform::Windows, raw),
                    Err(PathError::InvalidCharacter { position: 1, .. })
                ),
                "{raw:?}"
            );
        }
        assert!(FileName::parse_for(Platform::Posix, "a:b").is_ok());
        assert!(FileName::parse_for(Platform::Posix, "a\\b").is_ok());
    }

    #[test]
    fn test_reserved_names() {
        assert!(matches!(
            FileName::parse_for(Platform::Windows, "aux.log"),
            Err(PathError::ReservedName { .. })
        ));
        assert!(FileName::parse_for(Platform::Posix, "aux.log").is_ok());
    }

    #[test]
    fn test_stem_and_extension() {
        let name = FileName::parse_for(Platform::Posix, "archive.tar.gz").unwrap();
        assert_eq!(name.stem(), "archive.tar");
        assert_eq!(name.extension(), Some("gz"));

        let name = FileName::parse_for(Platform::Posix, ".bashrc").unwrap();
        assert_eq!(name.stem(), ".bashrc");
        assert_eq!(name.extension(), None);

        let name = FileName::parse_for(Platform::Posix, "Makefile").unwrap();
        assert_eq!(name.extension(), None);

        let name = FileName::parse_for(Platform::Posix, "trailing.").unwrap();
        assert_eq!(name.stem(), "trailing");
        assert_eq!(name.extension(), Some(""));
    }
}
