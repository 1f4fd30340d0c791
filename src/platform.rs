//! Platform path policy.
//!
//! Path syntax differs between operating systems: which characters separate
//! segments, what a root looks like, which characters a name may contain.
//! [`Platform`] answers those questions so the validation pipeline itself
//! never branches on the host OS. Every validated value remembers the
//! platform it was validated for.

use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// A platform's path rules.
///
/// # Example
///
/// ```rust
/// use pathguard::Platform;
///
/// assert_eq!(Platform::Posix.root_length("/usr/lib"), 1);
/// assert_eq!(Platform::Windows.root_length(r"C:\Windows"), 3);
/// assert_eq!(Platform::Windows.root_length(r"\\server\share\dir"), 15);
/// assert!(!Platform::Posix.is_rooted("usr/lib"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Linux, macOS and other Unix-likes: `/` only, NUL is the only
    /// forbidden path character.
    Posix,
    /// Windows: `\` and `/` both separate, drive and UNC roots, and a wide
    /// set of forbidden characters.
    Windows,
}

const WINDOWS_INVALID_PATH_CHARS: &[char] = &['"', '<', '>', '|', '*', '?'];
const WINDOWS_INVALID_FILE_NAME_CHARS: &[char] =
    &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

fn windows_root() -> &'static Regex {
    static ROOT: OnceLock<Regex> = OnceLock::new();
    ROOT.get_or_init(|| {
        Regex::new(r"^(?:[\\/]{2}[^\\/]+(?:[\\/][^\\/]+)?[\\/]?|[A-Za-z]:[\\/]?|[\\/])")
            .expect("windows root pattern is valid")
    })
}

fn windows_reserved_name() -> &'static Regex {
    static RESERVED: OnceLock<Regex> = OnceLock::new();
    RESERVED.get_or_init(|| {
        Regex::new(r"(?i)^(?:CON|PRN|AUX|NUL|COM[1-9]|LPT[1-9])(?:\..*)?$")
            .expect("reserved name pattern is valid")
    })
}

impl Platform {
    /// Returns the platform this crate was compiled for.
    pub fn native() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// The separator used when joining segments.
    pub fn separator(self) -> char {
        match self {
            Platform::Posix => '/',
            Platform::Windows => '\\',
        }
    }

    /// The alternate separator. Equal to [`separator`](Self::separator) on POSIX.
    pub fn alt_separator(self) -> char {
        '/'
    }

    /// Returns true if `c` is the primary or alternate separator.
    pub fn is_separator(self, c: char) -> bool {
        c == self.separator() || c == self.alt_separator()
    }

    /// Returns true if `path` ends with a separator.
    pub fn ends_in_separator(self, path: &str) -> bool {
        path.chars().last().is_some_and(|c| self.is_separator(c))
    }

    /// Returns true if `c` may not appear anywhere in a path.
    ///
    /// On Windows this includes the `*` and `?` wildcards.
    pub fn is_invalid_path_char(self, c: char) -> bool {
        match self {
            Platform::Posix => c == '\0',
            Platform::Windows => c < ' ' || WINDOWS_INVALID_PATH_CHARS.contains(&c),
        }
    }

    /// Returns true if `c` may not appear in a single file name.
    pub fn is_invalid_file_name_char(self, c: char) -> bool {
        match self {
            Platform::Posix => c == '\0' || c == '/',
            Platform::Windows => c < ' ' || WINDOWS_INVALID_FILE_NAME_CHARS.contains(&c),
        }
    }

    /// Returns true if `name` is a reserved device name (Windows only).
    pub fn is_reserved_file_name(self, name: &str) -> bool {
        match self {
            Platform::Posix => false,
            Platform::Windows => windows_reserved_name().is_match(name),
        }
    }

    /// Returns true if a segment may not end in `.` or a space.
    pub fn rejects_trailing_period_or_space(self) -> bool {
        matches!(self, Platform::Windows)
    }

    /// Returns true if paths that differ only in letter case are distinct.
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, Platform::Posix)
    }

    /// Compares two path strings under this platform's case rule.
    pub fn paths_equal(self, a: &str, b: &str) -> bool {
        if self.is_case_sensitive() {
            a == b
        } else {
            a.chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase))
        }
    }

    /// Length in bytes of the root of `path`, or 0 if it has none.
    ///
    /// POSIX roots are a leading `/`. Windows roots are a drive (`C:` or
    /// `C:\`), a UNC share (`\\server\share\`) or a leading separator.
    pub fn root_length(self, path: &str) -> usize {
        match self {
            Platform::Posix => usize::from(path.starts_with('/')),
            Platform::Windows => windows_root().find(path).map_or(0, |m| m.end()),
        }
    }

    /// Returns true if `path` has a root.
    pub fn is_rooted(self, path: &str) -> bool {
        self.root_length(path) > 0
    }

    /// Returns the last segment of `path`, or `""` if it ends in a separator
    /// or consists only of a root.
    pub fn file_name(self, path: &str) -> &str {
        let root = self.root_length(path);
        let start = path
            .rfind(|c: char| self.is_separator(c))
            .map_or(0, |i| i + 1)
            .max(root);
        &path[start..]
    }

    /// Returns everything before the last segment of `path`, with trailing
    /// separators removed unless that would cut into the root.
    ///
    /// Returns `None` when `path` is a bare root and `Some("")` when it is a
    /// single relative segment.
    pub fn directory_name(self, path: &str) -> Option<&str> {
        let root = self.root_length(path);
        if path.len() <= root {
            return None;
        }
        let end = path[root..]
            .rfind(|c: char| self.is_separator(c))
            .map_or(root, |i| root + i);
        Some(trim_separators(self, &path[..end.max(root)], root))
    }
}

/// Strips trailing separators from `path`, never shortening it below `root`.
pub(crate) fn trim_separators(platform: Platform, path: &str, root: usize) -> &str {
    let mut end = path.len();
    while end > root && platform.is_separator(char::from(path.as_bytes()[end - 1])) {
        end -= 1;
    }
    &path[..end]
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Posix => write!(f, "posix"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform {0:?}, expected one of: posix, unix, linux, macos, windows")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" | "unix" | "linux" | "macos" => Ok(Platform::Posix),
            "windows" | "win" => Ok(Platform::Windows),
            _ => Err(UnknownPlatform(s.to_string())),
        }
    }
}
