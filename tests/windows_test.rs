//! Integration tests for Windows path rules, run on every host.

use pathguard::{
    AbsoluteDirectoryPath, AbsoluteFilePath, AbsolutePath, FileName, PathError, Platform,
    RelativeFilePath,
};

const WINDOWS: Platform = Platform::Windows;

#[test]
fn test_drive_and_unc_roots() {
    let file = AbsoluteFilePath::create_for(WINDOWS, r"C:\Users\me\notes.txt").unwrap();
    assert_eq!(file.directory().as_str(), r"C:\Users\me\");
    assert_eq!(file.name().stem(), "notes");

    let share = AbsoluteDirectoryPath::create_for(WINDOWS, r"\\fileserver\public\").unwrap();
    assert!(share.is_root());

    let nested = AbsoluteFilePath::create_for(WINDOWS, r"\\fileserver\public\report.docx").unwrap();
    assert_eq!(nested.directory(), &share);
}

#[test]
fn test_drive_relative_counts_as_rooted() {
    let path = AbsolutePath::create_for(WINDOWS, "C:temp.txt").unwrap();
    let file = path.as_file().unwrap();
    assert_eq!(file.directory().as_str(), r"C:\");
    assert_eq!(file.name().as_str(), "temp.txt");
}

#[test]
fn test_forward_slashes_are_separators() {
    let path = AbsolutePath::create_for(WINDOWS, "C:/tools/bin/").unwrap();
    assert!(path.is_directory());
    assert_eq!(path.name(), "bin");

    assert!(matches!(
        AbsolutePath::create_for(WINDOWS, "C:/tools/../secret"),
        Err(PathError::SneakyTraversal { .. })
    ));
}

#[test]
fn test_forbidden_characters() {
    for raw in [r"C:\a<b", r"C:\a>b", r"C:\a|b", r"C:\a*b", r"C:\a?b", "C:\\a\"b"] {
        assert!(
            matches!(
                AbsolutePath::create_for(WINDOWS, raw),
                Err(PathError::InvalidCharacter { position: 4, .. })
            ),
            "{raw}"
        );
    }
    // a colon is fine in the root but not in a name
    assert!(matches!(
        AbsolutePath::create_for(WINDOWS, r"C:\a:b"),
        Err(PathError::InvalidCharacter { character: ':', .. })
    ));
}

#[test]
fn test_trailing_period_and_space() {
    assert!(matches!(
        RelativeFilePath::create_for(WINDOWS, "report."),
        Err(PathError::TrailingPeriodOrSpace { .. })
    ));
    assert!(matches!(
        RelativeFilePath::create_for(WINDOWS, "report "),
        Err(PathError::TrailingPeriodOrSpace { .. })
    ));
    assert!(RelativeFilePath::create_for(Platform::Posix, "report.").is_ok());
}

#[test]
fn test_reserved_device_names() {
    for raw in ["CON", "prn.txt", "Aux", "nul.tar.gz", "COM1", "lpt9.log"] {
        assert!(
            matches!(
                FileName::parse_for(WINDOWS, raw),
                Err(PathError::ReservedName { .. })
            ),
            "{raw}"
        );
    }
    for raw in ["CONSOLE", "com0", "lpt10", "nullable.txt"] {
        assert!(FileName::parse_for(WINDOWS, raw).is_ok(), "{raw}");
    }
}

#[test]
fn test_case_insensitive_containment() {
    let base = AbsoluteDirectoryPath::create_for(WINDOWS, r"C:\Program Files\").unwrap();
    let inside = AbsolutePath::create_for(WINDOWS, r"c:\PROGRAM FILES\App\app.exe").unwrap();
    assert!(base.contains(&inside));

    let posix = AbsoluteDirectoryPath::create_for(Platform::Posix, "/Data/").unwrap();
    let other = AbsolutePath::create_for(Platform::Posix, "/data/x").unwrap();
    assert!(!posix.contains(&other));
}

#[test]
fn test_platform_from_str() {
    assert_eq!("Windows".parse::<Platform>().unwrap(), Platform::Windows);
    assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Posix);
    assert_eq!(" macos ".parse::<Platform>().unwrap(), Platform::Posix);
    assert!("plan9".parse::<Platform>().is_err());
    assert_eq!(Platform::Windows.to_string(), "windows");
}
