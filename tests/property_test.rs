//! Property tests for the path and string ladders.

use pathguard::{
    is_sneaky, AbsoluteDirectoryPath, AbsolutePath, NonEmptyPathString, NonEmptyString,
    NonSneakyPath, Platform, RelativeDirectoryPath, StringKind,
};
use proptest::prelude::*;

const POSIX: Platform = Platform::Posix;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,7}".prop_filter("not a traversal segment", |s| s != "..")
}

fn segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment(), 1..max)
}

proptest! {
    #[test]
    fn trim_is_idempotent(raw in "/?([a-z]{1,5}/{1,3}){0,4}[a-z]{0,5}/{0,3}") {
        prop_assume!(!raw.is_empty());
        let parsed = NonEmptyPathString::parse(POSIX, &NonEmptyString::create(&raw).unwrap()).unwrap();
        let once = parsed.trim();
        prop_assert_eq!(once.trim(), once.clone());
        prop_assert_eq!(once.as_str(), parsed.trimmed_path());
    }

    #[test]
    fn absolute_paths_round_trip(parts in segments(6), trailing in any::<bool>()) {
        let mut raw = format!("/{}", parts.join("/"));
        if trailing {
            raw.push('/');
        }
        let path = AbsolutePath::create_for(POSIX, &raw).unwrap();
        let reparsed = AbsolutePath::create_for(POSIX, &path.to_string()).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    #[test]
    fn string_kinds_are_exclusive(raw in "\\PC{0,12}|[ \t\n]{1,6}") {
        let kind = StringKind::create(Some(&raw));
        let flags = [kind.is_empty(), kind.is_whitespace(), kind.is_some()];
        prop_assert_eq!(flags.iter().filter(|f| **f).count(), 1);
        prop_assert_eq!(kind.as_str(), raw.as_str());
    }

    #[test]
    fn traversal_is_always_caught(
        before in segments(3),
        after in segments(3),
        seps in prop::collection::vec(prop_oneof![Just('/'), Just('\\')], 2),
    ) {
        let raw = format!("{}{}..{}{}", before.join("/"), seps[0], seps[1], after.join("/"));
        let raw = NonEmptyString::create(&raw).unwrap();
        prop_assert!(is_sneaky(Platform::Windows, &raw));
    }

    #[test]
    fn plain_segments_are_never_sneaky(parts in segments(6)) {
        let raw = NonEmptyString::create(&parts.join("/")).unwrap();
        prop_assert!(!is_sneaky(POSIX, &raw));
        prop_assert!(!is_sneaky(Platform::Windows, &raw));
    }

    #[test]
    fn rooted_and_relative_partition(parts in segments(5), rooted in any::<bool>()) {
        let raw = if rooted {
            format!("/{}", parts.join("/"))
        } else {
            parts.join("/")
        };
        let path = NonSneakyPath::create_for(POSIX, &raw).unwrap();
        prop_assert_eq!(path.is_rooted(), rooted);
        let classified = path.classify().unwrap();
        prop_assert_eq!(classified.is_right(), rooted);
        prop_assert_eq!(classified.is_left(), !rooted);
    }

    #[test]
    fn directory_combine_is_associative(
        base in segments(3),
        first in segments(3),
        second in segments(3),
    ) {
        let dir = AbsoluteDirectoryPath::create_for(POSIX, &format!("/{}/", base.join("/"))).unwrap();
        let rel1 = RelativeDirectoryPath::create_for(POSIX, &format!("{}/", first.join("/"))).unwrap();
        let rel2 = RelativeDirectoryPath::create_for(POSIX, &format!("{}/", second.join("/"))).unwrap();

        let left = dir.combine(&rel1).unwrap().combine(&rel2).unwrap();
        let right = dir.combine(&rel1.combine(&rel2).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }
}
