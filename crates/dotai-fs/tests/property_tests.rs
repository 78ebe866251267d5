use dotai_fs::{NormalizedPath, content_fingerprint};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalization_removes_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));

        // Normalizing twice changes nothing
        let again = NormalizedPath::new(path.as_str());
        prop_assert_eq!(path, again);
    }

    #[test]
    fn test_join_keeps_base_prefix(a in "[a-z]{1,8}", b in "[a-z.]{1,8}(/[a-z]{1,8}){0,3}") {
        let base = NormalizedPath::new(&a);
        let joined = base.join(&b);
        prop_assert!(joined.as_str().starts_with(base.as_str()));
        prop_assert!(!joined.as_str().contains('\\'));
    }

    #[test]
    fn test_fingerprint_equality_tracks_content(a in "\\PC*", b in "\\PC*") {
        let same = content_fingerprint(&a) == content_fingerprint(&b);
        if a == b {
            prop_assert!(same);
        }
        prop_assert_eq!(content_fingerprint(&a).len(), 16);
    }
}
