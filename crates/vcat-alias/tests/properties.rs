use proptest::prelude::*;
use vcat_alias::{method_name, AliasParser, DEFAULT_ACCESSOR};

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,8}"
}

proptest! {
    #[test]
    fn prop_method_name_is_deterministic(seg in "[a-zA-Z0-9_-]{1,12}") {
        prop_assert_eq!(method_name(&seg), method_name(&seg));
    }

    #[test]
    fn prop_default_accessor_never_derived(seg in "[a-zA-Z0-9_-]{1,16}") {
        prop_assert_ne!(method_name(&seg), DEFAULT_ACCESSOR);
    }

    #[test]
    fn prop_joined_segments_parse_back(segments in proptest::collection::vec(segment(), 1..6)) {
        let alias = segments.join(".");
        let path = AliasParser::default().parse(&alias).unwrap();
        prop_assert_eq!(path.segments(), segments.as_slice());
        prop_assert_eq!(path.to_string(), alias);
    }

    #[test]
    fn prop_doubled_delimiter_always_rejected(
        head in segment(),
        tail in segment(),
    ) {
        let alias = format!("{head}..{tail}");
        let err = AliasParser::default().parse(&alias).unwrap_err();
        prop_assert_eq!(err.alias(), alias.as_str());
    }
}
