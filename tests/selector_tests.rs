use jsq::{parse_selectors, ParseError, Selector};

// Checks for a program with a single one-selector chain and returns the
// selector.
fn single_selector(input: &str) -> Selector {
    let selectors = single_chain(input);
    assert_eq!(selectors.len(), 1, "expected one selector in {:?}", input);
    selectors.into_iter().next().unwrap()
}

// Checks for a program with a single chain and returns its selectors.
fn single_chain(input: &str) -> Vec<Selector> {
    let program = parse_selectors(input).unwrap();
    assert_eq!(program.chains().len(), 1, "expected one chain in {:?}", input);
    program.chains()[0].selectors().to_vec()
}

// ============================================================================
// Single selectors
// ============================================================================

#[test]
fn test_any_parses() {
    assert_eq!(single_selector("."), Selector::Any);
}

#[test]
fn test_key_parses() {
    assert_eq!(single_selector(r#""""#), Selector::Key("".to_string()));
    assert_eq!(single_selector(r#""key""#), Selector::Key("key".to_string()));
    assert_eq!(
        single_selector(r#""bigger key""#),
        Selector::Key("bigger key".to_string())
    );
    assert_eq!(
        single_selector(r#""'a',.c02""#),
        Selector::Key("'a',.c02".to_string())
    );
}

#[test]
fn test_index_parses() {
    assert_eq!(single_selector("[1]"), Selector::Index(1));
    assert_eq!(single_selector("[500]"), Selector::Index(500));
    assert_eq!(single_selector("[-1]"), Selector::Index(-1));
}

#[test]
fn test_range_parses() {
    assert_eq!(
        single_selector("[1:2]"),
        Selector::Range {
            start: Some(1),
            end: Some(2)
        }
    );
    assert_eq!(
        single_selector("[:2]"),
        Selector::Range {
            start: None,
            end: Some(2)
        }
    );
    assert_eq!(
        single_selector("[1:]"),
        Selector::Range {
            start: Some(1),
            end: None
        }
    );
    assert_eq!(
        single_selector("[:]"),
        Selector::Range {
            start: None,
            end: None
        }
    );
    assert_eq!(
        single_selector("[]"),
        Selector::Range {
            start: None,
            end: None
        }
    );
}

#[test]
fn test_property_parses() {
    assert_eq!(
        single_selector(r#"{"key1"}"#),
        Selector::Property(vec!["key1".to_string()])
    );
    assert_eq!(
        single_selector(r#"{ "key1" , "key2" }"#),
        Selector::Property(vec!["key1".to_string(), "key2".to_string()])
    );
}

#[test]
fn test_property_accepts_duplicate_keys() {
    assert_eq!(
        single_selector(r#"{"a","a"}"#),
        Selector::Property(vec!["a".to_string(), "a".to_string()])
    );
}

#[test]
fn test_filter_parses() {
    assert_eq!(
        single_selector(r#"|"key""#),
        Selector::Filter("key".to_string())
    );
}

#[test]
fn test_truncate_parses() {
    assert_eq!(single_selector("!"), Selector::Truncate);
}

#[test]
fn test_flatten_parses() {
    assert_eq!(single_selector(".."), Selector::Flatten);
}

// ============================================================================
// Chains
// ============================================================================

#[test]
fn test_key_chain() {
    assert_eq!(
        single_chain(r#""key1"."key2""#),
        vec![
            Selector::Key("key1".to_string()),
            Selector::Key("key2".to_string())
        ]
    );
}

#[test]
fn test_separating_dot_is_optional() {
    assert_eq!(single_chain(r#""a"."b""#), single_chain(r#""a""b""#));
    assert_eq!(single_chain("[1].[2]"), single_chain("[1][2]"));
    assert_eq!(
        single_chain("[1][2]"),
        vec![Selector::Index(1), Selector::Index(2)]
    );
}

#[test]
fn test_flatten_is_matched_before_any() {
    assert_eq!(
        single_chain(r#".."key""#),
        vec![Selector::Flatten, Selector::Key("key".to_string())]
    );
}

#[test]
fn test_flatten_after_key() {
    assert_eq!(
        single_chain(r#""key".."#),
        vec![Selector::Key("key".to_string()), Selector::Flatten]
    );
}

#[test]
fn test_any_followed_by_key() {
    assert_eq!(
        single_chain(r#"."key""#),
        vec![Selector::Any, Selector::Key("key".to_string())]
    );
}

#[test]
fn test_mixed_chain() {
    assert_eq!(
        single_chain(r#""a"[0]|"b"!"#),
        vec![
            Selector::Key("a".to_string()),
            Selector::Index(0),
            Selector::Filter("b".to_string()),
            Selector::Truncate
        ]
    );
}

#[test]
fn test_whitespace_between_tokens() {
    assert_eq!(
        single_chain(" \"a\" . [ 0 : 2 ] "),
        vec![
            Selector::Key("a".to_string()),
            Selector::Range {
                start: Some(0),
                end: Some(2)
            }
        ]
    );
}

// ============================================================================
// Multiple root chains
// ============================================================================

#[test]
fn test_multiple_roots() {
    let program = parse_selectors(r#""one"[2:0],"two","three""#).unwrap();
    assert_eq!(program.chains().len(), 3);
}

#[test]
fn test_multiple_any_roots() {
    let program = parse_selectors(".,.,.").unwrap();
    assert_eq!(program.chains().len(), 3);
    for chain in program.chains() {
        assert_eq!(chain.selectors(), &[Selector::Any]);
    }
}

#[test]
fn test_truncate_before_comma_is_allowed() {
    let program = parse_selectors(r#""a"!,"b""#).unwrap();
    assert_eq!(program.chains().len(), 2);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input_is_an_error() {
    assert!(matches!(
        parse_selectors(""),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_truncate_must_be_last() {
    let error = parse_selectors(r#"!"a""#).unwrap_err();
    match error {
        ParseError::Syntax(e) => {
            assert_eq!(e.column, 1);
            assert_eq!(e.expected, "',' or end of input after '!'");
        }
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_trailing_garbage_is_a_failure() {
    assert!(matches!(
        parse_selectors(r#""a"]"#),
        Err(ParseError::Failure(_))
    ));
}

#[test]
fn test_filter_requires_a_key() {
    assert!(matches!(
        parse_selectors("|5"),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_empty_property_is_an_error() {
    assert!(matches!(
        parse_selectors("{}"),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_property_trailing_comma_is_an_error() {
    assert!(matches!(
        parse_selectors(r#"{"a",}"#),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_double_colon_range_is_an_error() {
    assert!(matches!(
        parse_selectors("[1:2:3]"),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_dangling_dot_is_an_error() {
    assert!(matches!(
        parse_selectors(r#""a"."#),
        Err(ParseError::Syntax(_))
    ));
}

#[test]
fn test_unknown_character_is_an_error() {
    assert!(matches!(
        parse_selectors("$"),
        Err(ParseError::Syntax(_))
    ));
}
