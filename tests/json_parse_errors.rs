//! Purpose: Regression coverage for parse-failure category mapping.
//! Exports: Integration tests only.
//! Role: Verify stable category labels used by encode/decode diagnostics.
//! Invariants: Category mapping remains deterministic for representative errors.
//! Invariants: Tests avoid payload leakage; assertions target category/hint text only.
//! Notes: Uses source include to exercise internal helper logic without widening API surface.

#[path = "../src/json/parse.rs"]
mod parse;

use parse::ParseFailureCategory;
use serde_json::Value;

#[test]
fn category_mapping_handles_syntax_and_eof_errors() {
    let syntax_err = parse::from_str::<Value>(r#"{"a":}"#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&syntax_err),
        ParseFailureCategory::Syntax
    );

    let eof_err = parse::from_slice::<Value>(b"   ").unwrap_err();
    assert_eq!(parse::categorize_error(&eof_err), ParseFailureCategory::Eof);
}

#[test]
fn category_mapping_handles_string_literal_errors() {
    let escape_err = parse::from_slice::<String>(br#""bad \q""#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&escape_err),
        ParseFailureCategory::Escape
    );

    let control_err = parse::from_slice::<String>(b"\"line\nbreak\"").unwrap_err();
    assert_eq!(
        parse::categorize_error(&control_err),
        ParseFailureCategory::ControlCharacter
    );

    let trailing_err = parse::from_slice::<String>(br#""{"a":1}""#).unwrap_err();
    assert_eq!(
        parse::categorize_error(&trailing_err),
        ParseFailureCategory::TrailingCharacters
    );
}

#[test]
fn category_mapping_handles_depth_and_numeric_errors() {
    let depth = 256usize;
    let payload = format!("{}0{}", "[".repeat(depth), "]".repeat(depth));
    let depth_err = parse::from_str::<Value>(&payload).unwrap_err();
    assert_eq!(
        parse::categorize_error(&depth_err),
        ParseFailureCategory::DepthLimit
    );

    let number_err = parse::from_str::<Value>("[1e400]").unwrap_err();
    assert_eq!(
        parse::categorize_error(&number_err),
        ParseFailureCategory::NumericRange
    );

    assert_eq!(
        parse::categorize_message("stream did not contain valid UTF-8"),
        ParseFailureCategory::Utf8
    );
}

#[test]
fn hint_contains_category_and_context() {
    let err = parse::from_str::<Value>("[1e400]").unwrap_err();
    let hint = parse::hint_for_error(&err, "test.context");
    assert!(hint.contains("parse category: numeric-range"));
    assert!(hint.contains("context: test.context"));
}

#[test]
fn unknown_category_fallback_is_stable() {
    assert_eq!(
        parse::categorize_message("opaque parser issue"),
        ParseFailureCategory::Unknown
    );
    assert_eq!(ParseFailureCategory::Unknown.label(), "unknown");
}
