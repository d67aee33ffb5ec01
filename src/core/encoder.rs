//! Purpose: Turn a JSON document into the interior of a JSON string literal.
//! Exports: `encode`.
//! Role: Encode half of the transformation core; pure function over bytes.
//! Invariants: Input must parse as exactly one JSON value before anything is escaped.
//! Invariants: Output never carries the wrapper quotes of the string literal.
//! Invariants: Without compaction the original bytes are escaped verbatim.
use std::borrow::Cow;

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

pub fn encode(input: &[u8], compact: bool) -> Result<String, Error> {
    tracing::debug!(bytes = input.len(), compact, "encode");

    let value: Value = parse::from_slice(input).map_err(|err| {
        let hint = parse::hint_for_error(&err, "encode.input");
        Error::new(ErrorKind::InvalidJson)
            .with_message("invalid JSON")
            .with_hint(hint)
            .with_source(err)
    })?;

    let text: Cow<'_, str> = if compact {
        Cow::Owned(serde_json::to_string(&value).map_err(|err| {
            Error::new(ErrorKind::Serialization)
                .with_message("failed to compact JSON")
                .with_source(err)
        })?)
    } else {
        // serde_json rejects non-UTF-8 input, so this only trips on parser drift.
        Cow::Borrowed(std::str::from_utf8(input).map_err(|err| {
            Error::new(ErrorKind::InvalidJson)
                .with_message("input is not valid UTF-8")
                .with_source(err)
        })?)
    };

    let literal = serde_json::to_string(text.as_ref()).map_err(|err| {
        Error::new(ErrorKind::Serialization)
            .with_message("failed to escape JSON text")
            .with_source(err)
    })?;

    strip_wrapper_quotes(&literal)
        .map(str::to_owned)
        .ok_or_else(|| {
            Error::new(ErrorKind::Serialization)
                .with_message("escaped string is missing its quote delimiters")
        })
}

fn strip_wrapper_quotes(literal: &str) -> Option<&str> {
    literal.strip_prefix('"')?.strip_suffix('"')
}

#[cfg(test)]
mod tests {
    use super::{encode, strip_wrapper_quotes};
    use crate::core::error::ErrorKind;

    #[test]
    fn escapes_object_without_wrapper_quotes() {
        let out = encode(br#"{"name":"John","age":30}"#, false).unwrap();
        assert_eq!(out, r#"{\"name\":\"John\",\"age\":30}"#);
    }

    #[test]
    fn keeps_original_formatting_when_not_compacting() {
        let out = encode(b"{\n  \"name\": \"John\",\n  \"age\": 30\n}", false).unwrap();
        assert_eq!(out, r#"{\n  \"name\": \"John\",\n  \"age\": 30\n}"#);
    }

    #[test]
    fn compaction_drops_whitespace_and_keeps_key_order() {
        let out = encode(b"{\n  \"name\": \"John\",\n  \"age\": 30\n}", true).unwrap();
        assert_eq!(out, r#"{\"name\":\"John\",\"age\":30}"#);

        let out = encode(b"[\n  1,\n  2,\n  3\n]", true).unwrap();
        assert_eq!(out, "[1,2,3]");
    }

    #[test]
    fn escapes_quotes_and_backslashes_inside_strings() {
        let input = br#"{"message":"Hello \"world\"","path":"C:\\path\\to\\file"}"#;
        let out = encode(input, false).unwrap();
        assert_eq!(
            out,
            r#"{\"message\":\"Hello \\\"world\\\"\",\"path\":\"C:\\\\path\\\\to\\\\file\"}"#
        );
    }

    #[test]
    fn scalars_and_empty_containers_pass_through() {
        for input in ["{}", "[]", "true", "false", "null", "42"] {
            assert_eq!(encode(input.as_bytes(), false).unwrap(), input);
        }
    }

    #[test]
    fn top_level_string_keeps_inner_quotes_escaped() {
        let out = encode(br#""hi""#, false).unwrap();
        assert_eq!(out, r#"\"hi\""#);
    }

    #[test]
    fn non_ascii_is_emitted_unescaped() {
        let out = encode(r#"{"message":"こんにちは世界","emoji":"😀🚀"}"#.as_bytes(), false)
            .unwrap();
        assert!(out.contains("こんにちは世界"));
        assert!(out.contains("😀🚀"));
    }

    #[test]
    fn invalid_json_is_rejected_with_hint() {
        let cases = [
            r#"{"name":"John", "age":}"#,
            r#"{"name:"John", "age":30}"#,
            r#"{"name":"John" "age":30}"#,
            r#"{"name":"John""#,
            r#"{"array": [1, 2, 3 }"#,
            r#"{"name":"John", "age":30,}"#,
            "",
            "   \n\t",
            "This is not JSON",
        ];
        for input in cases {
            let err = encode(input.as_bytes(), false).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidJson, "input: {input:?}");
            let hint = err.hint().expect("hint");
            assert!(hint.contains("context: encode.input"), "hint: {hint}");
        }
    }

    #[test]
    fn empty_input_is_an_eof_failure() {
        let err = encode(b"", true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert!(err.hint().unwrap().contains("parse category: eof"));
    }

    #[test]
    fn strip_wrapper_quotes_removes_exactly_one_pair() {
        assert_eq!(strip_wrapper_quotes(r#""\"x\"""#), Some(r#"\"x\""#));
        assert_eq!(strip_wrapper_quotes(r#""""#), Some(""));
        assert_eq!(strip_wrapper_quotes("x"), None);
    }
}
