//! Purpose: Turn the interior of a JSON string literal back into JSON text.
//! Exports: `decode`.
//! Role: Decode half of the transformation core; pure function over bytes.
//! Invariants: Input is re-quoted and must parse as exactly one string literal.
//! Invariants: The unescaped text must itself be a JSON value.
//! Invariants: Pretty output indents two spaces per level; compact output has no whitespace.
use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::json::parse;

pub fn decode(input: &[u8], pretty: bool) -> Result<String, Error> {
    tracing::debug!(bytes = input.len(), pretty, "decode");

    if input.is_empty() {
        return Err(Error::new(ErrorKind::InvalidEscapedString)
            .with_message("escaped string is empty")
            .with_hint("Provide the escaped contents of a JSON string, e.g. {\\\"x\\\":1}."));
    }

    let mut literal = Vec::with_capacity(input.len() + 2);
    literal.push(b'"');
    literal.extend_from_slice(input);
    literal.push(b'"');

    let text: String = parse::from_slice(&literal).map_err(|err| {
        let hint = parse::hint_for_error(&err, "decode.escaped");
        Error::new(ErrorKind::InvalidEscapedString)
            .with_message("invalid JSON string")
            .with_hint(hint)
            .with_source(err)
    })?;

    let value: Value = parse::from_str(&text).map_err(|err| {
        let hint = parse::hint_for_error(&err, "decode.content");
        Error::new(ErrorKind::DecodedContentNotJson)
            .with_message("decoded string is not valid JSON")
            .with_hint(hint)
            .with_source(err)
    })?;

    let rendered = if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    rendered.map_err(|err| {
        Error::new(ErrorKind::Serialization)
            .with_message("failed to serialize decoded JSON")
            .with_source(err)
    })
}
