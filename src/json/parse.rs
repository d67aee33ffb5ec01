//! Purpose: Provide the internal JSON decode entrypoints and failure categories.
//! Exports: `from_slice`, `from_str`, `ParseFailureCategory`, `categorize_error`,
//! `categorize_message`, `hint_for_error`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category labels are stable kebab-case strings.
//! Invariants: Hints never echo payload bytes; only category and context.
#![allow(dead_code)]

use serde::de::DeserializeOwned;
use serde_json::error::Category;

pub(crate) fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(input)
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Eof,
    Escape,
    ControlCharacter,
    TrailingCharacters,
    Utf8,
    DepthLimit,
    NumericRange,
    Unknown,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Escape => "escape",
            ParseFailureCategory::ControlCharacter => "control-character",
            ParseFailureCategory::TrailingCharacters => "trailing-characters",
            ParseFailureCategory::Utf8 => "utf8",
            ParseFailureCategory::DepthLimit => "depth-limit",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::Unknown => "unknown",
        }
    }
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match categorize_message(&err.to_string()) {
        ParseFailureCategory::Unknown => match err.classify() {
            Category::Eof => ParseFailureCategory::Eof,
            Category::Syntax => ParseFailureCategory::Syntax,
            Category::Io | Category::Data => ParseFailureCategory::Unknown,
        },
        category => category,
    }
}

// Message fragments come from serde_json's ErrorCode display strings.
pub(crate) fn categorize_message(message: &str) -> ParseFailureCategory {
    let lower = message.to_ascii_lowercase();
    if lower.contains("recursion limit") {
        ParseFailureCategory::DepthLimit
    } else if lower.contains("utf-8") || lower.contains("utf8") {
        ParseFailureCategory::Utf8
    } else if lower.contains("control character") {
        ParseFailureCategory::ControlCharacter
    } else if lower.contains("escape") || lower.contains("unicode code point") {
        ParseFailureCategory::Escape
    } else if lower.contains("trailing characters") {
        ParseFailureCategory::TrailingCharacters
    } else if lower.contains("out of range") {
        ParseFailureCategory::NumericRange
    } else if lower.contains("eof while parsing") {
        ParseFailureCategory::Eof
    } else {
        ParseFailureCategory::Unknown
    }
}

pub(crate) fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; context: {context}",
        categorize_error(err).label()
    )
}
