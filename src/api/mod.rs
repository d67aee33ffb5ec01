//! Purpose: Define the public Rust API boundary for the escape/unescape core.
//! Exports: `encode`, `decode`, `Error`, `ErrorKind`.
//! Role: Public, additive-only surface; hides internal parser and core modules.
//! Invariants: This module is the only public path to the transformation core.
//! Invariants: Internal modules remain private and are not directly exposed.

#[doc(hidden)]
pub use crate::core::error::to_exit_code;
pub use crate::core::error::{Error, ErrorKind};

/// Escape a JSON document into the interior of a JSON string literal.
///
/// The input must parse as a single JSON value. With `compact` set, the value
/// is re-serialized without insignificant whitespace before escaping;
/// otherwise the input bytes are escaped as given. The surrounding quote
/// characters of the literal are not part of the result.
///
/// # Errors
///
/// [`ErrorKind::InvalidJson`] when the input is not JSON, and
/// [`ErrorKind::Serialization`] if re-serialization fails.
pub fn encode(input: &[u8], compact: bool) -> Result<String, Error> {
    crate::core::encoder::encode(input, compact)
}

/// Unescape the interior of a JSON string literal back into JSON text.
///
/// With `pretty` set, the output is indented two spaces per nesting level.
///
/// # Errors
///
/// [`ErrorKind::InvalidEscapedString`] when the input (empty, or once wrapped
/// in quotes) is not a valid string literal, [`ErrorKind::DecodedContentNotJson`]
/// when the unescaped text is not JSON, and [`ErrorKind::Serialization`] if the
/// value cannot be re-serialized.
pub fn decode(input: &[u8], pretty: bool) -> Result<String, Error> {
    crate::core::decoder::decode(input, pretty)
}
