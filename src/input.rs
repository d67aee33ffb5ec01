//! Purpose: Resolve and read the CLI input bytes from file, inline text, or stdin.
//! Exports: `InputSource`, `resolve_input_source`, `read_input`.
//! Role: Keep source precedence and read errors out of `main.rs`.
//! Invariants: Precedence is file, then inline text, then stdin.
//! Invariants: An interactive or empty stdin is a usage error, never a blocking read.
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use jsonstr::api::{Error, ErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputSource {
    File(PathBuf),
    Inline(String),
    Stdin,
}

impl InputSource {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            InputSource::File(_) => "file",
            InputSource::Inline(_) => "inline",
            InputSource::Stdin => "stdin",
        }
    }
}

pub(crate) fn resolve_input_source(file: Option<PathBuf>, json: Option<String>) -> InputSource {
    match (file, json) {
        (Some(path), _) => InputSource::File(path),
        (None, Some(text)) => InputSource::Inline(text),
        (None, None) => InputSource::Stdin,
    }
}

pub(crate) fn read_input(source: InputSource) -> Result<Vec<u8>, Error> {
    let bytes = match source {
        InputSource::File(path) => read_file(&path)?,
        InputSource::Inline(text) => text.into_bytes(),
        InputSource::Stdin => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(missing_input_error());
            }
            let bytes = read_stream(stdin.lock())?;
            if bytes.is_empty() {
                return Err(missing_input_error());
            }
            bytes
        }
    };
    tracing::debug!(bytes = bytes.len(), "read input");
    Ok(bytes)
}

fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    std::fs::read(path).map_err(|err| {
        let message = if err.kind() == io::ErrorKind::NotFound {
            "input file not found"
        } else {
            "failed to read input file"
        };
        Error::new(ErrorKind::Io)
            .with_message(message)
            .with_path(path)
            .with_source(err)
    })
}

fn read_stream<R: Read>(mut reader: R) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(|err| {
        Error::new(ErrorKind::Io)
            .with_message("failed to read from stdin")
            .with_source(err)
    })?;
    Ok(buf)
}

fn missing_input_error() -> Error {
    Error::new(ErrorKind::Usage)
        .with_message("no input provided")
        .with_hint("Use --file, --json, or pipe data to stdin.")
}
