//! Purpose: Internal JSON parsing boundary shared by the encoder and decoder.
//! Exports: `parse` module with decode helpers and failure categorization.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: Core JSON decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
