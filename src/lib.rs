//! Purpose: Library crate backing the `json-to-string` CLI and tests.
//! Exports: `api` (encode/decode operations, errors, exit codes).
//! Role: Pure transformation core; all I/O lives in the binary.
//! Invariants: Core operations are stateless and side-effect free apart from tracing events.
pub mod api;
mod core;
mod json;
