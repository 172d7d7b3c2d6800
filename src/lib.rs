//! Purpose: Library crate backing the `datapeek` CLI and its tests.
//! Exports: `core` (input, UTF-16 decoding, errors), `json` (parse boundary), `summary`.
//! Role: Pure pipeline from file bytes to summary lines; the binary only prints.
//! Invariants: Modules prefer explicit inputs/outputs over hidden state.
pub mod core;
pub mod json;
pub mod pyfmt;
pub mod summary;
