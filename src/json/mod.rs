//! Purpose: JSON parsing boundary for decoded document text.
//! Exports: `parse` module with the decode helper and failure categories.
//! Role: Single seam for parser implementation so callsites avoid ad hoc decode logic.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub mod parse;
