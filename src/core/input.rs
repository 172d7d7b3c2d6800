//! Purpose: Read the input document's raw bytes from disk.
//! Exports: `DEFAULT_INPUT`, `read_input`.
//! Role: Single I/O seam of the pipeline; everything downstream is pure.
//! Invariants: The file is opened read-only and released before returning.

use std::io;
use std::path::Path;

use crate::core::error::{Error, ErrorKind};

/// Input path, resolved against the process working directory.
pub const DEFAULT_INPUT: &str = "data.json";

pub fn read_input(path: &Path) -> Result<Vec<u8>, Error> {
    let bytes = std::fs::read(path).map_err(|err| {
        let kind = match err.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            _ => ErrorKind::Io,
        };
        Error::new(kind)
            .with_message("failed to read input")
            .with_path(path)
            .with_source(err)
    })?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read input");
    Ok(bytes)
}
