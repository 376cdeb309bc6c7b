//! Reading input files.
//!
//! Everything here is a *source* operation: failures are fatal for the run
//! and surface as [`ReportError`]. The word pipeline reads raw bytes so it
//! can turn a decode failure into a message instead.

use crate::error::{ReportError, Result};
use std::path::Path;

/// Read `path` fully into memory.
///
/// # Errors
///
/// Returns [`ReportError::SourceNotFound`] when the path does not exist and
/// [`ReportError::Io`] for any other read failure.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(ReportError::SourceNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Read `path` fully and decode it as UTF-8.
///
/// # Errors
///
/// Same as [`read_bytes`], plus [`ReportError::Decode`] when the content is
/// not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|_| ReportError::Decode(path.display().to_string()))
}
