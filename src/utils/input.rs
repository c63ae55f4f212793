use std::fs;
use std::path::Path;

use crate::utils::error::Result;

/// Read a puzzle input file into a string.
///
/// Binaries pass a path anchored at the crate manifest, so running them
/// from any working directory finds the `input.txt` colocated with their
/// source. A missing file is an error; there is no fallback input.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    tracing::debug!("Reading puzzle input from {}", path.display());
    let text = fs::read_to_string(path)?;
    Ok(text)
}
