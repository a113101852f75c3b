//! Pre-reduced plain-text count files (`sca-high.txt` and friends).

use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::{InputError, Result};

/// Read a count file. Returns `Ok(None)` when the file holds only whitespace.
pub fn try_read_count(path: &Path) -> Result<Option<u64>> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u64>()
        .map(Some)
        .map_err(|source| InputError::InvalidCount {
            content: trimmed.to_string(),
            source,
        })
}

/// Read a count file, falling back to `default` on any problem.
/// Missing files, unreadable files and non-integer content are logged, never raised.
pub fn read_count(path: &Path, default: u64) -> u64 {
    match try_read_count(path) {
        Ok(Some(count)) => count,
        Ok(None) => default,
        Err(InputError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "File not found");
            default
        }
        Err(e @ InputError::InvalidCount { .. }) => {
            warn!(path = %path.display(), error = %e, "Invalid content in count file");
            default
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Error reading count file");
            default
        }
    }
}
