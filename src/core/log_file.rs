//! Reading the time log from disk.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read all lines of the log file. Invalid UTF-8 is replaced, not rejected.
pub fn read_lines(path: &Path) -> AppResult<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| AppError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    let lines: Vec<String> = content.lines().map(str::to_string).collect();

    debug!(path = %path.display(), lines = lines.len(), "read log file");
    Ok(lines)
}
