// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist -> Ok
/// - file exists and `force` -> Ok
/// - file exists without `force` -> Export error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    Err(AppError::Export(format!(
        "{} not overwritten (use --force)",
        path.display()
    )))
}
