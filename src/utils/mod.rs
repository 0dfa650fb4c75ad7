pub mod cursor;
pub mod io;

use std::fs;
use std::path::Path;

use crate::error::{QaplanError, Result};
use crate::paths::qaplan_root;

pub use cursor::{LineCursor, bullet_text, is_banner, read_field};
pub use io::{is_stdin_tty, read_input};

/// Ensure the parent directory of a path exists, creating it if necessary.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            QaplanError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to create directory at {}: {}",
                    format_relative_path(parent),
                    e
                ),
            ))
        })?;
    }
    Ok(())
}

/// Format a path for display relative to the `.qaplan` root directory.
///
/// Falls back to the path as given when it lives outside the root.
pub fn format_relative_path(path: &Path) -> String {
    path.strip_prefix(qaplan_root())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
