use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::error::{QaplanError, Result};

/// Read command input from a file, or from stdin when `path` is `None` or `-`.
///
/// Reading from an interactive terminal is refused so the command does not
/// hang waiting for input nobody is going to type.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p).map_err(|e| {
            QaplanError::Io(io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", p.display(), e),
            ))
        }),
        _ => {
            if is_stdin_tty() {
                return Err(QaplanError::EmptyInput);
            }
            read_stdin().map_err(QaplanError::from)
        }
    }
}

/// Read all input from stdin (for piped input)
pub fn read_stdin() -> io::Result<String> {
    let mut buf = String::new();
    io::stdin().lock().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Check if stdin is a TTY (interactive)
pub fn is_stdin_tty() -> bool {
    io::stdin().is_terminal()
}
