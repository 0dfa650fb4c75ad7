use std::path::PathBuf;

/// Returns the root `.qaplan` directory path.
///
/// Respects the `QAPLAN_ROOT` environment variable if set, otherwise defaults
/// to `.qaplan` relative to the current directory.
pub fn qaplan_root() -> PathBuf {
    if let Ok(root) = std::env::var("QAPLAN_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".qaplan")
    }
}
