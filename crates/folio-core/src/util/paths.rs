//! Generic path utilities.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// ```
/// use folio_core::util::paths::expand_tilde;
///
/// assert_eq!(expand_tilde("/abs/path"), std::path::PathBuf::from("/abs/path"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Directory containing the running executable, if it can be determined.
pub fn binary_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Walk up from `start` looking for a directory that contains `marker`.
///
/// `marker` may be a nested relative path such as `content/profile-en.json`.
/// Returns the first ancestor (including `start` itself) for which
/// `ancestor.join(marker)` exists.
pub fn find_dir_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}
