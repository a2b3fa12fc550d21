//! Shared helpers reused across modules (e.g., path validation).

use std::path::{Component, Path};

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}

/// Returns true if the path is relative, names at least one entry, and stays
/// below its base (no `..`, root, or prefix components).
pub fn is_contained_relative(path: &Path) -> bool {
    if path.as_os_str().is_empty() || path.is_absolute() {
        return false;
    }
    let mut names_entry = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => names_entry = true,
            Component::CurDir => {}
            _ => return false,
        }
    }
    names_entry
}
