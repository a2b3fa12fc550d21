use std::path::Path;

use tracing::{debug, warn};

/// Returns true if anything exists at the legacy path under `root`.
///
/// Any entry counts, including a directory. An existence probe that fails
/// (e.g. permission denied on a parent) counts as absent.
pub fn legacy_file_exists(root: &Path, legacy_path: &Path) -> bool {
    let path = root.join(legacy_path);
    match path.try_exists() {
        Ok(exists) => {
            debug!(
                target: "purity_check::checker",
                path = %legacy_path.display(),
                exists,
                "Probed legacy file"
            );
            exists
        }
        Err(err) => {
            warn!(
                target: "purity_check::checker",
                path = %legacy_path.display(),
                reason = %err,
                "Could not probe legacy file; treating it as absent"
            );
            false
        }
    }
}
