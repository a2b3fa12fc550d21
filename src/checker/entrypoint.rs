use std::path::Path;

use tracing::{debug, warn};

use crate::lib::fs::{count_lines, LineCount};

/// Size of the entrypoint as seen by the threshold check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntrypointMeasure {
    pub lines: usize,
    pub missing: bool,
}

/// Measure the entrypoint under `root`, normalizing missing or unreadable
/// files to zero lines.
///
/// `missing` is set whenever no regular file sits at the path, so a directory
/// in place of the entrypoint counts as missing.
pub fn measure_entrypoint(root: &Path, entrypoint_path: &Path) -> EntrypointMeasure {
    let path = root.join(entrypoint_path);
    let count = count_lines(&path);
    let missing = match &count {
        LineCount::Counted(lines) => {
            debug!(
                target: "purity_check::checker",
                path = %entrypoint_path.display(),
                lines,
                "Counted entrypoint lines"
            );
            false
        }
        LineCount::Missing => {
            debug!(
                target: "purity_check::checker",
                path = %entrypoint_path.display(),
                "Entrypoint not found; counting it as 0 lines"
            );
            true
        }
        LineCount::Unreadable(err) => {
            warn!(
                target: "purity_check::checker",
                path = %entrypoint_path.display(),
                reason = %err,
                "Entrypoint unreadable; counting it as 0 lines"
            );
            !path.is_file()
        }
    };

    EntrypointMeasure {
        lines: count.lines_or_zero(),
        missing,
    }
}

/// The threshold is exclusive: exactly `limit` lines passes.
pub fn exceeds_limit(lines: usize, limit: usize) -> bool {
    lines > limit
}
