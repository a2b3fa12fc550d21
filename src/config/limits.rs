use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_MAX_ENTRYPOINT_LINES: usize = 250;

/// Thresholds applied to the entrypoint file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitsSection {
    /// Largest accepted line count; the check fails only above it.
    pub max_entrypoint_lines: usize,
    /// Treat a missing entrypoint as a failure instead of zero lines.
    pub require_entrypoint: bool,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            max_entrypoint_lines: DEFAULT_MAX_ENTRYPOINT_LINES,
            require_entrypoint: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLimitsSection {
    pub max_entrypoint_lines: Option<usize>,
    pub require_entrypoint: Option<bool>,
}

pub fn parse_limits_section(
    raw: Option<RawLimitsSection>,
    path: &Path,
) -> Result<LimitsSection, ConfigError> {
    let limits_raw = raw.unwrap_or_default();
    let max_entrypoint_lines = limits_raw
        .max_entrypoint_lines
        .unwrap_or(DEFAULT_MAX_ENTRYPOINT_LINES);
    if max_entrypoint_lines == 0 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "limits.max_entrypoint_lines",
            message: "must be greater than 0".into(),
        });
    }

    Ok(LimitsSection {
        max_entrypoint_lines,
        require_entrypoint: limits_raw.require_entrypoint.unwrap_or(false),
    })
}
