use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::lib::{errors::ConfigError, paths::is_contained_relative};

pub const DEFAULT_LEGACY_PATH: &str = "modules/autonomous_agent.py";
pub const DEFAULT_ENTRYPOINT_PATH: &str = "modules/autonomous_agent/__init__.py";

/// Paths inspected by the checks, relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSection {
    pub legacy_path: PathBuf,
    pub entrypoint_path: PathBuf,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            legacy_path: PathBuf::from(DEFAULT_LEGACY_PATH),
            entrypoint_path: PathBuf::from(DEFAULT_ENTRYPOINT_PATH),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawLayoutSection {
    pub legacy_path: Option<PathBuf>,
    pub entrypoint_path: Option<PathBuf>,
}

pub fn parse_layout_section(
    raw: Option<RawLayoutSection>,
    path: &Path,
) -> Result<LayoutSection, ConfigError> {
    let layout_raw = raw.unwrap_or_default();
    let defaults = LayoutSection::default();

    let legacy_path = layout_raw.legacy_path.unwrap_or(defaults.legacy_path);
    validate_repo_path(&legacy_path, "layout.legacy_path", path)?;

    let entrypoint_path = layout_raw
        .entrypoint_path
        .unwrap_or(defaults.entrypoint_path);
    validate_repo_path(&entrypoint_path, "layout.entrypoint_path", path)?;

    Ok(LayoutSection {
        legacy_path,
        entrypoint_path,
    })
}

fn validate_repo_path(
    candidate: &Path,
    field: &'static str,
    path: &Path,
) -> Result<(), ConfigError> {
    if is_contained_relative(candidate) {
        return Ok(());
    }

    Err(ConfigError::InvalidField {
        path: path.to_path_buf(),
        field,
        message: format!(
            "`{}` must name a file relative to the repository root without `..`",
            candidate.display()
        ),
    })
}
