//! LaunchProfile and root/config resolution.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    checker::OutputFormat,
    config::{ConfigSource, CONFIG_ENV_KEY},
    lib::paths::is_nonempty_absolute,
};

/// Resolved launch profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchProfile {
    pub root: PathBuf,
    pub config: ConfigSource,
    pub format: OutputFormat,
}

/// Resolve the repository root: CLI override → current directory.
pub fn resolve_root(override_root: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(resolve_root_from(override_root, &cwd))
}

/// Resolve the config source in the order: CLI override → env var → `<root>/purity.toml`.
pub fn resolve_config_source(override_path: Option<PathBuf>, root: &Path) -> Result<ConfigSource> {
    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok(resolve_config_source_from(
        override_path,
        env::var_os(CONFIG_ENV_KEY),
        root,
        &cwd,
    ))
}

fn resolve_root_from(override_root: Option<PathBuf>, cwd: &Path) -> PathBuf {
    match override_root {
        Some(root) => absolutize(root, cwd),
        None => cwd.to_path_buf(),
    }
}

fn resolve_config_source_from(
    override_path: Option<PathBuf>,
    env_value: Option<OsString>,
    root: &Path,
    cwd: &Path,
) -> ConfigSource {
    let explicit = override_path.or_else(|| {
        env_value
            .filter(|value| !value.to_string_lossy().trim().is_empty())
            .map(PathBuf::from)
    });

    match explicit {
        Some(path) => ConfigSource::explicit(absolutize(path, cwd)),
        None => ConfigSource::default_for_root(root),
    }
}

fn absolutize(path: PathBuf, cwd: &Path) -> PathBuf {
    if is_nonempty_absolute(&path) {
        path
    } else {
        cwd.join(path)
    }
}
