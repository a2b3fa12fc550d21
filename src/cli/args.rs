//! CLI argument definitions and `LaunchProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_source, resolve_root, LaunchProfile};
use crate::checker::OutputFormat;

/// Command-line arguments. All flags are optional; a bare invocation checks
/// the current directory with the built-in policy.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "purity-check",
    author,
    version,
    about = "Fail when the legacy module file exists or the package entrypoint grows too large",
    long_about = None,
    after_help = "Exit codes: 0 pass, 1 legacy file present, 2 entrypoint too large, 3 entrypoint missing (strict mode), 4 operational failure."
)]
pub struct CheckArgs {
    /// Repository root to check (defaults to the current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
    /// Path to purity.toml (overrides PURITY_CONFIG_PATH).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
    /// Output rendering.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CheckArgs {
    /// Build a `LaunchProfile` from CLI args and environment variables.
    pub fn build(self) -> Result<LaunchProfile> {
        let root = resolve_root(self.root)?;
        let config = resolve_config_source(self.config_override, &root)?;

        Ok(LaunchProfile {
            root,
            config,
            format: self.format,
        })
    }
}
