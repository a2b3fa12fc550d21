//! Glue between the launch profile, configuration, and the checker.
use std::process::ExitCode;

use anyhow::Error;
use tracing::info;

use crate::{
    checker::{self, CheckPolicy, EXIT_OPERATIONAL_FAILURE},
    cli::LaunchProfile,
    config::PurityConfig,
};

/// Failure that stopped the run before a check outcome was produced.
#[derive(Debug)]
pub struct RunExit {
    message: String,
    exit_code: u8,
}

impl RunExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: EXIT_OPERATIONAL_FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("purity-check: {}", self.message);
        ExitCode::from(self.exit_code)
    }
}

/// Load the policy for `profile` and run the checks.
pub fn run_check(profile: LaunchProfile) -> Result<ExitCode, RunExit> {
    let config = PurityConfig::load(&profile.config).map_err(RunExit::from_error)?;
    let policy = CheckPolicy::from(&config);
    info!(
        target: "purity_check::runtime",
        root = %profile.root.display(),
        config_path = %config.source_path.display(),
        format = ?profile.format,
        "Starting purity check"
    );

    checker::run(&profile.root, &policy, profile.format).map_err(RunExit::from_error)
}
