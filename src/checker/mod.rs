//! Repository purity checks: legacy file absence and entrypoint size.
use std::{
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use crate::{
    config::PurityConfig,
    lib::{errors::CheckError, telemetry::CheckSpan},
};

pub mod entrypoint;
pub mod legacy;
pub mod report;

pub use entrypoint::{exceeds_limit, measure_entrypoint, EntrypointMeasure};
pub use legacy::legacy_file_exists;
pub use report::{
    CheckOutcome, CheckReport, CheckStatus, OutputFormat, Rendered, Stream, EXIT_ENTRYPOINT_MISSING,
    EXIT_ENTRYPOINT_TOO_LARGE, EXIT_LEGACY_FILE_EXISTS, EXIT_OPERATIONAL_FAILURE, EXIT_PASSED,
};

/// Resolved paths and threshold for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckPolicy {
    pub legacy_path: PathBuf,
    pub entrypoint_path: PathBuf,
    pub max_entrypoint_lines: usize,
    pub require_entrypoint: bool,
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self::from(&PurityConfig::builtin(PathBuf::new()))
    }
}

impl From<&PurityConfig> for CheckPolicy {
    fn from(config: &PurityConfig) -> Self {
        Self {
            legacy_path: config.layout.legacy_path.clone(),
            entrypoint_path: config.layout.entrypoint_path.clone(),
            max_entrypoint_lines: config.limits.max_entrypoint_lines,
            require_entrypoint: config.limits.require_entrypoint,
        }
    }
}

/// Evaluate both checks under `root`. The legacy check runs first and wins.
pub fn check(root: &Path, policy: &CheckPolicy) -> Result<CheckReport, CheckError> {
    ensure_root(root)?;

    let outcome = if legacy_file_exists(root, &policy.legacy_path) {
        CheckOutcome::LegacyFileExists {
            path: policy.legacy_path.clone(),
        }
    } else {
        let measure = measure_entrypoint(root, &policy.entrypoint_path);
        if measure.missing && policy.require_entrypoint {
            CheckOutcome::EntrypointMissing {
                path: policy.entrypoint_path.clone(),
            }
        } else if exceeds_limit(measure.lines, policy.max_entrypoint_lines) {
            CheckOutcome::EntrypointTooLarge {
                path: policy.entrypoint_path.clone(),
                lines: measure.lines,
                limit: policy.max_entrypoint_lines,
            }
        } else {
            CheckOutcome::Passed {
                entrypoint_lines: measure.lines,
            }
        }
    };

    Ok(CheckReport {
        outcome,
        legacy_path: policy.legacy_path.clone(),
        entrypoint_path: policy.entrypoint_path.clone(),
        limit: policy.max_entrypoint_lines,
    })
}

/// Run the checks, print the result, and return the process exit code.
pub fn run(root: &Path, policy: &CheckPolicy, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let span = CheckSpan::start(root);
    let report = {
        let _entered = span.enter();
        check(root, policy)?
    };

    let rendered = report.render(format)?;
    match rendered.stream {
        Stream::Stdout => println!("{}", rendered.text),
        Stream::Stderr => eprintln!("{}", rendered.text),
    }

    span.finish(report.outcome.status().as_str(), report.exit_code());
    Ok(ExitCode::from(report.exit_code()))
}

fn ensure_root(root: &Path) -> Result<(), CheckError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CheckError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(CheckError::RootMissing {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(CheckError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        }),
    }
}
