//! Check outcomes, exit codes, and rendering.
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

pub const EXIT_PASSED: u8 = 0;
pub const EXIT_LEGACY_FILE_EXISTS: u8 = 1;
pub const EXIT_ENTRYPOINT_TOO_LARGE: u8 = 2;
pub const EXIT_ENTRYPOINT_MISSING: u8 = 3;
/// Invalid configuration, unusable root, or bad command line.
pub const EXIT_OPERATIONAL_FAILURE: u8 = 4;

/// How the result is printed.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Terminal result of one purity check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed { entrypoint_lines: usize },
    LegacyFileExists { path: PathBuf },
    EntrypointTooLarge { path: PathBuf, lines: usize, limit: usize },
    EntrypointMissing { path: PathBuf },
}

/// Machine-readable status name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    LegacyFileExists,
    EntrypointTooLarge,
    EntrypointMissing,
}

impl CheckStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::LegacyFileExists => "legacy_file_exists",
            CheckStatus::EntrypointTooLarge => "entrypoint_too_large",
            CheckStatus::EntrypointMissing => "entrypoint_missing",
        }
    }
}

/// Output stream a rendered report belongs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Rendered report ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub stream: Stream,
    pub text: String,
}

/// Outcome plus the policy values it was measured against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub outcome: CheckOutcome,
    pub legacy_path: PathBuf,
    pub entrypoint_path: PathBuf,
    pub limit: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    status: CheckStatus,
    exit_code: u8,
    message: String,
    legacy_path: &'a Path,
    entrypoint_path: &'a Path,
    entrypoint_lines: Option<usize>,
    limit: usize,
}

impl CheckOutcome {
    pub const fn status(&self) -> CheckStatus {
        match self {
            CheckOutcome::Passed { .. } => CheckStatus::Passed,
            CheckOutcome::LegacyFileExists { .. } => CheckStatus::LegacyFileExists,
            CheckOutcome::EntrypointTooLarge { .. } => CheckStatus::EntrypointTooLarge,
            CheckOutcome::EntrypointMissing { .. } => CheckStatus::EntrypointMissing,
        }
    }

    pub const fn exit_code(&self) -> u8 {
        match self {
            CheckOutcome::Passed { .. } => EXIT_PASSED,
            CheckOutcome::LegacyFileExists { .. } => EXIT_LEGACY_FILE_EXISTS,
            CheckOutcome::EntrypointTooLarge { .. } => EXIT_ENTRYPOINT_TOO_LARGE,
            CheckOutcome::EntrypointMissing { .. } => EXIT_ENTRYPOINT_MISSING,
        }
    }

    /// Measured entrypoint size, if the entrypoint check ran.
    pub fn entrypoint_lines(&self) -> Option<usize> {
        match self {
            CheckOutcome::Passed { entrypoint_lines } => Some(*entrypoint_lines),
            CheckOutcome::EntrypointTooLarge { lines, .. } => Some(*lines),
            CheckOutcome::EntrypointMissing { .. } => Some(0),
            CheckOutcome::LegacyFileExists { .. } => None,
        }
    }

    fn glyph(&self) -> &'static str {
        match self {
            CheckOutcome::Passed { .. } => "✅",
            CheckOutcome::LegacyFileExists { .. } | CheckOutcome::EntrypointMissing { .. } => "❌",
            CheckOutcome::EntrypointTooLarge { .. } => "⚠️",
        }
    }

    fn stream(&self) -> Stream {
        match self {
            CheckOutcome::Passed { .. } | CheckOutcome::EntrypointTooLarge { .. } => Stream::Stdout,
            CheckOutcome::LegacyFileExists { .. } | CheckOutcome::EntrypointMissing { .. } => {
                Stream::Stderr
            }
        }
    }
}

impl CheckReport {
    pub fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }

    /// Human-readable message without the status glyph.
    pub fn message(&self) -> String {
        match &self.outcome {
            CheckOutcome::Passed { entrypoint_lines } => format!(
                "Purity check passed: {} has {} lines (limit {}).",
                self.entrypoint_path.display(),
                entrypoint_lines,
                self.limit
            ),
            CheckOutcome::LegacyFileExists { path } => format!(
                "Legacy file {} exists. Delete it and use the package layout ({}/).",
                path.display(),
                path.with_extension("").display()
            ),
            CheckOutcome::EntrypointTooLarge { path, lines, limit } => format!(
                "{} has {} lines (limit {}). Keep the package entrypoint minimal.",
                path.display(),
                lines,
                limit
            ),
            CheckOutcome::EntrypointMissing { path } => format!(
                "Entrypoint {} is missing; the package layout requires it.",
                path.display()
            ),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<Rendered, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(Rendered {
                stream: self.outcome.stream(),
                text: format!("{} {}", self.outcome.glyph(), self.message()),
            }),
            OutputFormat::Json => {
                let payload = JsonReport {
                    status: self.outcome.status(),
                    exit_code: self.exit_code(),
                    message: self.message(),
                    legacy_path: &self.legacy_path,
                    entrypoint_path: &self.entrypoint_path,
                    entrypoint_lines: self.outcome.entrypoint_lines(),
                    limit: self.limit,
                };
                Ok(Rendered {
                    stream: Stream::Stdout,
                    text: serde_json::to_string_pretty(&payload)?,
                })
            }
        }
    }
}
