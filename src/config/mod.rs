//! Load and validate the optional `purity.toml` policy file.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::error;

use crate::lib::errors::ConfigError;

pub mod layout;
pub mod limits;
pub mod telemetry;

pub use layout::{
    parse_layout_section, LayoutSection, RawLayoutSection, DEFAULT_ENTRYPOINT_PATH,
    DEFAULT_LEGACY_PATH,
};
pub use limits::{
    parse_limits_section, LimitsSection, RawLimitsSection, DEFAULT_MAX_ENTRYPOINT_LINES,
};

pub const CONFIG_ENV_KEY: &str = "PURITY_CONFIG_PATH";
pub const DEFAULT_CONFIG_FILE: &str = "purity.toml";

/// Where the configuration is read from and whether it must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub required: bool,
}

impl ConfigSource {
    /// An explicitly requested file (`--config` or `PURITY_CONFIG_PATH`).
    pub fn explicit(path: PathBuf) -> Self {
        Self {
            path,
            required: true,
        }
    }

    /// `purity.toml` under the repository root; used only when present.
    pub fn default_for_root(root: &Path) -> Self {
        Self {
            path: root.join(DEFAULT_CONFIG_FILE),
            required: false,
        }
    }
}

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct PurityConfig {
    pub layout: LayoutSection,
    pub limits: LimitsSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawPurityConfig {
    layout: Option<RawLayoutSection>,
    limits: Option<RawLimitsSection>,
}

impl PurityConfig {
    /// Built-in policy used when no file is present.
    pub fn builtin(source_path: PathBuf) -> Self {
        Self {
            layout: LayoutSection::default(),
            limits: LimitsSection::default(),
            source_path,
        }
    }

    /// Load configuration described by `source`.
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        let path = source.path.clone();
        let present = path.is_file();
        telemetry::log_source(&path, source.required, present);

        if !source.required && !present {
            let config = Self::builtin(path);
            telemetry::log_loaded(&config);
            return Ok(config);
        }

        let builder = ::config::Config::builder().add_source(
            ::config::File::from(path.clone())
                .format(::config::FileFormat::Toml)
                .required(source.required),
        );
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "purity_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawPurityConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "purity_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "purity_check::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawPurityConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let layout = parse_layout_section(raw.layout, &path)?;
        let limits = parse_limits_section(raw.limits, &path)?;

        Ok(Self {
            layout,
            limits,
            source_path: path,
        })
    }
}
