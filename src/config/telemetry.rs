use std::path::Path;

use tracing::{debug, info};

use super::{PurityConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_FILE};

pub fn log_source(path: &Path, required: bool, present: bool) {
    if required {
        info!(
            target: "purity_check::config",
            path = %path.display(),
            "Loading explicitly requested configuration file"
        );
    } else if present {
        debug!(
            target: "purity_check::config",
            path = %path.display(),
            "Loading default purity.toml from repository root"
        );
    } else {
        debug!(
            target: "purity_check::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_FILE,
            "No configuration file found; using built-in policy"
        );
    }
}

pub fn log_loaded(config: &PurityConfig) {
    info!(
        target: "purity_check::config",
        path = %config.source_path.display(),
        legacy_path = %config.layout.legacy_path.display(),
        entrypoint_path = %config.layout.entrypoint_path.display(),
        max_entrypoint_lines = config.limits.max_entrypoint_lines,
        require_entrypoint = config.limits.require_entrypoint,
        "Configuration resolved"
    );
}
