//! CLI entrypoint module structure.
pub mod args;
pub mod profile;

pub use args::CheckArgs;
pub use profile::{resolve_config_source, resolve_root, LaunchProfile};
