//! Library crate root re-exporting checker, configuration, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod checker;
pub mod cli;
pub mod config;
pub mod runtime;
