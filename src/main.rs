//! Entry point for purity-check.
use std::process::ExitCode;

use clap::Parser;
use purity_check::{
    checker::EXIT_OPERATIONAL_FAILURE,
    cli::CheckArgs,
    lib::telemetry,
    runtime::{self, RunExit},
};

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RunExit> {
    telemetry::init_tracing().map_err(RunExit::from_error)?;
    let args = match CheckArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return Ok(report_usage(err)),
    };
    let profile = args.build().map_err(RunExit::from_error)?;
    runtime::run_check(profile)
}

/// clap exits with 2 on usage errors, which is reserved for an oversized
/// entrypoint; remap those while keeping `--help`/`--version` successful.
fn report_usage(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::from(EXIT_OPERATIONAL_FAILURE)
    } else {
        ExitCode::SUCCESS
    }
}
