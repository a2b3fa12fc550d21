//! Telemetry initialization and check-run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs on stderr.
///
/// The default filter is `warn` so a plain run prints only the status line.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_file(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one purity check run.
pub struct CheckSpan {
    span: Span,
    started_at: Instant,
}

impl CheckSpan {
    /// Start a run span for `root`.
    pub fn start(root: &std::path::Path) -> Self {
        let span = info_span!(
            target: "purity_check::checker",
            "purity_check",
            root = %root.display()
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Enter the span for the duration of the returned guard.
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Close the span while recording the outcome.
    pub fn finish(self, status: &'static str, exit_code: u8) {
        let elapsed_us = self.started_at.elapsed().as_micros();
        let _entered = self.span.enter();
        info!(
            target: "purity_check::checker",
            status = status,
            exit_code = exit_code,
            elapsed_us = elapsed_us,
            "Completed purity check"
        );
    }
}
