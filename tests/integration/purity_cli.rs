use anyhow::Result;
use serde_json::Value;

use crate::common::{stderr, stdout, ScratchRepo, ENTRYPOINT_FILE, LEGACY_FILE};

#[test]
fn legacy_file_fails_with_exit_one() -> Result<()> {
    let repo = ScratchRepo::new()?
        .with_legacy_file()?
        .with_entrypoint_lines(10)?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    let err = stderr(&output);
    assert!(err.contains(LEGACY_FILE), "stderr should name the file: {err}");
    assert!(
        err.contains("package layout"),
        "stderr should give the remediation: {err}"
    );
    Ok(())
}

#[test]
fn legacy_file_wins_even_with_oversized_entrypoint() -> Result<()> {
    let repo = ScratchRepo::new()?
        .with_legacy_file()?
        .with_entrypoint_lines(900)?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    Ok(())
}

#[test]
fn small_entrypoint_passes() -> Result<()> {
    let repo = ScratchRepo::new()?.with_entrypoint_lines(10)?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    let out = stdout(&output);
    assert!(out.starts_with("✅"), "stdout should report success: {out}");
    Ok(())
}

#[test]
fn oversized_entrypoint_fails_with_exit_two() -> Result<()> {
    let repo = ScratchRepo::new()?.with_entrypoint_lines(251)?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(2), "output: {output:?}");
    let out = stdout(&output);
    assert!(out.contains("251"), "warning should include the count: {out}");
    assert!(out.contains(ENTRYPOINT_FILE), "warning should name the file: {out}");
    Ok(())
}

#[test]
fn entrypoint_at_limit_passes() -> Result<()> {
    let repo = ScratchRepo::new()?.with_entrypoint_lines(250)?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    Ok(())
}

#[test]
fn missing_entrypoint_passes() -> Result<()> {
    let repo = ScratchRepo::new()?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> Result<()> {
    let repo = ScratchRepo::new()?.with_entrypoint_lines(300)?;

    let first = repo.run(&[])?;
    let second = repo.run(&[])?;
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
    Ok(())
}

#[test]
fn root_flag_checks_another_directory() -> Result<()> {
    let target = ScratchRepo::new()?.with_legacy_file()?;
    let cwd = ScratchRepo::new()?;
    let root = target.path().to_string_lossy().into_owned();

    let output = cwd.run(&["--root", &root])?;
    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    Ok(())
}

#[test]
fn missing_root_is_an_operational_failure() -> Result<()> {
    let repo = ScratchRepo::new()?;

    let output = repo.run(&["--root", "does/not/exist"])?;
    assert_eq!(output.status.code(), Some(4), "output: {output:?}");
    assert!(
        stderr(&output).contains("does not exist"),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}

#[test]
fn json_format_reports_status_and_count() -> Result<()> {
    let repo = ScratchRepo::new()?.with_entrypoint_lines(251)?;

    let output = repo.run(&["--format", "json"])?;
    assert_eq!(output.status.code(), Some(2), "output: {output:?}");
    let value: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(value["status"], "entrypoint_too_large");
    assert_eq!(value["exit_code"], 2);
    assert_eq!(value["entrypoint_lines"], 251);
    assert_eq!(value["limit"], 250);
    Ok(())
}

#[test]
fn unknown_flag_is_an_operational_failure() -> Result<()> {
    let repo = ScratchRepo::new()?;

    let output = repo.run(&["--no-such-flag"])?;
    assert_eq!(output.status.code(), Some(4), "output: {output:?}");
    Ok(())
}

#[test]
fn help_lists_flags_and_exits_zero() -> Result<()> {
    let repo = ScratchRepo::new()?;

    let output = repo.run(&["--help"])?;
    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    let out = stdout(&output);
    for needle in ["--root", "--config", "--format", "Exit codes"] {
        assert!(out.contains(needle), "--help should list {needle}, got:\n{out}");
    }
    Ok(())
}

#[test]
fn version_exits_zero() -> Result<()> {
    let repo = ScratchRepo::new()?;

    let output = repo.run(&["--version"])?;
    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    let out = stdout(&output);
    assert!(
        out.contains(env!("CARGO_PKG_VERSION")),
        "--version should print the crate version, got:\n{out}"
    );
    Ok(())
}
