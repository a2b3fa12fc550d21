use anyhow::Result;

use crate::common::{stderr, ScratchRepo, ENTRYPOINT_FILE};

#[test]
fn default_purity_toml_raises_the_limit() -> Result<()> {
    let repo = ScratchRepo::new()?.with_entrypoint_lines(280)?;
    repo.write("purity.toml", "[limits]\nmax_entrypoint_lines = 300\n")?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(0), "output: {output:?}");
    Ok(())
}

#[test]
fn explicit_config_redirects_paths() -> Result<()> {
    let repo = ScratchRepo::new()?;
    repo.write("src/agent.py", "# legacy\n")?;
    repo.write(
        "ci/purity.toml",
        "[layout]\nlegacy_path = \"src/agent.py\"\nentrypoint_path = \"src/agent/__init__.py\"\n",
    )?;

    let output = repo.run(&["--config", "ci/purity.toml"])?;
    assert_eq!(output.status.code(), Some(1), "output: {output:?}");
    assert!(
        stderr(&output).contains("src/agent.py"),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}

#[test]
fn strict_mode_rejects_missing_entrypoint() -> Result<()> {
    let repo = ScratchRepo::new()?;
    repo.write("purity.toml", "[limits]\nrequire_entrypoint = true\n")?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(3), "output: {output:?}");
    Ok(())
}

#[test]
fn invalid_config_is_an_operational_failure() -> Result<()> {
    let repo = ScratchRepo::new()?.with_entrypoint_lines(10)?;
    repo.write("purity.toml", "[layout]\nlegacy_path = \"../outside.py\"\n")?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(4), "output: {output:?}");
    assert!(
        stderr(&output).contains("layout.legacy_path"),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}

#[test]
fn missing_explicit_config_is_an_operational_failure() -> Result<()> {
    let repo = ScratchRepo::new()?;

    let output = repo.run(&["--config", "absent.toml"])?;
    assert_eq!(output.status.code(), Some(4), "output: {output:?}");
    Ok(())
}

#[test]
fn strict_mode_rejects_directory_entrypoint() -> Result<()> {
    let repo = ScratchRepo::new()?;
    repo.write("purity.toml", "[limits]\nrequire_entrypoint = true\n")?;
    std::fs::create_dir_all(repo.path().join(ENTRYPOINT_FILE))?;

    let output = repo.run(&[])?;
    assert_eq!(output.status.code(), Some(3), "output: {output:?}");
    Ok(())
}
