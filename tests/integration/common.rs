use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Result};
use tempfile::TempDir;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_purity-check");
pub const LEGACY_FILE: &str = "modules/autonomous_agent.py";
pub const ENTRYPOINT_FILE: &str = "modules/autonomous_agent/__init__.py";

/// Scratch repository laid out under a temporary directory.
pub struct ScratchRepo {
    dir: TempDir,
}

impl ScratchRepo {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("failed to create scratch repository")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(path)
    }

    pub fn with_legacy_file(self) -> Result<Self> {
        self.write(LEGACY_FILE, "# legacy single-file module\n")?;
        Ok(self)
    }

    pub fn with_entrypoint_lines(self, lines: usize) -> Result<Self> {
        self.write(ENTRYPOINT_FILE, &"pass\n".repeat(lines))?;
        Ok(self)
    }

    /// Run the binary with the repository as working directory.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        Command::new(BINARY_PATH)
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("PURITY_CONFIG_PATH")
            .env_remove("RUST_LOG")
            .output()
            .context("failed to spawn purity-check")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
