//! # Program Execution
//!
//! Runs compiled JavaScript with an external interpreter. The program is
//! written into a fresh temporary directory next to the bundled runtime, so
//! its `require("./runtime")` resolves without touching the caller's files.

use crate::RUNTIME_JS;
use anyhow::{Context, Result};
use config::constants::RUNTIME_FILE_NAME;
use log::debug;
use std::fs;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// File name the compiled program is written under.
pub const PROGRAM_FILE_NAME: &str = "program.js";

/// Run `js` with the interpreter at `node`, inheriting stdin, stdout and
/// stderr. Returns the interpreter's exit status.
pub fn run(js: &str, node: &Path) -> Result<ExitStatus> {
    let dir = tempfile::Builder::new()
        .prefix("tinyc-")
        .tempdir()
        .context("failed to create a temporary directory")?;

    let program = dir.path().join(PROGRAM_FILE_NAME);
    fs::write(&program, js).with_context(|| format!("failed to write {}", program.display()))?;
    let runtime = dir.path().join(RUNTIME_FILE_NAME);
    fs::write(&runtime, RUNTIME_JS)
        .with_context(|| format!("failed to write {}", runtime.display()))?;

    debug!("running {} with {}", program.display(), node.display());
    let status = Command::new(node)
        .arg(&program)
        .current_dir(dir.path())
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("failed to start {}", node.display()))?;
    debug!("{} exited with {status}", node.display());
    Ok(status)
}
