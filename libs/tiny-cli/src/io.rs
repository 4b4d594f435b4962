//! # Input and Output
//!
//! Paths or the standard streams. A missing path or `-` means the stream.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

fn is_stream(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p.as_os_str() == "-")
}

/// Read all of `path`, or stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if !is_stream(Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Write `text` to `path`, or stdout.
pub fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) if !is_stream(Some(path)) => fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display())),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write standard output")
        }
    }
}
