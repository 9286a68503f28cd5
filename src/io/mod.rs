pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub use output::{create_writer, OutputFormat, OutputWriter};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read signatures from stdin")?;
    Ok(buf)
}

/// Read a signature file, treating `-` as stdin.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        read_stdin()
    } else {
        read_file(path)
    }
}
