//! Helpers shared by every day's binary: argument parsing, input loading and
//! diagnostics setup.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the input file looked up in a day's directory when no path is given.
pub const DEFAULT_INPUT_NAME: &str = "inputs.txt";

#[derive(Debug, Parser)]
pub struct CliArgs {
    /// Puzzle input file, defaults to `inputs.txt` next to the day's manifest.
    pub input_path: Option<PathBuf>,
}

impl CliArgs {
    pub fn input_path_or<P: AsRef<Path>>(&self, default_dir: P) -> PathBuf {
        self.input_path
            .clone()
            .unwrap_or_else(|| default_dir.as_ref().join(DEFAULT_INPUT_NAME))
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

/// Read all non-empty lines of the file at `path`.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open given file({}).", path.display()))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for (ind, l) in reader.lines().enumerate() {
        let s = l.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.display()
            )
        })?;
        if s.trim().is_empty() {
            continue;
        }

        lines.push(s.trim_end().to_string());
    }

    debug!(path = %path.display(), count = lines.len(), "read input lines");
    Ok(lines)
}

/// Read the whole file at `path` as text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read given file({}).", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "read input text");
    Ok(text)
}
