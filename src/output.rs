//! JSON output to stdout or a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Writes `value` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value).context("failed to encode JSON")?;
            writer.flush()?;
            info!(path = %path.display(), "output written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            serde_json::to_writer_pretty(&mut lock, value).context("failed to encode JSON")?;
            writeln!(lock)?;
        }
    }
    Ok(())
}
