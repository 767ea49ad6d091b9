pub mod decode;
pub mod encode;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Writes fully assembled conversion output to `path`, or to stdout when no
/// path is given. Output is built in memory first, so a failed conversion
/// never leaves a half-written file behind.
pub(crate) fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("Failed to write '{}'", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}
