// crates/check_bal/src/lib.rs

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;

pub mod config;
pub mod report;

pub use config::{build_cli, Config};
pub use report::{render_report, write_report, ReportOptions};

/// Reads the file named by `config` and writes its span report to `out`.
///
/// # Errors
///
/// Returns an error if the file cannot be read as UTF-8 text or if writing to
/// `out` fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let path = &config.input;
    let text = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    log::debug!("read {} bytes from {}", text.len(), path.display());

    let options = ReportOptions {
        unbalanced_only: config.unbalanced_only,
    };
    write_report(&text, options, out).context("Error writing report")?;
    out.flush().context("Error writing report")?;
    Ok(())
}
