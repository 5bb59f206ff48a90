use std::fs;
use std::path::PathBuf;

use super::DEFAULT_OUTPUT_DIR;
use crate::error::{ReportError, Result};
use crate::writer;

/// Print the location of the most recent report
pub fn latest(output: Option<PathBuf>) -> Result<()> {
    let output_dir = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let latest = writer::find_latest(&output_dir)?
        .ok_or_else(|| ReportError::NoReports(output_dir.display().to_string()))?;
    let latest = fs::canonicalize(latest)?;

    println!("{}", latest.display());
    println!("📂 Abrir en navegador: file://{}", latest.display());

    Ok(())
}
