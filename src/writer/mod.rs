//! Report writer module
//!
//! Persists rendered HTML as `reporte_<YYYYMMDD>.html` in an output directory.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ReportError, Result};

/// Prefix shared by all report files
pub const REPORT_PREFIX: &str = "reporte_";

/// Extension of report files
pub const REPORT_EXT: &str = ".html";

/// File name for the report of `date`
pub fn report_filename(date: NaiveDate) -> String {
    format!("{}{}{}", REPORT_PREFIX, date.format("%Y%m%d"), REPORT_EXT)
}

/// Write a report, replacing any existing one for the same date.
///
/// The HTML goes to a temporary sibling first and is renamed into place, so
/// the report file is either the old or the new content. Returns the absolute
/// path of the written file.
pub fn write(html: &str, output_dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(output_dir).map_err(|e| {
        ReportError::Writer(format!(
            "Cannot create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    let filename = report_filename(date);
    let output_path = output_dir.join(&filename);
    let tmp_path = output_dir.join(format!(".{}.tmp", filename));

    let written = fs::write(&tmp_path, html).and_then(|()| fs::rename(&tmp_path, &output_path));

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(ReportError::Writer(format!(
            "Cannot write '{}': {}",
            output_path.display(),
            e
        )));
    }

    debug!("Wrote {} bytes to {}", html.len(), output_path.display());

    Ok(fs::canonicalize(&output_path)?)
}

/// Find the most recent report in the output directory
pub fn find_latest(output_dir: &Path) -> Result<Option<PathBuf>> {
    if !output_dir.exists() {
        return Ok(None);
    }

    let mut reports = Vec::new();

    for entry in fs::read_dir(output_dir)? {
        let path = entry?.path();

        if !path.is_file() {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with(REPORT_PREFIX) && name.ends_with(REPORT_EXT) {
                reports.push(path);
            }
        }
    }

    // File names embed the date as YYYYMMDD, so lexical order is chronological
    reports.sort();
    Ok(reports.pop())
}
