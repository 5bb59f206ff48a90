use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{DEFAULT_CONFIG, DEFAULT_OUTPUT_DIR, DEFAULT_TEMPLATES_DIR};
use crate::config::{self, Config};
use crate::content::{self, DAILY_STATUS};
use crate::error::{ReportError, Result};
use crate::renderer::{Renderer, TemplateStore};
use crate::writer;

/// Generate the daily report
pub fn run(
    config_path: Option<PathBuf>,
    date: Option<String>,
    output: Option<PathBuf>,
    templates: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let config = config::resolve(Some(&config_path));

    let report_date = date.as_deref().map(parse_date).transpose()?;

    // An explicit output directory is created up front
    let output_dir = match output {
        Some(dir) => {
            fs::create_dir_all(&dir)?;
            dir
        }
        None => PathBuf::from(DEFAULT_OUTPUT_DIR),
    };

    let store =
        TemplateStore::new(templates.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR)));

    if dry_run {
        let html = render(&config, &store, report_date)?;
        println!("{}", html);
        return Ok(());
    }

    let output_path = generate(&config, &store, report_date, &output_dir)?;

    println!("✅ Reporte generado exitosamente: {}", output_path.display());
    println!("📂 Abrir en navegador: file://{}", output_path.display());

    Ok(())
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| ReportError::InvalidDate(input.to_string()))
}

/// Run content, render, and write in sequence; returns the written path
pub fn generate(
    config: &Config,
    store: &TemplateStore,
    date: Option<NaiveDate>,
    output_dir: &Path,
) -> Result<PathBuf> {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let html = render(config, store, Some(date))?;
    writer::write(&html, output_dir, date)
}

fn render(config: &Config, store: &TemplateStore, date: Option<NaiveDate>) -> Result<String> {
    let content = content::provide(DAILY_STATUS, config.ai_enabled);
    if content.is_empty() {
        warn!("No content available for '{}'", DAILY_STATUS);
    }
    info!(
        "Generating report for {} (ai_enabled={})",
        config.user_name, config.ai_enabled
    );

    Renderer::new(config, store).render(&content, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::BUILTIN_DEFAULT;
    use tempfile::TempDir;

    #[test]
    fn test_parse_date_valid() {
        let date = parse_date("2024-03-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_date_invalid_month() {
        let err = parse_date("2024-13-01").unwrap_err();
        assert!(matches!(err, ReportError::InvalidDate(_)));
        assert!(err.to_string().contains("2024-13-01"));
    }

    #[test]
    fn test_parse_date_wrong_format() {
        assert!(parse_date("15/03/2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_generate_writes_dated_file() {
        let temp = TempDir::new().unwrap();
        let templates = temp.path().join("templates");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("default.html"), BUILTIN_DEFAULT).unwrap();

        let store = TemplateStore::new(&templates);
        let output_dir = temp.path().join("reports");
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let path = generate(&Config::default(), &store, Some(date), &output_dir).unwrap();

        assert!(path.ends_with("reporte_20240315.html"));
        let html = fs::read_to_string(path).unwrap();
        assert!(html.contains("15 de marzo, 2024"));
    }

    #[test]
    fn test_generate_without_templates_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let store = TemplateStore::new(temp.path().join("templates"));
        let output_dir = temp.path().join("reports");
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let result = generate(&Config::default(), &store, Some(date), &output_dir);

        assert!(matches!(result, Err(ReportError::TemplateNotFound { .. })));
        assert!(!output_dir.join("reporte_20240315.html").exists());
    }
}
