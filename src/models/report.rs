use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

use super::payload::ContentPayload;
use crate::config::Config;

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Values exposed to a template for one render
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext<'a> {
    /// Report date in ISO form (YYYY-MM-DD)
    pub date: String,
    /// Long, Spanish-formatted report date
    pub formatted_date: String,
    pub user_name: &'a str,
    pub company: &'a str,
    /// Full effective configuration, unknown keys included
    pub config: &'a Config,
    pub content: &'a ContentPayload,
    /// Wall-clock time of generation (HH:MM:SS)
    pub generated_at: String,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        config: &'a Config,
        content: &'a ContentPayload,
        date: NaiveDate,
        generated_at: NaiveTime,
    ) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            formatted_date: format_long_date(date),
            user_name: &config.user_name,
            company: &config.company,
            config,
            content,
            generated_at: generated_at.format("%H:%M:%S").to_string(),
        }
    }
}

/// Format a date as "15 de marzo, 2024"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{:02} de {}, {}",
        date.day(),
        MONTHS_ES[date.month0() as usize],
        date.year()
    )
}
