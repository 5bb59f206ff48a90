//! HTML renderer module
//!
//! Builds the report context from configuration, content, and date, resolves
//! the configured template, and renders the final HTML document.

mod store;

pub use store::{TemplateStore, BUILTIN_DEFAULT, DEFAULT_TEMPLATE};

use chrono::{Local, NaiveDate, NaiveTime};
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::models::{ContentPayload, ReportContext};

/// Renderer for daily reports
pub struct Renderer<'a> {
    config: &'a Config,
    store: &'a TemplateStore,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config, store: &'a TemplateStore) -> Self {
        Self { config, store }
    }

    /// Render a report; `date` defaults to today
    pub fn render(&self, content: &ContentPayload, date: Option<NaiveDate>) -> Result<String> {
        let now = Local::now();
        let date = date.unwrap_or_else(|| now.date_naive());
        self.render_at(content, date, now.time())
    }

    /// Render a report with an explicit generation time
    pub fn render_at(
        &self,
        content: &ContentPayload,
        date: NaiveDate,
        generated_at: NaiveTime,
    ) -> Result<String> {
        let template = self.store.resolve(&self.config.template)?;
        let context = ReportContext::new(self.config, content, date, generated_at);

        debug!(
            "Rendering '{}' for {} ({} items)",
            template.name(),
            context.date,
            content.item_count()
        );

        Ok(template.render(&context)?)
    }
}
