use std::path::PathBuf;

use super::DEFAULT_TEMPLATES_DIR;
use crate::error::Result;
use crate::renderer::TemplateStore;

/// List templates available for the `template` setting
pub fn list(templates: Option<PathBuf>) -> Result<()> {
    let store =
        TemplateStore::new(templates.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_DIR)));
    let names = store.list()?;

    if names.is_empty() {
        println!("No templates found in: {}", store.dir().display());
        println!("Run 'daily-report init' to install the default template.");
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }

    Ok(())
}
