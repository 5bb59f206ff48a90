use std::fs;
use std::path::PathBuf;

use super::{DEFAULT_CONFIG, DEFAULT_TEMPLATES_DIR};
use crate::config::{self, Config};
use crate::error::Result;
use crate::renderer::{BUILTIN_DEFAULT, DEFAULT_TEMPLATE};

/// Scaffold config.json and the default template
pub fn run(path: Option<PathBuf>) -> Result<()> {
    let root = path.unwrap_or_else(|| PathBuf::from("."));
    let config_path = root.join(DEFAULT_CONFIG);
    let template_path = root
        .join(DEFAULT_TEMPLATES_DIR)
        .join(format!("{}.html", DEFAULT_TEMPLATE));

    if config_path.exists() {
        eprintln!(
            "Configuration file already exists at: {}",
            config_path.display()
        );
    } else {
        config::save(&Config::default(), &config_path)?;
        println!("Configuration file created: {}", config_path.display());
    }

    if template_path.exists() {
        eprintln!("Template already exists at: {}", template_path.display());
    } else {
        if let Some(parent) = template_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&template_path, BUILTIN_DEFAULT)?;
        println!("Template created: {}", template_path.display());
    }

    println!("\nNext steps:");
    println!(
        "1. Edit {} to set your name and company",
        config_path.display()
    );
    println!("2. Run 'daily-report' to generate today's report");

    Ok(())
}
