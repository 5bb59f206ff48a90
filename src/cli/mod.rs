//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - (default): Generate the daily report
//! - init: Scaffold config.json and the default template
//! - show latest: Locate the most recent report
//! - templates list: List available templates

pub mod gen;
pub mod init;
pub mod show;
pub mod templates;

/// Config file used when `--config` is not given
pub const DEFAULT_CONFIG: &str = "config.json";

/// Templates directory used when `--templates` is not given
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Output directory used when `--output` is not given
pub const DEFAULT_OUTPUT_DIR: &str = "reports";
