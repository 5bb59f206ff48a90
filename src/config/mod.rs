//! Configuration module
//!
//! Resolves the effective report configuration from built-in defaults and an
//! optional JSON override file.

mod types;

pub use types::Config;

use crate::error::{ReportError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Resolve the effective configuration.
///
/// A missing file yields the defaults. A file that cannot be read or parsed is
/// reported and also yields the defaults; resolution never fails.
pub fn resolve(path: Option<&Path>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };

    if !path.exists() {
        debug!("No config file at '{}', using defaults", path.display());
        return Config::default();
    }

    match load(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("Error loading config: {}", e);
            Config::default()
        }
    }
}

/// Load an override file and overlay it onto the defaults
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReportError::Config(format!("Cannot read config from '{}': {}", path.display(), e))
    })?;

    let over: Map<String, Value> = serde_json::from_str(&content).map_err(|e| {
        ReportError::Config(format!("Invalid JSON in '{}': {}", path.display(), e))
    })?;

    Ok(Config::default().overlay(over))
}

/// Save configuration to a JSON file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_without_path() {
        assert_eq!(resolve(None), Config::default());
    }

    #[test]
    fn test_resolve_missing_file() {
        let config = resolve(Some(Path::new("/nonexistent/config.json")));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_merges_override() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"user_name": "Lucía", "template": "compact", "theme": "dark"}"#,
        )
        .unwrap();

        let config = resolve(Some(&config_path));
        assert_eq!(config.user_name, "Lucía");
        assert_eq!(config.template, "compact");
        assert_eq!(config.company, "Mi Empresa");
        assert!(config.ai_enabled);
        assert_eq!(config.output_format, "html");
        assert_eq!(config.extra.get("theme").unwrap(), "dark");
    }

    #[test]
    fn test_resolve_keeps_valid_keys_beside_wrong_types() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"user_name": "Ana", "company": "Acme", "ai_enabled": 1}"#,
        )
        .unwrap();

        let config = resolve(Some(&config_path));
        assert_eq!(config.user_name, "Ana");
        assert_eq!(config.company, "Acme");
        assert!(config.ai_enabled);
    }

    #[test]
    fn test_resolve_malformed_file_falls_back() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.json");
        fs::write(&config_path, "{ user_name: ").unwrap();

        assert_eq!(resolve(Some(&config_path)), Config::default());
    }

    #[test]
    fn test_resolve_non_object_falls_back() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.json");
        fs::write(&config_path, "[1, 2, 3]").unwrap();

        assert_eq!(resolve(Some(&config_path)), Config::default());
    }

    #[test]
    fn test_load_reports_path_on_error() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("broken.json");
        fs::write(&config_path, "not json").unwrap();

        let err = load(&config_path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_save_creates_directories() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("nested/dir/config.json");

        save(&Config::default(), &config_path).unwrap();

        assert!(config_path.exists());
        assert_eq!(load(&config_path).unwrap(), Config::default());
    }
}
