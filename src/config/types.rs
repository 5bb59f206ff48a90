use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Effective report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name shown in the report header
    pub user_name: String,

    /// Company shown in the report header
    pub company: String,

    /// Use the AI content source instead of the minimal one
    pub ai_enabled: bool,

    /// Template identifier, without the `.html` extension
    pub template: String,

    /// Output format (only "html" is produced)
    pub output_format: String,

    /// Keys loaded from disk that no setting recognizes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: "Usuario".to_string(),
            company: "Mi Empresa".to_string(),
            ai_enabled: true,
            template: "default".to_string(),
            output_format: "html".to_string(),
            extra: Map::new(),
        }
    }
}

impl Config {
    /// Apply override keys on top of this configuration; override values win.
    ///
    /// A recognized key holding the wrong JSON type is skipped with a warning.
    /// Unrecognized keys are kept in `extra`.
    pub fn overlay(mut self, over: Map<String, Value>) -> Self {
        for (key, value) in over {
            match key.as_str() {
                "user_name" => set_string(&mut self.user_name, &key, value),
                "company" => set_string(&mut self.company, &key, value),
                "template" => set_string(&mut self.template, &key, value),
                "output_format" => set_string(&mut self.output_format, &key, value),
                "ai_enabled" => match value {
                    Value::Bool(enabled) => self.ai_enabled = enabled,
                    other => warn!(
                        "Ignoring config key 'ai_enabled': expected a boolean, got {}",
                        other
                    ),
                },
                _ => {
                    self.extra.insert(key, value);
                }
            }
        }
        self
    }
}

fn set_string(field: &mut String, key: &str, value: Value) {
    match value {
        Value::String(s) => *field = s,
        other => warn!("Ignoring config key '{}': expected a string, got {}", key, other),
    }
}
