use minijinja::{path_loader, Environment, ErrorKind, Template};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{ReportError, Result};

/// Name of the fallback template
pub const DEFAULT_TEMPLATE: &str = "default";

/// Extension appended to template names
const TEMPLATE_EXT: &str = "html";

/// Built-in default template, installed by `init`
pub const BUILTIN_DEFAULT: &str = include_str!("../../templates/default.html");

/// Resolves named templates from a directory of `.html` files
pub struct TemplateStore {
    dir: PathBuf,
    env: Environment<'static>,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut env = Environment::new();
        env.set_loader(path_loader(&dir));
        Self { dir, env }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve `name`, falling back to the default template when it cannot be loaded.
    ///
    /// Any failure on the default template itself is returned.
    pub fn resolve(&self, name: &str) -> Result<Template<'_, '_>> {
        match self.load(name) {
            Ok(template) => {
                debug!("Using template '{}'", template.name());
                return Ok(template);
            }
            Err(e) if name == DEFAULT_TEMPLATE => return Err(e),
            Err(e) => warn!(
                "Cannot use template '{}.{}' ({}), falling back to '{}'",
                name, TEMPLATE_EXT, e, DEFAULT_TEMPLATE
            ),
        }

        self.load(DEFAULT_TEMPLATE)
    }

    /// List available template names, sorted
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = entry?;
            let path = entry.path();

            if !entry.file_type().is_file() {
                continue;
            }

            if path.extension().and_then(|e| e.to_str()) == Some(TEMPLATE_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Load `<dir>/<name>.html`; names that could escape the directory are not found
    fn load(&self, name: &str) -> Result<Template<'_, '_>> {
        let file_name = format!("{}.{}", name, TEMPLATE_EXT);

        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(ReportError::TemplateNotFound { name: file_name });
        }

        self.env
            .get_template(&file_name)
            .map_err(|e| match e.kind() {
                ErrorKind::TemplateNotFound => ReportError::TemplateNotFound { name: file_name },
                _ => ReportError::Template(e),
            })
    }
}
