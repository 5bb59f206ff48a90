use thiserror::Error;

/// Daily report error types
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date format: {0}. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    #[error("Writer error: {0}")]
    Writer(String),

    #[error("No reports found in '{0}'. Run 'daily-report' first.")]
    NoReports(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result type for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let err = ReportError::Config("test error".to_string());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_error_display_invalid_date() {
        let err = ReportError::InvalidDate("2024-13-01".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date format: 2024-13-01. Use YYYY-MM-DD"
        );
    }

    #[test]
    fn test_error_display_template_not_found() {
        let err = ReportError::TemplateNotFound {
            name: "default.html".to_string(),
        };
        assert_eq!(err.to_string(), "Template not found: default.html");
    }

    #[test]
    fn test_error_display_writer() {
        let err = ReportError::Writer("disk full".to_string());
        assert_eq!(err.to_string(), "Writer error: disk full");
    }
}
