use thiserror::Error;

/// Crate-wide error type.
///
/// Nothing here ever reaches a tutor caller: the selector folds every
/// inference failure into "no result". Question bank construction, grading
/// and configuration loading do surface these.
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure talking to an inference endpoint.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status.
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The hosted model is still loading and cannot serve yet.
    #[error("Model is warming up: {0}")]
    ModelLoading(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the failure justifies trying the fallback endpoint.
    pub fn is_fallback_worthy(&self) -> bool {
        matches!(
            self,
            AppError::Http(_)
                | AppError::UpstreamStatus { .. }
                | AppError::ModelLoading(_)
                | AppError::Timeout(_)
                | AppError::Validation(_)
        )
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("Operation timed out: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(err.to_string())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Config(format!("URL parse error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_upstream_status() {
        let err = AppError::UpstreamStatus {
            status: 503,
            body: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "Upstream returned status 503: busy");
    }

    #[test]
    fn test_config_errors_do_not_trigger_fallback() {
        assert!(!AppError::Config("bad".into()).is_fallback_worthy());
        assert!(!AppError::Internal("bug".into()).is_fallback_worthy());
        assert!(AppError::ModelLoading("loading".into()).is_fallback_worthy());
        assert!(AppError::Timeout("8s".into()).is_fallback_worthy());
    }

    #[test]
    fn test_url_error_maps_to_config() {
        let err: AppError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, AppError::Config(_)));
    }
}
