//! Error types for people-search
//!
//! These cover failures outside the search outcome itself: loading settings,
//! building the HTTP client, and the raw exchange. A failed exchange never
//! escapes `SearchClient::execute`; it is folded into `Outcome::TransportError`.

use thiserror::Error;

/// Result type alias for people-search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Main error type
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

impl SearchError {
    /// Shorthand for a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        SearchError::Config(msg.into())
    }

    /// Whether this error should be reported as a configuration problem
    pub fn is_config(&self) -> bool {
        matches!(self, SearchError::Config(_) | SearchError::Yaml(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = SearchError::config("page must be at least 1");
        assert_eq!(err.to_string(), "Configuration error: page must be at least 1");
        assert!(err.is_config());
    }

    #[test]
    fn test_io_error_is_not_config() {
        let err: SearchError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert!(!err.is_config());
    }

    #[test]
    fn test_json_error_is_not_config() {
        let err: SearchError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_config());
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
