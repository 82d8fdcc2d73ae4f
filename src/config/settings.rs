//! Settings structures for people-search configuration

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Default people-search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.apollo.io/v1/mixed_people/api_search";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

/// Largest page size the remote API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub query: QuerySettings,
    pub outgoing: OutgoingSettings,
    pub output: OutputSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            SearchError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text. An empty document yields defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (PEOPLE_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_API_KEY") {
            self.api.api_key = val;
        }
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_ENDPOINT") {
            self.api.endpoint = val;
        }
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_API_KEY_HEADER") {
            self.api.api_key_header = val;
        }
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_TITLES") {
            let titles = split_titles(&val);
            if titles.is_empty() {
                warn!("Ignoring empty PEOPLE_SEARCH_TITLES");
            } else {
                self.query.person_titles = titles;
            }
        }
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_PAGE") {
            match val.parse() {
                Ok(page) => self.query.page = page,
                Err(_) => warn!("Ignoring invalid PEOPLE_SEARCH_PAGE: {}", val),
            }
        }
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_PER_PAGE") {
            match val.parse() {
                Ok(per_page) => self.query.per_page = per_page,
                Err(_) => warn!("Ignoring invalid PEOPLE_SEARCH_PER_PAGE: {}", val),
            }
        }
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_TIMEOUT") {
            match val.parse() {
                Ok(timeout) => self.outgoing.request_timeout = timeout,
                Err(_) => warn!("Ignoring invalid PEOPLE_SEARCH_TIMEOUT: {}", val),
            }
        }
        if let Ok(val) = std::env::var("PEOPLE_SEARCH_FAIL_ON_ERROR") {
            match parse_flag(&val) {
                Some(flag) => self.output.fail_on_error = flag,
                None => warn!("Ignoring invalid PEOPLE_SEARCH_FAIL_ON_ERROR: {}", val),
            }
        }
    }

    /// Check the settings before any request is made.
    ///
    /// The endpoint is not rejected here: an unusable URL surfaces as a
    /// connection error when the request is attempted.
    pub fn validate(&self) -> Result<()> {
        match Url::parse(&self.api.endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => warn!("Endpoint uses unsupported scheme '{}'", url.scheme()),
            Err(e) => warn!("Endpoint '{}' is not a valid URL: {}", self.api.endpoint, e),
        }

        if self.api.api_key_header.trim().is_empty() {
            return Err(SearchError::config("api_key_header must not be empty"));
        }

        if self.query.person_titles.is_empty() {
            return Err(SearchError::config("person_titles must not be empty"));
        }
        if self.query.page < 1 {
            return Err(SearchError::config("page must be at least 1"));
        }
        if self.query.per_page < 1 || self.query.per_page > MAX_PER_PAGE {
            return Err(SearchError::config(format!(
                "per_page must be between 1 and {}",
                MAX_PER_PAGE
            )));
        }

        self.outgoing.timeout()?;

        if self.api.api_key.is_empty() {
            warn!("No API key configured; the remote service will likely reject the request");
        }

        Ok(())
    }
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Display name used in progress output
    pub provider_name: String,
    /// Search endpoint URL
    pub endpoint: String,
    /// API key sent with every request
    pub api_key: String,
    /// Header carrying the API key
    pub api_key_header: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            provider_name: "Apollo".to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            api_key_header: "X-Api-Key".to_string(),
        }
    }
}

/// Search query settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySettings {
    /// Job titles to match
    pub person_titles: Vec<String>,
    /// Page number (1-indexed)
    pub page: u32,
    /// Results per page
    pub per_page: u32,
    /// Plural noun for the progress line, e.g. "CEOs"
    pub label: String,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            person_titles: vec!["CEO".to_string(), "Chief Executive Officer".to_string()],
            page: 1,
            per_page: 5,
            label: "CEOs".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl OutgoingSettings {
    /// Request timeout as a duration; must be positive and representable
    pub fn timeout(&self) -> Result<Duration> {
        if self.request_timeout.is_nan() || self.request_timeout <= 0.0 {
            return Err(SearchError::config("request_timeout must be greater than 0"));
        }
        Duration::try_from_secs_f64(self.request_timeout).map_err(|e| {
            SearchError::config(format!(
                "request_timeout {} is out of range: {}",
                self.request_timeout, e
            ))
        })
    }
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_TIMEOUT_SECS,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Report and exit-status settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Exit non-zero when the search fails
    pub fail_on_error: bool,
}

/// Parse a boolean env value (true/false, 1/0, yes/no, on/off)
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Split a comma separated title list, dropping blanks
pub fn split_titles(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: &[&str] = &[
        "PEOPLE_SEARCH_API_KEY",
        "PEOPLE_SEARCH_ENDPOINT",
        "PEOPLE_SEARCH_API_KEY_HEADER",
        "PEOPLE_SEARCH_TITLES",
        "PEOPLE_SEARCH_PAGE",
        "PEOPLE_SEARCH_PER_PAGE",
        "PEOPLE_SEARCH_TIMEOUT",
        "PEOPLE_SEARCH_FAIL_ON_ERROR",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.api.api_key_header, "X-Api-Key");
        assert_eq!(
            settings.query.person_titles,
            vec!["CEO", "Chief Executive Officer"]
        );
        assert_eq!(settings.query.page, 1);
        assert_eq!(settings.query.per_page, 5);
        assert_eq!(settings.outgoing.request_timeout, 30.0);
        assert!(!settings.output.fail_on_error);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "api:\n  api_key: secret\nquery:\n  per_page: 10\n";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.api.api_key, "secret");
        assert_eq!(settings.api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.query.per_page, 10);
        assert_eq!(settings.query.page, 1);
        assert_eq!(settings.query.person_titles.len(), 2);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let settings = Settings::from_yaml("  \n").unwrap();
        assert_eq!(settings.query.per_page, 5);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = Settings::from_yaml("query: [unterminated").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yml");
        std::fs::write(&path, "outgoing:\n  request_timeout: 7.5\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.outgoing.request_timeout, 7.5);
    }

    #[test]
    #[serial]
    fn test_merge_env_overrides() {
        clear_env();
        std::env::set_var("PEOPLE_SEARCH_API_KEY", "env-key");
        std::env::set_var("PEOPLE_SEARCH_TITLES", "CTO, Chief Technology Officer,");
        std::env::set_var("PEOPLE_SEARCH_PER_PAGE", "25");
        std::env::set_var("PEOPLE_SEARCH_PAGE", "not-a-number");
        std::env::set_var("PEOPLE_SEARCH_FAIL_ON_ERROR", "true");

        let mut settings = Settings::default();
        settings.merge_env();
        clear_env();

        assert_eq!(settings.api.api_key, "env-key");
        assert_eq!(
            settings.query.person_titles,
            vec!["CTO", "Chief Technology Officer"]
        );
        assert_eq!(settings.query.per_page, 25);
        assert_eq!(settings.query.page, 1);
        assert!(settings.output.fail_on_error);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.query.page = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.query.per_page = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.query.per_page = MAX_PER_PAGE + 1;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.query.person_titles.clear();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.outgoing.request_timeout = 0.0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.outgoing.request_timeout = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_leaves_endpoint_to_the_request() {
        let mut settings = Settings::default();
        settings.api.endpoint = "not a url".to_string();
        assert!(settings.validate().is_ok());

        settings.api.endpoint = "ftp://example.com/search".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_timeout_out_of_range() {
        let mut outgoing = OutgoingSettings::default();
        outgoing.request_timeout = 1e20;
        let err = outgoing.timeout().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("out of range"));

        let mut settings = Settings::default();
        settings.outgoing.request_timeout = 1e20;
        assert!(settings.validate().is_err());

        outgoing.request_timeout = f64::INFINITY;
        assert!(outgoing.timeout().is_err());

        outgoing.request_timeout = -1.0;
        assert!(outgoing.timeout().is_err());

        outgoing.request_timeout = 0.25;
        assert_eq!(outgoing.timeout().unwrap(), Duration::from_millis(250));
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_file(dir.path().join("absent.yml")).unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    #[serial]
    fn test_merge_env_flag_values() {
        clear_env();
        std::env::set_var("PEOPLE_SEARCH_FAIL_ON_ERROR", "1");
        let mut settings = Settings::default();
        settings.merge_env();
        assert!(settings.output.fail_on_error);

        std::env::set_var("PEOPLE_SEARCH_FAIL_ON_ERROR", "maybe");
        settings.merge_env();
        clear_env();
        assert!(settings.output.fail_on_error);
    }

    #[test]
    fn test_split_titles() {
        assert_eq!(split_titles("CEO,  Founder ,,"), vec!["CEO", "Founder"]);
        assert!(split_titles(" , ").is_empty());
    }
}
