//! HTTP client for making requests to the people-search API

use super::request::{ApiRequest, ApiResponse};
use super::user_agent::{accept_json, default_user_agent};
use crate::config::OutgoingSettings;
use crate::error::Result;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with people-search specific configuration
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
    user_agent: String,
    extra_headers: HashMap<String, String>,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = settings.timeout()?;
        let mut builder = Client::builder().timeout(timeout).gzip(true).brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            timeout,
            user_agent: default_user_agent(),
            extra_headers: settings.extra_headers.clone(),
        })
    }

    /// Execute a request, returning the response whatever its status.
    ///
    /// Only transport failures are errors here.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut req_builder = self
            .client
            .post(&request.url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", accept_json());

        // Configured extra headers, unless the request sets the same name
        for (key, value) in &self.extra_headers {
            if request.header_value(key).is_none() {
                req_builder = req_builder.header(key, value);
            }
        }

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(ref body) = request.body {
            req_builder = req_builder.json(body);
        }

        debug!("Sending POST {} (timeout {:?})", request.url, self.timeout);
        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Parse response into ApiResponse
    async fn parse_response(response: Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let text = response.text().await?;

        Ok(ApiResponse {
            status,
            headers,
            text,
            url,
        })
    }

    /// Configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

}
