//! Search execution against the remote people-search API

use super::models::{Outcome, SearchRequest};
use crate::config::{ApiSettings, Settings};
use crate::error::Result;
use crate::network::{ApiRequest, ApiResponse, HttpClient};
use tracing::{debug, info, warn};

/// Sends one configured search and classifies the result
pub struct SearchClient {
    /// HTTP client for making requests
    client: HttpClient,
    /// Endpoint and credentials
    api: ApiSettings,
    /// Query body
    request: SearchRequest,
}

impl SearchClient {
    /// Create a search client from explicit parts
    pub fn new(client: HttpClient, api: ApiSettings, request: SearchRequest) -> Self {
        Self {
            client,
            api,
            request,
        }
    }

    /// Create a search client from settings, building its own HTTP client
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        Ok(Self::new(
            client,
            settings.api.clone(),
            SearchRequest::from(&settings.query),
        ))
    }

    /// Build the outgoing HTTP request
    pub fn build_request(&self) -> ApiRequest {
        ApiRequest::post(&self.api.endpoint)
            .header("Content-Type", "application/json")
            .header("Cache-Control", "no-cache")
            .header(&self.api.api_key_header, &self.api.api_key)
            .json(self.request.to_json())
    }

    /// Perform the search. Exactly one request is made; every failure is
    /// folded into the returned outcome.
    pub async fn execute(&self) -> Outcome {
        let request = self.build_request();
        debug!(
            "Searching {} for titles {:?} (page {}, per_page {})",
            self.api.endpoint, self.request.person_titles, self.request.page, self.request.per_page
        );

        let outcome = match self.client.execute(request).await {
            Ok(response) => Self::classify(response),
            Err(e) => Outcome::TransportError {
                message: e.to_string(),
            },
        };

        match &outcome {
            Outcome::Success { records, .. } => {
                info!("Search returned {} people", records.len())
            }
            Outcome::HttpError { status, .. } => warn!("Search failed with HTTP {}", status),
            Outcome::TransportError { message } => warn!("Search failed: {}", message),
        }

        outcome
    }

    /// Turn a raw response into an outcome
    pub fn classify(response: ApiResponse) -> Outcome {
        if !response.is_ok() {
            return Outcome::HttpError {
                status: response.status,
                body: response.text,
            };
        }

        match response.json::<serde_json::Value>() {
            Ok(document) => Outcome::success(document),
            Err(e) => Outcome::TransportError {
                message: format!("invalid JSON in response body: {}", e),
            },
        }
    }
}
