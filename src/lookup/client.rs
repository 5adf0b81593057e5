//! HTTP suggestion client
//!
//! Issues `GET <endpoint>?q=<query>` and parses `{ "suggestions": [...] }`.

use std::time::Duration;

use serde::Deserialize;

use super::{LookupError, SuggestionSource};
use crate::config::AutocompleteConfig;

#[derive(Debug, Deserialize)]
struct SuggestionsBody {
    #[serde(default)]
    suggestions: Vec<String>,
}

/// Build the lookup URL for `query`
///
/// The query is percent-encoded the way browsers' `encodeURIComponent` does
/// (spaces become `%20`). An endpoint that already carries a query string
/// gets `q` appended with `&`.
pub fn lookup_url(endpoint: &str, query: &str) -> String {
    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}q={}", endpoint, separator, urlencoding::encode(query))
}

/// Parse a lookup response body
///
/// A JSON object without a `suggestions` key yields an empty list. Anything
/// that is not a JSON object of that shape is a parse error.
pub fn parse_suggestions_body(body: &str) -> Result<Vec<String>, LookupError> {
    serde_json::from_str::<SuggestionsBody>(body)
        .map(|parsed| parsed.suggestions)
        .map_err(|e| LookupError::Parse(e.to_string()))
}

/// Suggestion endpoint client
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LookupClient {
    /// Create a client for `endpoint` with a per-request `timeout`
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
        let endpoint = endpoint.trim();
        reqwest::Url::parse(endpoint)
            .map_err(|e| LookupError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.to_string(),
        })
    }

    /// Create a client from the `[autocomplete]` config section
    pub fn from_config(config: &AutocompleteConfig) -> Result<Self, LookupError> {
        Self::new(&config.endpoint, Duration::from_millis(config.timeout_ms))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SuggestionSource for LookupClient {
    async fn fetch(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let url = lookup_url(&self.endpoint, query);
        log::debug!("Lookup GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LookupError::Network(format!("request timed out: {}", e))
                } else {
                    LookupError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_suggestions_body(&body)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
