//! Suggestion lookups
//!
//! Defines the request/response messages exchanged with the lookup worker,
//! the `LookupError` taxonomy, and the `SuggestionSource` abstraction the
//! worker fetches through.

use std::future::Future;

use thiserror::Error;

mod client;
mod worker;

pub use client::{LookupClient, lookup_url, parse_suggestions_body};
pub use worker::spawn_worker;

/// Errors that can occur while fetching suggestions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network error during the request (including timeouts)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("Endpoint returned status {0}")]
    Status(u16),

    /// Response body was not valid JSON of the expected shape
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LookupError {
    /// Transport failures cover everything before a usable body arrived
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LookupError::InvalidEndpoint(_) | LookupError::Network(_) | LookupError::Status(_)
        )
    }
}

/// Request sent to the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub query: String,
    /// Generation of this request, used to filter stale responses
    pub request_id: u64,
}

/// Response received from the lookup worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
    /// Request ID this response belongs to
    pub request_id: u64,
    pub result: Result<Vec<String>, LookupError>,
}

/// Anything that can turn a query into an ordered list of suggestions
pub trait SuggestionSource: Send + Sync + 'static {
    fn fetch(&self, query: &str)
    -> impl Future<Output = Result<Vec<String>, LookupError>> + Send;
}
