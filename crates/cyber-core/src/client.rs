//! HTTP client for the remote search endpoint.
//!
//! Sends `POST <endpoint>` with `{"query": ...}` and decodes the `results`
//! list. Front ends call `search_or_empty`, which collapses every failure
//! into an empty result list and logs it.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::types::{ResultList, SearchRequest, SearchResult, parse_result_list};

/// Maximum number of response body bytes kept in a `Status` error.
const ERROR_BODY_LIMIT: usize = 512;

/// Failure talking to the search endpoint.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Connection, timeout or body read failure.
    #[error("search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("search endpoint returned HTTP {status}")]
    Status { status: StatusCode, body: String },
}

/// Client for the search API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a client for `endpoint` with an optional request timeout.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { http, endpoint })
    }

    /// Creates a client from the endpoint and timeout in `config`.
    ///
    /// # Errors
    /// Returns an error if the endpoint is invalid or the client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint_url()?, config.request_timeout())
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issues one search request.
    ///
    /// A success response whose `results` list is missing or malformed yields
    /// an empty list, not an error.
    ///
    /// # Errors
    /// Returns `SearchError::Transport` on connection/body failures and
    /// `SearchError::Status` on non-success responses.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            truncate_at_char_boundary(&mut body, ERROR_BODY_LIMIT);
            return Err(SearchError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let results = match parse_result_list(&bytes) {
            ResultList::Parsed(results) => results,
            ResultList::Missing => {
                debug!("search response has no results field");
                Vec::new()
            }
            ResultList::Malformed(reason) => {
                warn!(%reason, "malformed search response treated as empty");
                Vec::new()
            }
        };
        Ok(results)
    }

    /// Issues one search request, treating any failure as "no results".
    pub async fn search_or_empty(&self, query: &str) -> Vec<SearchResult> {
        match self.search(query).await {
            Ok(results) => results,
            Err(SearchError::Status { status, body }) => {
                warn!(%status, %body, endpoint = %self.endpoint, "search endpoint error");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, endpoint = %self.endpoint, "search transport failure");
                Vec::new()
            }
        }
    }
}

fn truncate_at_char_boundary(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
