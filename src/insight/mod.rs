//! Optional natural-language insight from a remote text-generation service.
//!
//! The insight is advisory text shown next to the results. It never feeds
//! back into scoring or ranking: [`InsightClient::fetch_best_effort`] logs
//! any failure and returns `None`.
//!
//! Request body sent to the endpoint:
//!
//! ```text
//! {
//!   "query": "Analyze and provide internship matching insights for a ...",
//!   "context": {
//!     "profile": { ...student profile... },
//!     "availableInternships": 25,
//!     "internshipTypes": ["Software Engineering Intern", ...first 10 titles]
//!   }
//! }
//! ```
//!
//! The endpoint answers with a JSON object; its `response` string, when
//! present, is the insight.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::store::PostingCatalog;
use crate::core::profile::StudentProfile;

/// Number of posting titles included in the request context
pub const CONTEXT_TITLE_COUNT: usize = 10;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Insight service error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid insight endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Where and how to reach the insight service
#[derive(Debug, Clone, Default)]
pub struct InsightConfig {
    /// Endpoint URL; `None` disables the insight call
    pub endpoint: Option<String>,
    /// Sent as a bearer token when set
    pub api_key: Option<String>,
    /// Request timeout; defaults to [`DEFAULT_TIMEOUT_SECS`]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Serialize)]
pub struct InsightRequest<'a> {
    pub query: String,
    pub context: InsightContext<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightContext<'a> {
    pub profile: &'a StudentProfile,
    pub available_internships: usize,
    pub internship_types: Vec<&'a str>,
}

impl<'a> InsightRequest<'a> {
    #[must_use]
    pub fn new(profile: &'a StudentProfile, catalog: &'a PostingCatalog) -> Self {
        Self {
            query: build_query(profile),
            context: InsightContext {
                profile,
                available_internships: catalog.len(),
                internship_types: catalog.titles(CONTEXT_TITLE_COUNT),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct InsightResponse {
    #[serde(default)]
    response: Option<String>,
}

/// The question put to the insight service for a profile
#[must_use]
pub fn build_query(profile: &StudentProfile) -> String {
    format!(
        "Analyze and provide internship matching insights for a {} student with skills: {}. Location preference: {}",
        profile.field_of_study(),
        profile.skills().join(", "),
        profile.location_preference().unwrap_or("Any")
    )
}

/// HTTP client for the insight service
#[derive(Clone)]
pub struct InsightClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl InsightClient {
    /// Build a client from configuration.
    ///
    /// Returns `Ok(None)` when no endpoint is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a URL or the underlying HTTP
    /// client cannot be built.
    pub fn from_config(config: &InsightConfig) -> Result<Option<Self>, InsightError> {
        let Some(endpoint) = config
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
        else {
            return Ok(None);
        };

        if let Err(e) = reqwest::Url::parse(endpoint) {
            return Err(InsightError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: e.to_string(),
            });
        }

        let client = Client::builder()
            .timeout(
                config
                    .timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .build()?;

        Ok(Some(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
        }))
    }

    /// Like [`InsightClient::from_config`], but a configuration error is
    /// logged and disables the insight instead of failing
    #[must_use]
    pub fn from_config_or_warn(config: &InsightConfig) -> Option<Self> {
        match Self::from_config(config) {
            Ok(client) => client,
            Err(e) => {
                warn!("Insight disabled: {e}");
                None
            }
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the service for an insight.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a
    /// body that is not a JSON object.
    pub async fn fetch(
        &self,
        profile: &StudentProfile,
        catalog: &PostingCatalog,
    ) -> Result<Option<String>, InsightError> {
        let request = InsightRequest::new(profile, catalog);

        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(InsightError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: InsightResponse = response.json().await?;
        debug!(
            has_insight = body.response.is_some(),
            "Insight service responded"
        );
        Ok(body.response.filter(|text| !text.trim().is_empty()))
    }

    /// Like [`InsightClient::fetch`], but any failure is logged and mapped to `None`
    pub async fn fetch_best_effort(
        &self,
        profile: &StudentProfile,
        catalog: &PostingCatalog,
    ) -> Option<String> {
        match self.fetch(profile, catalog).await {
            Ok(insight) => insight,
            Err(e) => {
                warn!("Insight request to {} failed: {e}", self.endpoint);
                None
            }
        }
    }
}
