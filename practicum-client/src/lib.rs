//! # practicum-client
//!
//! Client for the Practicum homework-review API: one authenticated GET per
//! poll cycle, structural validation of the response, and formatting of a
//! homework record into a notification sentence.

pub mod response;
pub mod status;

pub use response::{check_response, Homework, StatusPage};
pub use status::{parse_status, verdict};

use std::time::Duration;

use chrono::Utc;
use hwbot_core::{HwbotError, Result};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

/// Production endpoint for homework statuses.
pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Bound on one request; a stuck connection becomes a Connectivity error
/// instead of blocking the loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the review API. Holds the OAuth token and the endpoint;
/// issues one GET per call, no retries (retry is the poll loop's fixed delay).
pub struct PracticumClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    /// Creates a client against the production [`ENDPOINT`].
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_endpoint(token, ENDPOINT)
    }

    /// Creates a client against a custom endpoint (tests, mirrors).
    pub fn with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HwbotError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    /// Fetches homework statuses changed since `from_date` (unix seconds).
    /// A non-positive `from_date` substitutes the current time.
    ///
    /// Returns the raw JSON body; callers validate it with [`check_response`].
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let from_date = if from_date > 0 {
            from_date
        } else {
            Utc::now().timestamp()
        };
        debug!(from_date, endpoint = %self.endpoint, "requesting homework statuses");

        let response = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|source| HwbotError::Connectivity {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        info!(status = status.as_u16(), "homework API responded");
        if status != StatusCode::OK {
            return Err(HwbotError::HttpStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| HwbotError::Schema(format!("response body is not valid JSON: {e}")))
    }
}
