// HTTP client for the Arbeitnow job-board API
// One GET per page, no automatic retry; errors surface to the caller and
// the page cache stays untouched.

use async_trait::async_trait;
use joblens_core::domain::JobRecord;
use joblens_core::port::{FetchError, JobSource};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::models::JobsResponse;

/// Public job-board endpoint.
pub const DEFAULT_API_URL: &str = "https://www.arbeitnow.com/api/job-board-api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct ArbeitnowClient {
    http: Client,
    api_url: String,
}

impl ArbeitnowClient {
    pub fn new(api_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            api_url: api_url.into(),
        })
    }
}

#[async_trait]
impl JobSource for ArbeitnowClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<JobRecord>, FetchError> {
        debug!(page, url = %self.api_url, "requesting job page");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: JobsResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        debug!(page, count = body.data.len(), "job page received");
        Ok(body.data.into_iter().map(|dto| dto.into_record()).collect())
    }
}
