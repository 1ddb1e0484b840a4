//! erail HTTP client.

use std::time::Duration;

use tracing::{debug, error};

use crate::domain::{StationCode, TrainNumber};

use super::UpstreamSource;
use super::error::UpstreamError;

/// Default base URL of the upstream site.
const DEFAULT_BASE_URL: &str = "https://erail.in";

/// The upstream serves bot-looking clients an error page.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/124.0 Safari/537.36";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest error body kept in an [`UpstreamError::Status`].
const MAX_ERROR_BODY: usize = 500;

/// Query parameters the upstream expects on every train query.
const COMMON_QUERY: [(&str, &str); 3] = [("DataSource", "0"), ("Language", "0"), ("Cache", "true")];

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Base URL for the site (defaults to production erail)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl UpstreamConfig {
    /// Create a config pointing at the production site.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP client for the erail site.
#[derive(Debug, Clone)]
pub struct ErailClient {
    http: reqwest::Client,
    base_url: String,
}

impl ErailClient {
    /// Create a new client with the given configuration.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// GET a path and return the body text.
    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .inspect_err(|e| error!(%url, error = %e, "upstream request failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%url, status = status.as_u16(), "upstream returned error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "upstream response");
        Ok(body)
    }
}

impl UpstreamSource for ErailClient {
    async fn fetch_train(&self, train_no: &TrainNumber) -> Result<String, UpstreamError> {
        let mut query = vec![("TrainNo", train_no.as_str())];
        query.extend(COMMON_QUERY);
        self.get_text("/rail/getTrains.aspx", &query).await
    }

    async fn fetch_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<String, UpstreamError> {
        let mut query = vec![("Station_From", from.as_str()), ("Station_To", to.as_str())];
        query.extend(COMMON_QUERY);
        self.get_text("/rail/getTrains.aspx", &query).await
    }

    async fn fetch_route(&self, train_id: &str) -> Result<String, UpstreamError> {
        let query = [
            ("Action", "TRAINROUTE"),
            ("Password", "2012"),
            ("Data1", train_id),
            ("Data2", "0"),
            ("Cache", "true"),
        ];
        self.get_text("/data.aspx", &query).await
    }

    async fn fetch_live_board(&self, station: &StationCode) -> Result<String, UpstreamError> {
        let path = format!("/station-live/{}", station.as_str());
        self.get_text(&path, &COMMON_QUERY).await
    }
}
