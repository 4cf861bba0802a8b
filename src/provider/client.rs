// HTTP client for the influencer data provider.
//
// POSTs a JSON search body to `{base_url}/{platform}/search` and decodes the
// `{lookalikes, directs, total}` response. Calls are rate-limited and time
// out, and every failure is reported as a `ProviderError` so the orchestrator
// can fall back to the local dataset.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use super::models::{ProviderRequest, ProviderResponse};
use super::rate_limiter::RateLimiter;
use super::traits::ProviderClient;
use crate::error::ProviderError;
use crate::filters::Platform;

/// Provider client over HTTPS.
pub struct HttpProviderClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    rate_limiter: RateLimiter,
}

impl HttpProviderClient {
    /// Create a client for the provider at `base_url`.
    pub fn new(
        base_url: &str,
        api_key: &str,
        requests_per_second: f64,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("scout/0.1 (influencer-search)")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            rate_limiter: RateLimiter::new(requests_per_second)?,
        })
    }

    fn search_url(&self, platform: Platform) -> String {
        format!("{}/{}/search", self.base_url, platform.as_str())
    }
}

#[async_trait]
impl ProviderClient for HttpProviderClient {
    async fn query(
        &self,
        platform: Platform,
        request: &ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        self.rate_limiter.acquire().await;

        let url = self.search_url(platform);
        debug!(url = %url, page = request.page, "Provider search request");

        let mut builder = self.client.post(&url).json(request);
        if !self.api_key.is_empty() {
            builder = builder.bearer_auth(&self.api_key);
        }

        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let body = response.text().await?;
        let parsed: ProviderResponse =
            serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))?;

        debug!(
            platform = %platform,
            lookalikes = parsed.lookalikes.len(),
            directs = parsed.directs.len(),
            total = parsed.total,
            "Provider search complete"
        );

        Ok(parsed)
    }
}
