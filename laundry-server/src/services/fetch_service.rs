use async_trait::async_trait;
use laundry_api::models::ApplianceSnapshot;
use reqwest::header::{ACCEPT, REFERER, USER_AGENT};
use serde_json::Value;

use crate::configs::Upstream;
use crate::errors::FetchError;

#[async_trait]
pub trait SnapshotFetcher: Send + Sync {
    async fn fetch(&self) -> Result<ApplianceSnapshot, FetchError>;
}

/// Reads the room status over HTTP. One request per call, no retries.
pub struct HttpFetcher {
    http_client: reqwest::Client,
    upstream: Upstream,
}

impl HttpFetcher {
    pub fn new(upstream: Upstream) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            upstream,
        }
    }
}

#[async_trait]
impl SnapshotFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<ApplianceSnapshot, FetchError> {
        let response = self
            .http_client
            .get(&self.upstream.url)
            .query(&self.upstream.query())
            .header(ACCEPT, &self.upstream.headers.accept)
            .header(REFERER, &self.upstream.headers.referer)
            .header(USER_AGENT, &self.upstream.headers.user_agent)
            .send()
            .await?;

        tracing::debug!("room status responded with {}", response.status());

        let body = response.text().await?;
        let payload = serde_json::from_str::<Value>(&body)?;

        ApplianceSnapshot::from_payload(payload).ok_or(FetchError::Shape)
    }
}
