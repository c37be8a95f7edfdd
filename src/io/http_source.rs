use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use super::PropertiesSource;
use crate::error::IoError;

/// HTTP-backed implementation of PropertiesSource.
///
/// Issues a single GET per fetch and returns the whole body. No caching and
/// no retries; a failed request is reported to the caller as is.
#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    /// Create a source with a request timeout and User-Agent header.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, IoError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| IoError::Http(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PropertiesSource for HttpSource {
    async fn fetch(&self, location: &str) -> Result<Bytes, IoError> {
        let url = Url::parse(location).map_err(|e| IoError::InvalidUrl {
            url: location.to_string(),
            reason: e.to_string(),
        })?;

        debug!(%url, "Fetching");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                IoError::Connection(e.to_string())
            } else {
                IoError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(IoError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Request failed");
            return Err(IoError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| IoError::Connection(e.to_string()))?;

        debug!(%url, bytes = body.len(), "Fetched");
        Ok(body)
    }

    fn name(&self) -> &str {
        "http"
    }
}
