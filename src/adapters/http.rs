use crate::domain::ports::Fetch;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Production fetch capability backed by reqwest.
///
/// No timeout or abort is configured; cancellation is the caller's concern.
/// The HTTP status is not checked, so an error body is returned like any
/// other body and fails later at decode time if its shape is wrong.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        tracing::debug!("HTTP response status: {}", response.status());

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
