use crate::domain::ports::Fetch;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;

/// Loads a remote JSON dataset from a fixed endpoint.
///
/// The URL is fixed at construction; the transport is injected per call. One
/// invocation issues exactly one request, and nothing is cached between calls.
pub struct RemoteDataLoader {
    url: String,
}

impl RemoteDataLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the endpoint and decodes the body as a JSON array of records.
    ///
    /// Failures (transport, malformed body) propagate to the caller; there is
    /// no retry, fallback, or timeout here.
    pub async fn load<T, F>(&self, fetcher: &F) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        F: Fetch + ?Sized,
    {
        tracing::debug!("Fetching dataset from: {}", self.url);
        let body = fetcher.get(&self.url).await?;

        let records: Vec<T> = serde_json::from_slice(&body)?;
        tracing::debug!("Parsed {} records", records.len());

        Ok(records)
    }

    /// Fetches the endpoint and passes the parsed JSON through verbatim,
    /// without assuming any record shape.
    pub async fn load_value<F>(&self, fetcher: &F) -> Result<serde_json::Value>
    where
        F: Fetch + ?Sized,
    {
        let body = fetcher.get(&self.url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
