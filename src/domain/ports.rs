use crate::utils::error::Result;
use async_trait::async_trait;

/// Injected fetch capability. The loader never owns a transport; callers pass
/// an implementation (HTTP in production, a mock in tests).
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Performs one GET against `url` and returns the raw response body.
    async fn get(&self, url: &str) -> Result<Vec<u8>>;
}
