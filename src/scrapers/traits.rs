use crate::error::Result;
use async_trait::async_trait;

/// Source of raw page markup.
/// The HTTP implementation lives in `fetcher`; tests plug in canned pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the body, or a transport/status error
    async fn fetch(&self, url: &str) -> Result<String>;
}
