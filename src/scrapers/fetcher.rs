use async_trait::async_trait;

use crate::core::FetchFailure;
use crate::http::FetchedPage;

/// Retrieves one page. Implementations must report every problem as a
/// [`FetchFailure`] so the caller can carry on with the next URL.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchFailure>;
}
