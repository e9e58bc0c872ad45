// Trait abstraction for the one external capability the pipeline needs:
// an authenticated JSON GET. Everything downstream of it — routing, album
// expansion, normalization — is deterministic, so a MockFetcher gives full
// pipeline tests with no network.

use async_trait::async_trait;
use serde_json::Value;

use imgur_client::ImgurClient;

#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Authenticated GET returning the parsed JSON body. The key is threaded
    /// per call; no fetcher holds ambient credentials.
    async fn fetch_json(&self, url: &str, api_key: &str) -> imgur_client::Result<Value>;
}

#[async_trait]
impl JsonFetcher for ImgurClient {
    async fn fetch_json(&self, url: &str, api_key: &str) -> imgur_client::Result<Value> {
        self.get_json(url, api_key).await
    }
}
