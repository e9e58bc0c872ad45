// Test mock for the one trait boundary in the pipeline:
// - MockFetcher (JsonFetcher) — HashMap-based URL→JSON response, with a
//   request log so tests can assert which endpoints were hit and how often.
//
// Enables deterministic pipeline tests: no network, no credentials.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use imgur_client::ImgurError;

use crate::traits::JsonFetcher;

/// HashMap-based JSON fetcher. Returns an API error for unregistered URLs.
/// Builder pattern: `.on_json(url, value)`.
pub struct MockFetcher {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn on_json(mut self, url: &str, value: Value) -> Self {
        self.responses.insert(url.to_string(), value);
        self
    }

    /// Every URL fetched so far, in request order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// How many times a given URL was fetched.
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.as_str() == url)
            .count()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JsonFetcher for MockFetcher {
    async fn fetch_json(&self, url: &str, _api_key: &str) -> imgur_client::Result<Value> {
        self.requests.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ImgurError::Api {
                url: url.to_string(),
                status: 404,
                message: format!("MockFetcher: no response registered for {url}"),
            })
    }
}
