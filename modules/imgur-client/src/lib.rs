pub mod error;
pub mod types;

pub use error::{ImgurError, Result};
pub use types::{
    ApiResponse, Comment, CommentAccount, CommentPost, GalleryPost, MediaUnit, PostMedia, Tag,
    TaggedGallery,
};

use reqwest::header::AUTHORIZATION;

/// Thin authenticated GET wrapper over the Imgur REST API. Endpoint
/// construction and response interpretation live with the callers; this
/// client only knows how to fetch a URL as JSON with a client key.
pub struct ImgurClient {
    client: reqwest::Client,
}

impl ImgurClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Authenticated GET returning the parsed JSON body. The key goes out as
    /// an `Authorization: Client-ID` header on every request.
    pub async fn get_json(&self, url: &str, api_key: &str) -> Result<serde_json::Value> {
        tracing::debug!(url, "Fetching from Imgur API");

        let resp = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("Client-ID {api_key}"))
            .send()
            .await
            .map_err(|e| ImgurError::network(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ImgurError::Api {
                url: url.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        resp.json().await.map_err(|e| ImgurError::parse(url, e))
    }
}

impl Default for ImgurClient {
    fn default() -> Self {
        Self::new()
    }
}
