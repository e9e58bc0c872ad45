use serde::de::DeserializeOwned;
use serde_json::Value;

use imgur_client::{ApiResponse, GalleryPost, TaggedGallery};

use crate::error::FeedError;
use crate::feed::FeedItem;
use crate::leaderboard::normalize_leaderboard;
use crate::normalize::normalize_posts;
use crate::query::QueryMode;
use crate::traits::JsonFetcher;

pub(crate) const API_BASE: &str = "https://api.imgur.com/3";

/// Run one query end to end: build the endpoint for the mode, fetch it once,
/// and normalize the response into feed items. Album expansion may add
/// follow-up fetches; nothing else does. Stateless — every call is
/// independent.
pub async fn route(
    fetcher: &dyn JsonFetcher,
    query: &QueryMode,
    api_key: &str,
) -> Result<Vec<FeedItem>, FeedError> {
    tracing::info!(query = %query, "Running Imgur feed query");

    let items = match query {
        QueryMode::User { username } => {
            let url = format!("{API_BASE}/account/{username}/submissions/0/newest");
            let value = fetcher.fetch_json(&url, api_key).await?;
            let response: ApiResponse<Vec<GalleryPost>> = decode(value, &url)?;
            normalize_posts(fetcher, response.data, api_key).await?
        }
        QueryMode::Tag { tag } => {
            let url = format!("{API_BASE}/gallery/t/{tag}");
            let value = fetcher.fetch_json(&url, api_key).await?;
            let response: ApiResponse<TaggedGallery> = decode(value, &url)?;
            normalize_posts(fetcher, response.data.items, api_key).await?
        }
        QueryMode::Gallery {
            section,
            sort,
            window,
        } => {
            let url = format!(
                "{API_BASE}/gallery/{}/{}/{}",
                section.as_str(),
                sort.as_str(),
                window.as_str()
            );
            let value = fetcher.fetch_json(&url, api_key).await?;
            let response: ApiResponse<Vec<GalleryPost>> = decode(value, &url)?;
            normalize_posts(fetcher, response.data, api_key).await?
        }
        QueryMode::Leaderboard => normalize_leaderboard(fetcher, api_key).await?,
    };

    tracing::info!(count = items.len(), "Query produced feed items");
    Ok(items)
}

/// Decode a fetched JSON body into its typed envelope. A body that does not
/// match the expected shape counts as a malformed response for that URL.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, url: &str) -> Result<T, FeedError> {
    serde_json::from_value(value).map_err(|e| FeedError::MalformedResponse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
