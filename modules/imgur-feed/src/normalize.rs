use chrono::DateTime;

use imgur_client::{ApiResponse, GalleryPost, MediaUnit, PostMedia, Tag};

use crate::error::FeedError;
use crate::feed::FeedItem;
use crate::render::render_media;
use crate::router::{decode, API_BASE};
use crate::traits::JsonFetcher;

/// Largest album the gallery endpoints embed in full. Anything bigger ships
/// a truncated preview and must be re-fetched from the album endpoint.
/// Upstream API contract, not tunable.
pub const ALBUM_PREVIEW_LIMIT: u32 = 3;

/// Normalize a batch of gallery posts, in order. Any failure aborts the
/// whole batch: feed consumers expect a consistent snapshot, never a
/// truncated item list.
pub async fn normalize_posts(
    fetcher: &dyn JsonFetcher,
    posts: Vec<GalleryPost>,
    api_key: &str,
) -> Result<Vec<FeedItem>, FeedError> {
    let mut items = Vec::with_capacity(posts.len());
    for post in posts {
        items.push(normalize_post(fetcher, post, api_key).await?);
    }
    Ok(items)
}

/// Convert one gallery post into a feed item, expanding its album if it
/// has one.
pub async fn normalize_post(
    fetcher: &dyn JsonFetcher,
    post: GalleryPost,
    api_key: &str,
) -> Result<FeedItem, FeedError> {
    let content = match &post.media {
        PostMedia::Album { .. } => {
            let units = expand_album(fetcher, &post, api_key).await?;
            units.iter().map(render_media).collect::<String>()
        }
        PostMedia::Single { mime, description } => render_media(&MediaUnit {
            link: post.link.clone(),
            mime: mime.clone(),
            description: description.clone(),
        }),
        PostMedia::Bare {} => String::new(),
    };

    Ok(FeedItem {
        uri: post.link,
        title: post.title.unwrap_or_default(),
        timestamp: DateTime::from_timestamp(post.datetime, 0).unwrap_or(DateTime::UNIX_EPOCH),
        author: post.account_url.unwrap_or_default(),
        content,
        categories: dedup_tags(&post.tags),
    })
}

/// Resolve the complete, ordered media list for an album post. Small albums
/// arrive fully embedded; larger ones need one follow-up fetch, whose result
/// replaces the preview entirely.
pub async fn expand_album(
    fetcher: &dyn JsonFetcher,
    post: &GalleryPost,
    api_key: &str,
) -> Result<Vec<MediaUnit>, FeedError> {
    let PostMedia::Album {
        images,
        images_count,
    } = &post.media
    else {
        return Ok(Vec::new());
    };

    if *images_count <= ALBUM_PREVIEW_LIMIT {
        return Ok(images.clone());
    }

    tracing::debug!(album_id = post.id.as_str(), images_count, "Album preview truncated, fetching full image list");
    let url = format!("{API_BASE}/album/{}/images", post.id);
    let value = fetcher.fetch_json(&url, api_key).await?;
    let response: ApiResponse<Vec<MediaUnit>> = decode(value, &url)?;
    Ok(response.data)
}

/// Tag names in first-seen order, duplicates removed.
fn dedup_tags(tags: &[Tag]) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag.name) {
            seen.push(tag.name.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_dedup_preserves_first_seen_order() {
        let tags: Vec<Tag> = ["a", "b", "a", "c"]
            .iter()
            .map(|n| Tag {
                name: n.to_string(),
            })
            .collect();
        assert_eq!(dedup_tags(&tags), vec!["a", "b", "c"]);
    }

    #[test]
    fn no_tags_means_no_categories() {
        assert!(dedup_tags(&[]).is_empty());
    }
}
