use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Wrapper for Imgur API responses; every endpoint nests its payload
/// under `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Payload of the `gallery/t/{tag}` endpoint: the post list is nested one
/// level deeper than everywhere else.
#[derive(Debug, Clone, Deserialize)]
pub struct TaggedGallery {
    pub items: Vec<GalleryPost>,
}

/// A tag reference on a gallery post.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// One gallery submission. May embed an album, be a single image/video
/// itself, or carry no media at all; see [`PostMedia`].
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryPost {
    pub id: String,
    pub link: String,
    pub title: Option<String>,
    /// Unix seconds.
    pub datetime: i64,
    pub account_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(flatten)]
    pub media: PostMedia,
}

/// How a gallery post carries its media, decided once when the JSON is
/// parsed. The upstream signals the shape by which fields are present:
/// an `images` array for albums, a bare `type` for single-image posts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostMedia {
    /// Post embeds an album. For albums over the preview size the embedded
    /// list is a truncated preview and must be re-fetched in full.
    Album {
        images: Vec<MediaUnit>,
        #[serde(default)]
        images_count: u32,
    },
    /// The post is itself a single image or video; its link doubles as the
    /// media link.
    Single {
        #[serde(rename = "type")]
        mime: String,
        description: Option<String>,
    },
    /// Neither shape — nothing renderable.
    Bare {},
}

/// A single image or video inside an album.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaUnit {
    pub link: String,
    /// MIME string, e.g. `image/png` or `video/mp4`.
    #[serde(rename = "type")]
    pub mime: String,
    pub description: Option<String>,
}

/// One entry of the top-comments leaderboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub comment: String,
    /// RFC 3339, unlike the unix-seconds timestamps on gallery posts.
    pub created_at: DateTime<Utc>,
    pub post: CommentPost,
    pub account: CommentAccount,
}

/// The gallery post a leaderboard comment was left on.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentPost {
    pub id: String,
}

/// Author info nested inside a leaderboard comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentAccount {
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn album_post_parses_as_album() {
        let post: GalleryPost = serde_json::from_value(json!({
            "id": "abc123",
            "link": "https://imgur.com/a/abc123",
            "title": "An album",
            "datetime": 1_600_000_000,
            "account_url": "Sarah",
            "tags": [{"name": "cats"}],
            "images_count": 2,
            "images": [
                {"link": "https://i.imgur.com/1.png", "type": "image/png", "description": null},
                {"link": "https://i.imgur.com/2.mp4", "type": "video/mp4", "description": "clip"}
            ]
        }))
        .unwrap();

        match post.media {
            PostMedia::Album {
                images,
                images_count,
            } => {
                assert_eq!(images.len(), 2);
                assert_eq!(images_count, 2);
                assert_eq!(images[1].mime, "video/mp4");
            }
            other => panic!("expected album, got {other:?}"),
        }
    }

    #[test]
    fn single_image_post_parses_as_single() {
        let post: GalleryPost = serde_json::from_value(json!({
            "id": "xyz",
            "link": "https://i.imgur.com/xyz.jpg",
            "title": "Just one",
            "datetime": 1_600_000_000,
            "account_url": "Sarah",
            "tags": [],
            "type": "image/jpeg",
            "description": "hello"
        }))
        .unwrap();

        match post.media {
            PostMedia::Single { mime, description } => {
                assert_eq!(mime, "image/jpeg");
                assert_eq!(description.as_deref(), Some("hello"));
            }
            other => panic!("expected single, got {other:?}"),
        }
    }

    #[test]
    fn post_without_media_parses_as_bare() {
        let post: GalleryPost = serde_json::from_value(json!({
            "id": "bare",
            "link": "https://imgur.com/gallery/bare",
            "title": null,
            "datetime": 1_600_000_000,
            "account_url": null
        }))
        .unwrap();

        assert!(matches!(post.media, PostMedia::Bare {}));
        assert!(post.tags.is_empty());
        assert!(post.title.is_none());
    }

    #[test]
    fn album_without_count_defaults_to_zero() {
        let post: GalleryPost = serde_json::from_value(json!({
            "id": "abc",
            "link": "https://imgur.com/a/abc",
            "title": "t",
            "datetime": 0,
            "account_url": "u",
            "images": [{"link": "https://i.imgur.com/1.png", "type": "image/png", "description": null}]
        }))
        .unwrap();

        match post.media {
            PostMedia::Album { images_count, .. } => assert_eq!(images_count, 0),
            other => panic!("expected album, got {other:?}"),
        }
    }

    #[test]
    fn comment_parses_with_rfc3339_timestamp() {
        let comment: Comment = serde_json::from_value(json!({
            "id": 1914321798,
            "comment": "nice",
            "created_at": "2021-06-01T12:00:00Z",
            "post": {"id": "abc123"},
            "account": {"username": "commenter"}
        }))
        .unwrap();

        assert_eq!(comment.post.id, "abc123");
        assert_eq!(comment.account.username, "commenter");
        assert_eq!(comment.created_at.to_rfc3339(), "2021-06-01T12:00:00+00:00");
    }
}
