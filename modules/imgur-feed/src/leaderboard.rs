use imgur_client::{ApiResponse, Comment};

use crate::error::FeedError;
use crate::feed::FeedItem;
use crate::router::decode;
use crate::traits::JsonFetcher;

/// The leaderboard lives on the v1 comment API, not the v3 gallery API, and
/// authenticates via a query parameter instead of a header.
const TOP_COMMENTS_URL: &str = "https://api.imgur.com/comment/v1/comments/top";

/// Fetch the top-comments leaderboard and rank it into feed items. Response
/// order is rank order; the endpoint returns the complete list in one page.
pub async fn normalize_leaderboard(
    fetcher: &dyn JsonFetcher,
    api_key: &str,
) -> Result<Vec<FeedItem>, FeedError> {
    let url = format!("{TOP_COMMENTS_URL}?client_id={api_key}");
    let value = fetcher.fetch_json(&url, api_key).await?;
    let response: ApiResponse<Vec<Comment>> = decode(value, &url)?;

    let items = response
        .data
        .into_iter()
        .enumerate()
        .map(|(i, comment)| FeedItem {
            uri: format!(
                "https://imgur.com/gallery/{}/comment/{}",
                comment.post.id, comment.id
            ),
            title: ordinal(i + 1),
            timestamp: comment.created_at,
            author: comment.account.username,
            content: comment.comment,
            categories: Vec::new(),
        })
        .collect();

    Ok(items)
}

/// English ordinal: 1st, 2nd, 3rd, 4th... with the 11th/12th/13th exception.
fn ordinal(n: usize) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_english_suffix_rules() {
        for (n, expected) in [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (103, "103rd"),
            (111, "111th"),
        ] {
            assert_eq!(ordinal(n), expected);
        }
    }
}
