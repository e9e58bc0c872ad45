use chrono::{DateTime, Utc};
use serde::Serialize;

/// One normalized feed entry, whatever query mode produced it. Built once
/// per gallery post or leaderboard comment and handed to the output sink
/// as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedItem {
    pub uri: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    /// Rendered HTML for gallery posts; plain comment text for leaderboard
    /// entries.
    pub content: String,
    /// Tag names in first-seen order, duplicates removed. Empty for
    /// leaderboard entries.
    pub categories: Vec<String>,
}
